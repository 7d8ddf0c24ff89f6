//! Outbound mail abstraction.
//!
//! The account service only needs to hand off messages; delivery transport
//! lives in the infrastructure layer.

mod mock;

pub use mock::{MockMailer, SentMail, SentMailKind};

use async_trait::async_trait;

use crate::errors::DomainError;

/// Service trait for sending transactional account emails
#[async_trait]
pub trait MailerService: Send + Sync {
    /// Send the activation email containing the one-time activation URL
    async fn send_activation_link(
        &self,
        to: &str,
        activation_url: &str,
    ) -> Result<(), DomainError>;

    /// Send a password reset email containing the reset URL
    async fn send_password_reset_link(&self, to: &str, reset_url: &str)
        -> Result<(), DomainError>;
}
