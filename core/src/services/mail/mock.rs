//! In-memory mailer for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::errors::DomainError;

use super::MailerService;

/// A sent message captured by [`MockMailer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub to: String,
    pub url: String,
    pub kind: SentMailKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentMailKind {
    Activation,
    PasswordReset,
}

/// Mock mailer that records messages instead of delivering them
#[derive(Default)]
pub struct MockMailer {
    sent: Arc<Mutex<Vec<SentMail>>>,
    fail: bool,
}

impl MockMailer {
    /// Create a mailer that accepts every message
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mailer that fails every send
    pub fn failing() -> Self {
        Self {
            sent: Arc::default(),
            fail: true,
        }
    }

    /// Messages captured so far
    pub async fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().await.clone()
    }

    async fn record(&self, to: &str, url: &str, kind: SentMailKind) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::Internal {
                message: "smtp transport unavailable".to_string(),
            });
        }
        self.sent.lock().await.push(SentMail {
            to: to.to_string(),
            url: url.to_string(),
            kind,
        });
        Ok(())
    }
}

#[async_trait]
impl MailerService for MockMailer {
    async fn send_activation_link(
        &self,
        to: &str,
        activation_url: &str,
    ) -> Result<(), DomainError> {
        self.record(to, activation_url, SentMailKind::Activation).await
    }

    async fn send_password_reset_link(
        &self,
        to: &str,
        reset_url: &str,
    ) -> Result<(), DomainError> {
        self.record(to, reset_url, SentMailKind::PasswordReset).await
    }
}
