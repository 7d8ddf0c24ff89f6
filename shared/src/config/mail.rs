//! SMTP mail delivery configuration

use serde::{Deserialize, Serialize};

/// SMTP transport configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// SMTP server hostname
    pub smtp_host: String,

    /// SMTP server port
    pub smtp_port: u16,

    /// SMTP username (empty disables authentication)
    pub smtp_user: String,

    /// SMTP password
    pub smtp_password: String,

    /// Sender address for outgoing mail
    pub from_address: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::from("localhost"),
            smtp_port: 587,
            smtp_user: String::new(),
            smtp_password: String::new(),
            from_address: String::from("noreply@identity.local"),
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let smtp_host = std::env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()
            .unwrap_or(587);
        let smtp_user = std::env::var("SMTP_USER").unwrap_or_default();
        let smtp_password = std::env::var("SMTP_PASSWORD").unwrap_or_default();
        let from_address = std::env::var("SMTP_FROM_ADDRESS")
            .unwrap_or_else(|_| "noreply@identity.local".to_string());

        Self {
            smtp_host,
            smtp_port,
            smtp_user,
            smtp_password,
            from_address,
        }
    }

    /// Whether the transport should authenticate
    pub fn has_credentials(&self) -> bool {
        !self.smtp_user.is_empty()
    }
}
