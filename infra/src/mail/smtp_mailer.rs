//! SMTP implementation of the MailerService trait using lettre.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use id_core::errors::DomainError;
use id_core::services::MailerService;
use id_shared::config::MailConfig;

/// SMTP-backed mailer for transactional account emails
pub struct SmtpMailer {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpMailer {
    /// Build an SMTP mailer from mail configuration
    ///
    /// Without credentials the transport connects unauthenticated, which
    /// suits local development against a catch-all relay.
    pub fn new(config: &MailConfig) -> Result<Self, DomainError> {
        let mailer = if config.has_credentials() {
            let creds = Credentials::new(config.smtp_user.clone(), config.smtp_password.clone());
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
                .map_err(internal)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        };

        Ok(Self {
            mailer,
            from_address: config.from_address.clone(),
        })
    }

    async fn send(&self, to: &str, subject: &str, body: String) -> Result<(), DomainError> {
        let email = Message::builder()
            .from(self.from_address.parse().map_err(internal)?)
            .to(to.parse().map_err(internal)?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(internal)?;

        self.mailer.send(email).await.map_err(internal)?;
        Ok(())
    }
}

#[async_trait]
impl MailerService for SmtpMailer {
    async fn send_activation_link(
        &self,
        to: &str,
        activation_url: &str,
    ) -> Result<(), DomainError> {
        let body = format!(
            "Welcome!\n\n\
             Follow this link to activate your account:\n\n\
             {activation_url}\n\n\
             If you did not create this account, ignore this email.\n"
        );
        self.send(to, "Activate your account", body).await
    }

    async fn send_password_reset_link(
        &self,
        to: &str,
        reset_url: &str,
    ) -> Result<(), DomainError> {
        let body = format!(
            "A password reset was requested for your account.\n\n\
             Follow this link to choose a new password:\n\n\
             {reset_url}\n\n\
             If you did not request this, ignore this email.\n"
        );
        self.send(to, "Reset your password", body).await
    }
}

fn internal(e: impl std::fmt::Display) -> DomainError {
    DomainError::Internal {
        message: format!("mail transport error: {e}"),
    }
}
