//! Mail transport implementations.

mod smtp_mailer;

pub use smtp_mailer::SmtpMailer;
