//! Domain services.

pub mod account;
pub mod mail;
pub mod token;

pub use account::{AccountConfig, AccountService};
pub use mail::MailerService;
pub use token::{SessionService, TokenCodec, TokenConfig};
