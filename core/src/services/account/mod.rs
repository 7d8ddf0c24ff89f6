//! Account flow coordinator: registration, activation, login, and the
//! password flows. Each flow ends by asking the session service to mint
//! or invalidate a session.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AccountConfig;
pub use service::AccountService;
