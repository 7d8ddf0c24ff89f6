//! Token issuance, verification, and session lifecycle management.
//!
//! The codec handles pure JWT concerns (signing and verifying); the session
//! service layers the server-side store on top, giving rotation-on-use and
//! revocation semantics that stateless JWTs cannot provide alone.

mod codec;
mod config;
mod service;

#[cfg(test)]
mod tests;

pub use codec::TokenCodec;
pub use config::TokenConfig;
pub use service::SessionService;
