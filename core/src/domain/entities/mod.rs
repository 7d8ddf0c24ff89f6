//! Domain entities for the Identity backend.

pub mod token;
pub mod user;

pub use token::{Claims, SessionPayload, SessionRecord, TokenKind, TokenPair};
pub use user::{User, UserSummary};
