//! Repository interfaces for persistence collaborators.
//!
//! Concrete database-backed implementations live in the infra crate;
//! in-memory mocks next to each trait back the unit and lifecycle tests.

pub mod session;
pub mod user;

pub use session::{MockSessionRepository, SessionRepository};
pub use user::{MockUserRepository, UserRepository};
