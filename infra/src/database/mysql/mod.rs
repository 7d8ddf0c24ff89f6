//! MySQL repository implementations.

mod session_repository_impl;
mod user_repository_impl;

pub use session_repository_impl::MySqlSessionRepository;
pub use user_repository_impl::MySqlUserRepository;

use id_core::errors::DomainError;

pub(crate) fn internal(e: impl std::fmt::Display) -> DomainError {
    DomainError::Internal {
        message: e.to_string(),
    }
}
