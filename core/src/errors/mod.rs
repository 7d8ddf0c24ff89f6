//! Domain-specific error types and error handling.
//!
//! Error messages are mapped to HTTP statuses and user-facing bodies at the
//! presentation layer; the core only distinguishes error kinds.

use thiserror::Error;

/// Account-related errors (bad-request class)
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("A user with email {email} is already registered")]
    EmailAlreadyRegistered { email: String },

    #[error("No user found with this email")]
    UserNotFound,

    #[error("Incorrect password")]
    WrongPassword,

    #[error("Invalid activation link")]
    InvalidActivationLink,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;
