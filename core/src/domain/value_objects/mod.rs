//! Value objects shared between services and the transport layer.

pub mod auth_response;

pub use auth_response::AuthResponse;
