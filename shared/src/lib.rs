//! Shared utilities and common types for the Identity server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response structures
//! - Validation utilities

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, CookieConfig, DatabaseConfig, JwtConfig, MailConfig, ServerConfig};
pub use types::response::{ApiResponse, ErrorResponse};
pub use utils::validation;
