//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management
//! - Repository implementations for the core traits

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::create_pool;
pub use mysql::{MySqlSessionRepository, MySqlUserRepository};
