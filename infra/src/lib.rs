//! # Identity Infrastructure
//!
//! Infrastructure layer for the Identity backend: MySQL-backed repository
//! implementations and the SMTP mail transport. Everything here implements
//! a trait owned by the core crate.

pub mod database;
pub mod mail;

pub use database::{create_pool, MySqlSessionRepository, MySqlUserRepository};
pub use mail::SmtpMailer;
