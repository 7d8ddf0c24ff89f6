//! # Identity API
//!
//! HTTP layer for the Identity backend: route handlers, DTOs, the JWT
//! authentication middleware, and the application factory.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
