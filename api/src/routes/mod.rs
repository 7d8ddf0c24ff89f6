//! Route handlers.

pub mod account;

pub use account::AppState;
