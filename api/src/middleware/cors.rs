//! CORS middleware configuration for cross-origin requests.
//!
//! The configuration is environment-aware: development allows any origin
//! for easy local testing, production restricts to the configured client
//! origin. Credentials are always allowed because the refresh token rides
//! in a cookie.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Creates a CORS middleware instance configured for the current environment.
///
/// # Environment Variables
/// - `ENVIRONMENT`: Set to "production" for production settings
/// - `CLIENT_URL`: The web client origin allowed in production
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let max_age = env::var("CORS_MAX_AGE")
        .unwrap_or_else(|_| "3600".to_string())
        .parse::<usize>()
        .unwrap_or(3600);

    if environment == "production" {
        create_production_cors(max_age)
    } else {
        create_development_cors(max_age)
    }
}

/// Permissive configuration for local development.
fn create_development_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allowed_origin_fn(|_, _| true)
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .supports_credentials()
        .max_age(max_age)
}

/// Restricted configuration for production: only the configured client
/// origin may make credentialed requests.
fn create_production_cors(max_age: usize) -> Cors {
    let client_url =
        env::var("CLIENT_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    log::info!("Configuring CORS for production, allowed origin: {client_url}");

    Cors::default()
        .allowed_origin(&client_url)
        .allowed_methods(vec![Method::GET, Method::POST])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(max_age)
}
