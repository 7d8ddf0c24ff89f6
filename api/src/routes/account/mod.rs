//! Account route handlers
//!
//! This module contains all account-related endpoints:
//! - Registration and email activation
//! - Login and logout
//! - Token refresh
//! - Password change
//! - User listing (authenticated)

pub mod activate;
pub mod change_password;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod registration;
pub mod users;

use std::sync::Arc;

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpRequest;

use id_core::repositories::{SessionRepository, UserRepository};
use id_core::services::{AccountService, MailerService};
use id_shared::config::CookieConfig;

/// Application state that holds shared services
pub struct AppState<U, S, M>
where
    U: UserRepository,
    S: SessionRepository,
    M: MailerService + 'static,
{
    pub account_service: Arc<AccountService<U, S, M>>,
    pub cookie: CookieConfig,
    pub client_url: String,
}

/// Build the HTTP-only refresh token cookie
pub(crate) fn refresh_cookie<'a>(config: &'a CookieConfig, token: &'a str) -> Cookie<'a> {
    Cookie::build(config.name.clone(), token)
        .path("/")
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(config.max_age_days))
        .finish()
}

/// Build an expired cookie that clears the refresh token
pub(crate) fn clear_refresh_cookie(config: &CookieConfig) -> Cookie<'static> {
    Cookie::build(config.name.clone(), "")
        .path("/")
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .finish()
}

/// Read the refresh token from the request cookie, if present
pub(crate) fn refresh_token_from_request(req: &HttpRequest, config: &CookieConfig) -> String {
    req.cookie(&config.name)
        .map(|c| c.value().to_string())
        .unwrap_or_default()
}
