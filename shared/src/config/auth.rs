//! Authentication and session configuration

use serde::{Deserialize, Serialize};

/// JWT signing configuration
///
/// Access and refresh tokens are signed with independent secrets; a token
/// signed for one kind must never verify against the other kind's secret.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing access tokens
    pub access_secret: String,

    /// Secret key for signing refresh tokens
    pub refresh_secret: String,

    /// Access token expiry time in minutes
    pub access_token_expiry_minutes: i64,

    /// Refresh token expiry time in days
    pub refresh_token_expiry_days: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from("access-development-secret-change-in-production"),
            refresh_secret: String::from("refresh-development-secret-change-in-production"),
            access_token_expiry_minutes: 30,
            refresh_token_expiry_days: 30,
            issuer: String::from("identity"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with explicit secrets
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry_minutes = minutes;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry_days = days;
        self
    }

    /// Check if either secret is still a development default (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.access_secret.ends_with("change-in-production")
            || self.refresh_secret.ends_with("change-in-production")
    }
}

/// Refresh token cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Cookie name carrying the refresh token
    pub name: String,

    /// Cookie max-age in days (matches the refresh token lifetime)
    pub max_age_days: i64,

    /// Cookie HttpOnly flag
    #[serde(default = "default_http_only")]
    pub http_only: bool,

    /// Cookie Secure flag (HTTPS only)
    #[serde(default)]
    pub secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: String::from("refreshToken"),
            max_age_days: 30,
            http_only: default_http_only(),
            secure: false, // Set to true in production
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Refresh cookie configuration
    #[serde(default)]
    pub cookie: CookieConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let access_secret = std::env::var("JWT_ACCESS_SECRET")
            .unwrap_or_else(|_| "access-development-secret-change-in-production".to_string());
        let refresh_secret = std::env::var("JWT_REFRESH_SECRET")
            .unwrap_or_else(|_| "refresh-development-secret-change-in-production".to_string());
        let access_token_expiry_minutes = std::env::var("JWT_ACCESS_EXPIRY_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);
        let refresh_token_expiry_days = std::env::var("JWT_REFRESH_EXPIRY_DAYS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        Self {
            jwt: JwtConfig {
                access_secret,
                refresh_secret,
                access_token_expiry_minutes,
                refresh_token_expiry_days,
                issuer: String::from("identity"),
            },
            cookie: CookieConfig {
                max_age_days: refresh_token_expiry_days,
                ..Default::default()
            },
        }
    }
}

fn default_http_only() -> bool {
    true
}
