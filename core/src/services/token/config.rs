//! Token configuration.

use id_shared::config::JwtConfig;

/// Configuration for token signing and lifetimes
///
/// Access and refresh tokens use independent secrets, so a leaked access
/// secret cannot be used to forge refresh tokens.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Secret key for signing access tokens (HS256)
    pub access_secret: String,

    /// Secret key for signing refresh tokens (HS256)
    pub refresh_secret: String,

    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,

    /// Refresh token expiry in days
    pub refresh_token_expiry_days: i64,

    /// Issuer claim embedded in every token
    pub issuer: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            access_secret: "dev-access-secret-change-in-production".to_string(),
            refresh_secret: "dev-refresh-secret-change-in-production".to_string(),
            access_token_expiry_minutes: 30,
            refresh_token_expiry_days: 30,
            issuer: "identity".to_string(),
        }
    }
}

impl From<&JwtConfig> for TokenConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            access_secret: config.access_secret.clone(),
            refresh_secret: config.refresh_secret.clone(),
            access_token_expiry_minutes: config.access_token_expiry_minutes,
            refresh_token_expiry_days: config.refresh_token_expiry_days,
            issuer: config.issuer.clone(),
        }
    }
}

impl TokenConfig {
    /// Access token lifetime in seconds
    pub fn access_expiry_seconds(&self) -> i64 {
        self.access_token_expiry_minutes * 60
    }

    /// Refresh token lifetime in seconds
    pub fn refresh_expiry_seconds(&self) -> i64 {
        self.refresh_token_expiry_days * 24 * 60 * 60
    }
}
