//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::UserSummary;

/// Authentication response returned after registration, login and refresh
///
/// Contains the freshly minted token pair and a safe summary of the user.
/// The transport layer additionally moves the refresh token into an
/// HTTP-only cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token for obtaining new token pairs
    pub refresh_token: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,

    /// Public view of the authenticated user
    pub user: UserSummary,
}

impl AuthResponse {
    /// Creates an authentication response from a token pair and user summary
    pub fn from_token_pair(token_pair: TokenPair, user: UserSummary) -> Self {
        Self {
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
            expires_in: token_pair.access_expires_in,
            user,
        }
    }
}
