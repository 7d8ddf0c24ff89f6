//! Token entities for the session lifecycle subsystem.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

/// Which of the two paired tokens a codec operation targets
///
/// Each kind has its own signing secret and time-to-live; the two are
/// never interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Short-lived credential sent as a bearer token per request
    Access,
    /// Long-lived credential used solely to mint new pairs
    Refresh,
}

/// Claims embedded in both access and refresh tokens
///
/// The access and refresh tokens of one pair carry identical payload
/// fields at mint time; only `exp` and `jti` differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Email address of the subject
    pub email: String,

    /// Whether the account email has been activated
    pub is_activated: bool,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for a session payload with the given lifetime
    pub fn new(payload: &SessionPayload, ttl: Duration, issuer: &str) -> Self {
        let now = Utc::now();
        Self {
            sub: payload.user_id.to_string(),
            email: payload.email.clone(),
            is_activated: payload.is_activated,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// The claims a session is minted from: `{ user_id, email, is_activated }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPayload {
    /// Unique identifier for the user
    pub user_id: Uuid,

    /// Email address
    pub email: String,

    /// Whether the account email has been activated
    pub is_activated: bool,
}

impl From<&User> for SessionPayload {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            is_activated: user.is_activated,
        }
    }
}

impl TryFrom<Claims> for SessionPayload {
    type Error = DomainError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| DomainError::Token(TokenError::InvalidTokenFormat))?;
        Ok(Self {
            user_id,
            email: claims.email,
            is_activated: claims.is_activated,
        })
    }
}

/// Server-side session record: the current valid refresh token per user
///
/// Keyed by `user_id`; saving a new record replaces any previous one, so a
/// user holds at most one valid refresh token at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// User this session belongs to (storage key)
    pub user_id: Uuid,

    /// SHA-256 hash of the refresh token; raw tokens are never stored
    pub token_hash: String,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the refresh token expires
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Creates a new session record with the given refresh lifetime
    pub fn new(user_id: Uuid, token_hash: String, ttl_days: i64) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            token_hash,
            created_at: now,
            expires_at: now + Duration::days(ttl_days),
        }
    }

    /// Checks if the stored refresh token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: i64,
        refresh_expires_in: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> SessionPayload {
        SessionPayload {
            user_id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
            is_activated: true,
        }
    }

    #[test]
    fn test_claims_from_payload() {
        let payload = sample_payload();
        let claims = Claims::new(&payload, Duration::minutes(30), "identity");

        assert_eq!(claims.sub, payload.user_id.to_string());
        assert_eq!(claims.email, payload.email);
        assert!(claims.is_activated);
        assert_eq!(claims.iss, "identity");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_round_trip_to_payload() {
        let payload = sample_payload();
        let claims = Claims::new(&payload, Duration::minutes(30), "identity");
        let decoded = SessionPayload::try_from(claims).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_claims_with_bad_subject_fail_conversion() {
        let payload = sample_payload();
        let mut claims = Claims::new(&payload, Duration::minutes(30), "identity");
        claims.sub = "not-a-uuid".to_string();
        assert!(SessionPayload::try_from(claims).is_err());
    }

    #[test]
    fn test_expired_claims() {
        let payload = sample_payload();
        let claims = Claims::new(&payload, Duration::seconds(-1), "identity");
        assert!(claims.is_expired());
    }

    #[test]
    fn test_session_record_expiry() {
        let mut record = SessionRecord::new(Uuid::new_v4(), "hash".to_string(), 30);
        assert!(!record.is_expired());

        record.expires_at = Utc::now() - Duration::days(1);
        assert!(record.is_expired());
    }

    #[test]
    fn test_token_pair_serialization() {
        let pair = TokenPair::new("access".to_string(), "refresh".to_string(), 1800, 2592000);
        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: TokenPair = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
