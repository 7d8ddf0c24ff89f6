//! Session service: token pairs backed by a server-side store.

use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::domain::entities::token::{SessionPayload, SessionRecord, TokenKind, TokenPair};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::SessionRepository;

use super::codec::TokenCodec;

/// Hash a refresh token for storage and lookup
///
/// The store only ever sees hashes, so a database leak does not yield
/// usable refresh tokens.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Orchestrates the session lifecycle: issue, validate, revoke
///
/// Every issued pair replaces the user's stored refresh hash, so issuing
/// is also rotation. Validation requires both a valid JWT and a matching
/// store entry; either failing collapses to `DomainError::Unauthorized`
/// so callers cannot distinguish why a refresh was rejected.
pub struct SessionService<S: SessionRepository> {
    codec: TokenCodec,
    repository: Arc<S>,
}

impl<S: SessionRepository> SessionService<S> {
    /// Create a session service over a codec and a session store
    pub fn new(codec: TokenCodec, repository: Arc<S>) -> Self {
        Self { codec, repository }
    }

    /// The codec used to sign and verify tokens
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Mint a fresh token pair and persist the refresh hash
    ///
    /// Any previously stored refresh token for this user stops working
    /// the moment the new record is saved.
    pub async fn issue(&self, payload: &SessionPayload) -> DomainResult<TokenPair> {
        let access_token = self.codec.sign(payload, TokenKind::Access)?;
        let refresh_token = self.codec.sign(payload, TokenKind::Refresh)?;

        let record = SessionRecord::new(
            payload.user_id,
            hash_token(&refresh_token),
            self.codec.config().refresh_token_expiry_days,
        );
        self.repository.save(record).await?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.codec.config().access_expiry_seconds(),
            self.codec.config().refresh_expiry_seconds(),
        ))
    }

    /// Validate a presented refresh token against signature and store
    ///
    /// # Errors
    /// Returns `DomainError::Unauthorized` for every rejection: empty or
    /// malformed input, bad signature, expired token, or a token whose
    /// hash is no longer on file (rotated or revoked).
    pub async fn validate_refresh(&self, refresh_token: &str) -> DomainResult<SessionPayload> {
        if refresh_token.is_empty() {
            return Err(DomainError::Unauthorized);
        }

        let claims = self
            .codec
            .verify(refresh_token, TokenKind::Refresh)
            .map_err(|_| DomainError::Unauthorized)?;

        let record = self
            .repository
            .find_by_token_hash(&hash_token(refresh_token))
            .await?
            .ok_or(DomainError::Unauthorized)?;

        if record.is_expired() {
            return Err(DomainError::Unauthorized);
        }

        SessionPayload::try_from(claims).map_err(|_| DomainError::Unauthorized)
    }

    /// Revoke whatever session a user currently holds
    ///
    /// Used when the session must die without the refresh token in hand,
    /// e.g. after a password change.
    pub async fn revoke_user(&self, user_id: uuid::Uuid) -> DomainResult<()> {
        if let Some(record) = self.repository.find_by_user_id(user_id).await? {
            self.repository
                .remove_by_token_hash(&record.token_hash)
                .await?;
        }
        Ok(())
    }

    /// Revoke the session holding this refresh token
    ///
    /// Idempotent: revoking an unknown or already-revoked token succeeds.
    /// Returns whether a stored session was actually removed.
    pub async fn revoke(&self, refresh_token: &str) -> DomainResult<bool> {
        if refresh_token.is_empty() {
            return Ok(false);
        }
        let removed = self
            .repository
            .remove_by_token_hash(&hash_token(refresh_token))
            .await?;
        Ok(removed.is_some())
    }
}
