//! Session repository trait: persistence for refresh token state.
//!
//! This store is the only place revocation state lives. It holds at most
//! one record per user; saving a new record for a user replaces the
//! previous one, which is what enforces the single-active-session policy.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::SessionRecord;
use crate::errors::DomainError;

/// Repository trait for session record persistence, keyed by `user_id`
///
/// # Security Considerations
/// - Only token hashes are stored, never raw refresh tokens
/// - Upserts must be atomic per key; the session service performs no
///   additional locking around concurrent refreshes
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Upsert the session record for `record.user_id`
    ///
    /// Replaces any existing record for that user (last write wins).
    async fn save(&self, record: SessionRecord) -> Result<SessionRecord, DomainError>;

    /// Reverse lookup by token hash
    ///
    /// # Returns
    /// * `Ok(Some(SessionRecord))` - This hash is the current token for some user
    /// * `Ok(None)` - No matching record (unknown, rotated away, or revoked)
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<SessionRecord>, DomainError>;

    /// Find the current session record for a user, if any
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<SessionRecord>, DomainError>;

    /// Remove the record matching this token hash
    ///
    /// Removing an unknown hash is not an error; `Ok(None)` supports
    /// idempotent logout.
    async fn remove_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<SessionRecord>, DomainError>;
}
