//! MySQL implementation of the SessionRepository trait.
//!
//! One row per user, keyed by the `user_id` primary key; the upsert in
//! `save` is what enforces the single-active-session policy at the
//! storage level.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use id_core::domain::entities::token::SessionRecord;
use id_core::errors::DomainError;
use id_core::repositories::SessionRepository;

use super::internal;

/// MySQL implementation of SessionRepository
pub struct MySqlSessionRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlSessionRepository {
    /// Create a new MySQL session repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a SessionRecord entity
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<SessionRecord, DomainError> {
        let user_id: String = row.try_get("user_id").map_err(internal)?;

        Ok(SessionRecord {
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Internal {
                message: format!("invalid user UUID: {e}"),
            })?,
            token_hash: row.try_get("token_hash").map_err(internal)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(internal)?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(internal)?,
        })
    }
}

#[async_trait]
impl SessionRepository for MySqlSessionRepository {
    async fn save(&self, record: SessionRecord) -> Result<SessionRecord, DomainError> {
        let query = r#"
            INSERT INTO sessions (user_id, token_hash, created_at, expires_at)
            VALUES (?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                token_hash = VALUES(token_hash),
                created_at = VALUES(created_at),
                expires_at = VALUES(expires_at)
        "#;

        sqlx::query(query)
            .bind(record.user_id.to_string())
            .bind(&record.token_hash)
            .bind(record.created_at)
            .bind(record.expires_at)
            .execute(&self.pool)
            .await
            .map_err(internal)?;

        Ok(record)
    }

    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<SessionRecord>, DomainError> {
        let query = r#"
            SELECT user_id, token_hash, created_at, expires_at
            FROM sessions
            WHERE token_hash = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)?;

        result.as_ref().map(Self::row_to_record).transpose()
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<SessionRecord>, DomainError> {
        let query = r#"
            SELECT user_id, token_hash, created_at, expires_at
            FROM sessions
            WHERE user_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)?;

        result.as_ref().map(Self::row_to_record).transpose()
    }

    async fn remove_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<SessionRecord>, DomainError> {
        let existing = self.find_by_token_hash(token_hash).await?;

        if existing.is_some() {
            sqlx::query("DELETE FROM sessions WHERE token_hash = ?")
                .bind(token_hash)
                .execute(&self.pool)
                .await
                .map_err(internal)?;
        }

        Ok(existing)
    }
}
