//! In-memory implementation of SessionRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::SessionRecord;
use crate::errors::DomainError;

use super::r#trait::SessionRepository;

/// Mock session repository backed by a `HashMap` keyed by user id
///
/// The map key gives the same upsert-per-user semantics as the MySQL
/// implementation's primary-key upsert.
#[derive(Default)]
pub struct MockSessionRepository {
    records: Arc<RwLock<HashMap<Uuid, SessionRecord>>>,
}

impl MockSessionRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn save(&self, record: SessionRecord) -> Result<SessionRecord, DomainError> {
        let mut records = self.records.write().await;
        records.insert(record.user_id, record.clone());
        Ok(record)
    }

    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<SessionRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .find(|r| r.token_hash == token_hash)
            .cloned())
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<SessionRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(&user_id).cloned())
    }

    async fn remove_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<SessionRecord>, DomainError> {
        let mut records = self.records.write().await;
        let user_id = records
            .values()
            .find(|r| r.token_hash == token_hash)
            .map(|r| r.user_id);
        Ok(user_id.and_then(|id| records.remove(&id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_overwrites_previous_record() {
        let repo = MockSessionRepository::new();
        let user_id = Uuid::new_v4();

        repo.save(SessionRecord::new(user_id, "hash-1".to_string(), 30))
            .await
            .unwrap();
        repo.save(SessionRecord::new(user_id, "hash-2".to_string(), 30))
            .await
            .unwrap();

        // The first token is no longer on file for this user
        assert!(repo.find_by_token_hash("hash-1").await.unwrap().is_none());
        let current = repo.find_by_user_id(user_id).await.unwrap().unwrap();
        assert_eq!(current.token_hash, "hash-2");
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let repo = MockSessionRepository::new();
        let user_id = Uuid::new_v4();

        repo.save(SessionRecord::new(user_id, "hash".to_string(), 30))
            .await
            .unwrap();

        let removed = repo.remove_by_token_hash("hash").await.unwrap();
        assert_eq!(removed.map(|r| r.user_id), Some(user_id));

        // Removing again is a no-op, not an error
        assert!(repo.remove_by_token_hash("hash").await.unwrap().is_none());
        assert!(repo.remove_by_token_hash("unknown").await.unwrap().is_none());
    }
}
