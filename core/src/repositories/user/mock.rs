//! In-memory implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::r#trait::UserRepository;

/// Mock user repository backed by a `HashMap` keyed by user id
#[derive(Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_activation_link(&self, link: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.activation_link.as_deref() == Some(link))
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Validation {
                message: format!("email {} already registered", user.email),
            });
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::NotFound {
                resource: format!("user {}", user.id),
            });
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(email: &str) -> User {
        User::new(
            "Test".to_string(),
            "User".to_string(),
            email.to_string(),
            "hash".to_string(),
            Uuid::new_v4().to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_and_find_by_email() {
        let repo = MockUserRepository::new();
        let user = repo.create(sample_user("a@x.com")).await.unwrap();

        let found = repo.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert!(repo.find_by_email("b@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = MockUserRepository::new();
        repo.create(sample_user("a@x.com")).await.unwrap();

        let result = repo.create(sample_user("a@x.com")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_find_by_activation_link() {
        let repo = MockUserRepository::new();
        let user = repo.create(sample_user("a@x.com")).await.unwrap();
        let link = user.activation_link.clone().unwrap();

        let found = repo.find_by_activation_link(&link).await.unwrap().unwrap();
        assert_eq!(found.id, user.id);

        assert!(repo
            .find_by_activation_link("unknown")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_update_unknown_user_fails() {
        let repo = MockUserRepository::new();
        let result = repo.update(sample_user("a@x.com")).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
