//! MySQL implementation of the UserRepository trait.
//!
//! Persists user accounts with SQLx. UUIDs are stored as CHAR(36)
//! strings; timestamps as UTC DATETIME columns.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use id_core::domain::entities::user::User;
use id_core::errors::DomainError;
use id_core::repositories::UserRepository;

use super::internal;

const USER_COLUMNS: &str =
    "id, name, surname, email, password_hash, is_activated, activation_link, reset_token, \
     created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(internal)?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("invalid user UUID: {e}"),
            })?,
            name: row.try_get("name").map_err(internal)?,
            surname: row.try_get("surname").map_err(internal)?,
            email: row.try_get("email").map_err(internal)?,
            password_hash: row.try_get("password_hash").map_err(internal)?,
            is_activated: row.try_get("is_activated").map_err(internal)?,
            activation_link: row.try_get("activation_link").map_err(internal)?,
            reset_token: row.try_get("reset_token").map_err(internal)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(internal)?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(internal)?,
        })
    }

    async fn fetch_one_by(
        &self,
        column: &str,
        value: &str,
    ) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)?;

        result.as_ref().map(Self::row_to_user).transpose()
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.fetch_one_by("email", email).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.fetch_one_by("id", &id.to_string()).await
    }

    async fn find_by_activation_link(&self, link: &str) -> Result<Option<User>, DomainError> {
        self.fetch_one_by("activation_link", link).await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, name, surname, email, password_hash, is_activated,
                activation_link, reset_token, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.surname)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.is_activated)
            .bind(&user.activation_link)
            .bind(&user.reset_token)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e.as_database_error() {
                // SQLSTATE 23000: unique key violation; email carries the
                // only unique index besides the primary key
                Some(db) if db.code().as_deref() == Some("23000") => DomainError::Validation {
                    message: format!("email {} already registered", user.email),
                },
                _ => internal(e),
            })?;

        Ok(user)
    }

    async fn update(&self, mut user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET name = ?, surname = ?, email = ?, password_hash = ?,
                is_activated = ?, activation_link = ?, reset_token = ?, updated_at = ?
            WHERE id = ?
        "#;

        user.updated_at = Utc::now();

        let result = sqlx::query(query)
            .bind(&user.name)
            .bind(&user.surname)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.is_activated)
            .bind(&user.activation_link)
            .bind(&user.reset_token)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(internal)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("user {}", user.id),
            });
        }

        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(internal)?;

        rows.iter().map(Self::row_to_user).collect()
    }
}
