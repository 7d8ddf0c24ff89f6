//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
///
/// The password hash and activation link never leave the storage layer;
/// responses and token payloads are built from [`UserSummary`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Given name
    pub name: String,

    /// Family name
    pub surname: String,

    /// Email address (unique)
    pub email: String,

    /// Bcrypt hash of the password
    pub password_hash: String,

    /// Whether the account email has been activated
    pub is_activated: bool,

    /// One-time activation link token, cleared once used
    pub activation_link: Option<String>,

    /// One-time password reset token, if a reset was requested
    pub reset_token: Option<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, not yet activated user
    pub fn new(
        name: String,
        surname: String,
        email: String,
        password_hash: String,
        activation_link: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            surname,
            email,
            password_hash,
            is_activated: false,
            activation_link: Some(activation_link),
            reset_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the account as activated and consumes the activation link
    pub fn activate(&mut self) {
        self.is_activated = true;
        self.activation_link = None;
        self.updated_at = Utc::now();
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Records a pending password reset token
    pub fn set_reset_token(&mut self, reset_token: String) {
        self.reset_token = Some(reset_token);
        self.updated_at = Utc::now();
    }
}

/// Public view of a user, safe to embed in responses and token claims
///
/// Carries only named fields; nothing from the persistence record leaks
/// into signed tokens by accident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address
    pub email: String,

    /// Whether the account email has been activated
    pub is_activated: bool,

    /// Given name
    pub name: String,

    /// Family name
    pub surname: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            is_activated: user.is_activated,
            name: user.name.clone(),
            surname: user.surname.clone(),
        }
    }
}
