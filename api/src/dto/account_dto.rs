//! Account request and response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use id_core::domain::entities::user::UserSummary;
use id_core::domain::value_objects::AuthResponse;

/// Request body for POST /api/registration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegistrationRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Surname must be 1-100 characters"))]
    pub surname: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

/// Request body for POST /api/login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request body for POST /api/changePassword
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub new_password: String,
}

/// Public view of a user in API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub is_activated: bool,
    pub name: String,
    pub surname: String,
}

impl From<UserSummary> for UserDto {
    fn from(summary: UserSummary) -> Self {
        Self {
            id: summary.id,
            email: summary.email,
            is_activated: summary.is_activated,
            name: summary.name,
            surname: summary.surname,
        }
    }
}

/// Body returned by registration, login, and refresh
///
/// The refresh token also rides in an HTTP-only cookie; it is included
/// here for non-browser clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponseDto {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub user: UserDto,
}

impl From<AuthResponse> for AuthResponseDto {
    fn from(response: AuthResponse) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            expires_in: response.expires_in,
            user: response.user.into(),
        }
    }
}
