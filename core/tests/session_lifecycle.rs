//! End-to-end session lifecycle over in-memory collaborators:
//! register, login, rotate via refresh, replay rejection, logout.

use std::sync::Arc;

use id_core::errors::DomainError;
use id_core::repositories::{MockSessionRepository, MockUserRepository};
use id_core::services::mail::MockMailer;
use id_core::services::{AccountConfig, AccountService, SessionService, TokenCodec, TokenConfig};

type TestAccountService = AccountService<MockUserRepository, MockSessionRepository, MockMailer>;

fn account_service() -> TestAccountService {
    let sessions = SessionService::new(
        TokenCodec::new(TokenConfig::default()),
        Arc::new(MockSessionRepository::new()),
    );
    let config = AccountConfig {
        bcrypt_cost: 4, // bcrypt's minimum cost, for fast test hashing
        ..AccountConfig::default()
    };
    AccountService::new(
        Arc::new(MockUserRepository::new()),
        sessions,
        Arc::new(MockMailer::new()),
        config,
    )
}

const PASSWORD: &str = "C0rrect-horse";

#[tokio::test]
async fn test_full_session_lifecycle() {
    let service = account_service();

    // Registration opens the first session
    let registered = service
        .register("Ada", "Lovelace", "ada@example.com", PASSWORD)
        .await
        .unwrap();

    // Logging in replaces it; the registration refresh token dies
    let logged_in = service.login("ada@example.com", PASSWORD).await.unwrap();
    assert!(matches!(
        service.refresh(&registered.refresh_token).await,
        Err(DomainError::Unauthorized)
    ));

    // Refresh rotates: the new token works, the presented one stops working
    let rotated = service.refresh(&logged_in.refresh_token).await.unwrap();
    assert_ne!(rotated.refresh_token, logged_in.refresh_token);
    assert!(matches!(
        service.refresh(&logged_in.refresh_token).await,
        Err(DomainError::Unauthorized)
    ));

    // Logout revokes the live session; nothing refreshes afterwards
    service.logout(&rotated.refresh_token).await.unwrap();
    assert!(matches!(
        service.refresh(&rotated.refresh_token).await,
        Err(DomainError::Unauthorized)
    ));
}

#[tokio::test]
async fn test_sessions_are_isolated_per_user() {
    let service = account_service();

    let ada = service
        .register("Ada", "Lovelace", "ada@example.com", PASSWORD)
        .await
        .unwrap();
    let grace = service
        .register("Grace", "Hopper", "grace@example.com", PASSWORD)
        .await
        .unwrap();

    // Revoking one user's session leaves the other's intact
    service.logout(&ada.refresh_token).await.unwrap();
    assert!(service.refresh(&ada.refresh_token).await.is_err());

    let refreshed = service.refresh(&grace.refresh_token).await.unwrap();
    assert_eq!(refreshed.user.email, "grace@example.com");
}
