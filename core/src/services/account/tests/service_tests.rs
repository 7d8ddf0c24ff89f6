use std::sync::Arc;
use std::time::Duration;

use crate::errors::{AuthError, DomainError};
use crate::repositories::{MockSessionRepository, MockUserRepository, UserRepository};
use crate::services::account::{AccountConfig, AccountService};
use crate::services::mail::{MockMailer, SentMailKind};
use crate::services::token::{SessionService, TokenCodec, TokenConfig};

type TestAccountService = AccountService<MockUserRepository, MockSessionRepository, MockMailer>;

struct Harness {
    service: TestAccountService,
    users: Arc<MockUserRepository>,
    mailer: Arc<MockMailer>,
}

fn harness() -> Harness {
    let users = Arc::new(MockUserRepository::new());
    let mailer = Arc::new(MockMailer::new());
    let sessions = SessionService::new(
        TokenCodec::new(TokenConfig::default()),
        Arc::new(MockSessionRepository::new()),
    );
    let config = AccountConfig {
        bcrypt_cost: 4, // bcrypt's minimum cost, for fast test hashing
        ..AccountConfig::default()
    };
    let service = AccountService::new(Arc::clone(&users), sessions, Arc::clone(&mailer), config);
    Harness {
        service,
        users,
        mailer,
    }
}

const GOOD_PASSWORD: &str = "Sup3r-secret";

async fn register_sample(h: &Harness) -> crate::domain::value_objects::AuthResponse {
    h.service
        .register("Ada", "Lovelace", "ada@example.com", GOOD_PASSWORD)
        .await
        .unwrap()
}

/// Background mail sends race the assertion; give the spawned task a beat.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

#[tokio::test]
async fn test_register_returns_tokens_and_user() {
    let h = harness();
    let response = register_sample(&h).await;

    assert!(!response.access_token.is_empty());
    assert!(!response.refresh_token.is_empty());
    assert_eq!(response.user.email, "ada@example.com");
    assert!(!response.user.is_activated);
}

#[tokio::test]
async fn test_register_sends_activation_email() {
    let h = harness();
    register_sample(&h).await;
    settle().await;

    let sent = h.mailer.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "ada@example.com");
    assert_eq!(sent[0].kind, SentMailKind::Activation);
    assert!(sent[0].url.contains("/api/activate/"));
}

#[tokio::test]
async fn test_register_survives_mail_failure() {
    let users = Arc::new(MockUserRepository::new());
    let sessions = SessionService::new(
        TokenCodec::new(TokenConfig::default()),
        Arc::new(MockSessionRepository::new()),
    );
    let config = AccountConfig {
        bcrypt_cost: 4, // bcrypt's minimum cost, for fast test hashing
        ..AccountConfig::default()
    };
    let service = AccountService::new(users, sessions, Arc::new(MockMailer::failing()), config);

    let result = service
        .register("Ada", "Lovelace", "ada@example.com", GOOD_PASSWORD)
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let h = harness();
    register_sample(&h).await;

    let result = h
        .service
        .register("Other", "Person", "ada@example.com", GOOD_PASSWORD)
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::EmailAlreadyRegistered { .. }))
    ));
}

#[tokio::test]
async fn test_register_rejects_bad_input() {
    let h = harness();

    let result = h
        .service
        .register("Ada", "Lovelace", "not-an-email", GOOD_PASSWORD)
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));

    let result = h
        .service
        .register("Ada", "Lovelace", "ada@example.com", "weak")
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_activate_consumes_link() {
    let h = harness();
    register_sample(&h).await;

    let user = h
        .users
        .find_by_email("ada@example.com")
        .await
        .unwrap()
        .unwrap();
    let link = user.activation_link.clone().unwrap();

    h.service.activate(&link).await.unwrap();

    let user = h.users.find_by_id(user.id).await.unwrap().unwrap();
    assert!(user.is_activated);
    assert!(user.activation_link.is_none());

    // Second visit fails because the link was consumed
    let result = h.service.activate(&link).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidActivationLink))
    ));
}

#[tokio::test]
async fn test_login_happy_path_and_wrong_password() {
    let h = harness();
    register_sample(&h).await;

    let response = h
        .service
        .login("ada@example.com", GOOD_PASSWORD)
        .await
        .unwrap();
    assert_eq!(response.user.email, "ada@example.com");

    let result = h.service.login("ada@example.com", "Wrong-passw0rd").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::WrongPassword))
    ));

    let result = h.service.login("nobody@example.com", GOOD_PASSWORD).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserNotFound))
    ));
}

#[tokio::test]
async fn test_login_invalidates_previous_session() {
    let h = harness();
    let first = register_sample(&h).await;

    h.service
        .login("ada@example.com", GOOD_PASSWORD)
        .await
        .unwrap();

    let result = h.service.refresh(&first.refresh_token).await;
    assert!(matches!(result, Err(DomainError::Unauthorized)));
}

#[tokio::test]
async fn test_refresh_reflects_current_activation_state() {
    let h = harness();
    let registered = register_sample(&h).await;

    let user = h
        .users
        .find_by_email("ada@example.com")
        .await
        .unwrap()
        .unwrap();
    let link = user.activation_link.clone().unwrap();
    h.service.activate(&link).await.unwrap();

    let refreshed = h.service.refresh(&registered.refresh_token).await.unwrap();
    assert!(refreshed.user.is_activated);
}

#[tokio::test]
async fn test_refresh_rotates_token() {
    let h = harness();
    let registered = register_sample(&h).await;

    let refreshed = h.service.refresh(&registered.refresh_token).await.unwrap();
    assert_ne!(refreshed.refresh_token, registered.refresh_token);

    // Replaying the pre-rotation token fails
    let result = h.service.refresh(&registered.refresh_token).await;
    assert!(matches!(result, Err(DomainError::Unauthorized)));
}

#[tokio::test]
async fn test_logout_then_refresh_fails() {
    let h = harness();
    let registered = register_sample(&h).await;

    assert!(h.service.logout(&registered.refresh_token).await.unwrap());
    assert!(!h.service.logout(&registered.refresh_token).await.unwrap());

    let result = h.service.refresh(&registered.refresh_token).await;
    assert!(matches!(result, Err(DomainError::Unauthorized)));
}

#[tokio::test]
async fn test_change_password_revokes_session() {
    let h = harness();
    let registered = register_sample(&h).await;

    h.service
        .change_password("ada@example.com", GOOD_PASSWORD, "N3w-secret!")
        .await
        .unwrap();

    // Old password no longer works, new one does
    assert!(h.service.login("ada@example.com", GOOD_PASSWORD).await.is_err());
    assert!(h.service.login("ada@example.com", "N3w-secret!").await.is_ok());
}

#[tokio::test]
async fn test_change_password_rejects_wrong_current() {
    let h = harness();
    register_sample(&h).await;

    let result = h
        .service
        .change_password("ada@example.com", "Wrong-passw0rd", "N3w-secret!")
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::WrongPassword))
    ));
}

#[tokio::test]
async fn test_change_password_invalidates_refresh_token() {
    let h = harness();
    let registered = register_sample(&h).await;

    h.service
        .change_password("ada@example.com", GOOD_PASSWORD, "N3w-secret!")
        .await
        .unwrap();

    let result = h.service.refresh(&registered.refresh_token).await;
    assert!(matches!(result, Err(DomainError::Unauthorized)));
}

#[tokio::test]
async fn test_request_password_reset() {
    let h = harness();
    register_sample(&h).await;
    settle().await;

    h.service
        .request_password_reset("ada@example.com")
        .await
        .unwrap();
    settle().await;

    let sent = h.mailer.sent().await;
    let reset = sent
        .iter()
        .find(|m| m.kind == SentMailKind::PasswordReset)
        .unwrap();
    assert_eq!(reset.to, "ada@example.com");
    assert!(reset.url.contains("/reset-password/"));

    // Unknown addresses succeed silently
    h.service
        .request_password_reset("nobody@example.com")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_users_returns_summaries() {
    let h = harness();
    register_sample(&h).await;
    h.service
        .register("Grace", "Hopper", "grace@example.com", GOOD_PASSWORD)
        .await
        .unwrap();

    let mut emails: Vec<String> = h
        .service
        .list_users()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.email)
        .collect();
    emails.sort();
    assert_eq!(emails, vec!["ada@example.com", "grace@example.com"]);
}
