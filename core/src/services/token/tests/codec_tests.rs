use uuid::Uuid;

use crate::domain::entities::token::{SessionPayload, TokenKind};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenCodec, TokenConfig};

fn test_codec() -> TokenCodec {
    TokenCodec::new(TokenConfig {
        access_secret: "test-access-secret".to_string(),
        refresh_secret: "test-refresh-secret".to_string(),
        ..TokenConfig::default()
    })
}

fn sample_payload() -> SessionPayload {
    SessionPayload {
        user_id: Uuid::new_v4(),
        email: "user@example.com".to_string(),
        is_activated: true,
    }
}

#[test]
fn test_sign_and_verify_access_token() {
    let codec = test_codec();
    let payload = sample_payload();

    let token = codec.sign(&payload, TokenKind::Access).unwrap();
    let claims = codec.verify(&token, TokenKind::Access).unwrap();

    assert_eq!(claims.sub, payload.user_id.to_string());
    assert_eq!(claims.email, payload.email);
    assert!(claims.is_activated);
    assert_eq!(claims.iss, "identity");
}

#[test]
fn test_kinds_are_not_interchangeable() {
    let codec = test_codec();
    let payload = sample_payload();

    let access = codec.sign(&payload, TokenKind::Access).unwrap();
    let refresh = codec.sign(&payload, TokenKind::Refresh).unwrap();

    let result = codec.verify(&access, TokenKind::Refresh);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
    assert!(codec.verify(&refresh, TokenKind::Access).is_err());
}

#[test]
fn test_expired_token_rejected() {
    let codec = TokenCodec::new(TokenConfig {
        access_token_expiry_minutes: -5,
        ..TokenConfig::default()
    });

    let token = codec.sign(&sample_payload(), TokenKind::Access).unwrap();
    let result = codec.verify(&token, TokenKind::Access);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_tampered_token_rejected() {
    let codec = test_codec();
    let token = codec.sign(&sample_payload(), TokenKind::Access).unwrap();

    let mut tampered = token.clone();
    tampered.pop();
    tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

    assert!(codec.verify(&tampered, TokenKind::Access).is_err());
}

#[test]
fn test_garbage_input_rejected() {
    let codec = test_codec();
    let result = codec.verify("not.a.jwt", TokenKind::Access);
    assert!(matches!(result, Err(DomainError::Token(_))));
}

#[test]
fn test_wrong_issuer_rejected() {
    let signer = TokenCodec::new(TokenConfig {
        issuer: "someone-else".to_string(),
        ..TokenConfig::default()
    });
    let verifier = TokenCodec::new(TokenConfig::default());

    let token = signer.sign(&sample_payload(), TokenKind::Access).unwrap();
    assert!(verifier.verify(&token, TokenKind::Access).is_err());
}

#[test]
fn test_decode_unverified_reads_expired_claims() {
    let codec = TokenCodec::new(TokenConfig {
        access_token_expiry_minutes: -5,
        ..TokenConfig::default()
    });
    let payload = sample_payload();

    let token = codec.sign(&payload, TokenKind::Access).unwrap();
    let claims = codec.decode_unverified(&token).unwrap();

    assert_eq!(claims.sub, payload.user_id.to_string());
    assert!(claims.is_expired());
}
