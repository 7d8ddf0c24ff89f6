//! JWT encoding and decoding.

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, SessionPayload, TokenKind};
use crate::errors::{DomainError, TokenError};

use super::config::TokenConfig;

/// Stateless JWT codec for the access/refresh token pair
///
/// Signing and verification are pure functions of the configured secrets;
/// no storage lookups happen here.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    config: TokenConfig,
}

impl TokenCodec {
    /// Create a codec from token configuration
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    /// The configuration this codec signs with
    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    fn secret(&self, kind: TokenKind) -> &[u8] {
        match kind {
            TokenKind::Access => self.config.access_secret.as_bytes(),
            TokenKind::Refresh => self.config.refresh_secret.as_bytes(),
        }
    }

    fn ttl(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => Duration::minutes(self.config.access_token_expiry_minutes),
            TokenKind::Refresh => Duration::days(self.config.refresh_token_expiry_days),
        }
    }

    /// Sign a token of the given kind for this session payload
    pub fn sign(&self, payload: &SessionPayload, kind: TokenKind) -> Result<String, DomainError> {
        let claims = Claims::new(payload, self.ttl(kind), &self.config.issuer);
        let key = EncodingKey::from_secret(self.secret(kind));

        encode(&Header::new(Algorithm::HS256), &claims, &key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verify a token's signature, expiry, and issuer for the given kind
    ///
    /// A token signed with the access secret never verifies as a refresh
    /// token, and vice versa.
    pub fn verify(&self, token: &str, kind: TokenKind) -> Result<Claims, DomainError> {
        let key = DecodingKey::from_secret(self.secret(kind));
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);

        decode::<Claims>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let token_error = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature
                    | jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::InvalidTokenFormat,
                };
                DomainError::Token(token_error)
            })
    }

    /// Decode claims without verifying signature or expiry
    ///
    /// Only safe for non-authoritative uses such as logging the subject of
    /// a rejected token; never grant access based on this.
    pub fn decode_unverified(&self, token: &str) -> Result<Claims, DomainError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map(|data| data.claims)
            .map_err(|_| DomainError::Token(TokenError::InvalidTokenFormat))
    }
}
