//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header, verifies it
//! as an access token, and injects the authenticated user context into
//! the request extensions.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use uuid::Uuid;

use id_core::domain::entities::token::{Claims, SessionPayload, TokenKind};
use id_core::services::TokenCodec;

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from JWT claims
    pub user_id: Uuid,
    /// Email of the authenticated user
    pub email: String,
    /// Whether the account email has been activated
    pub is_activated: bool,
    /// JWT ID for tracking
    pub jti: String,
}

impl AuthContext {
    fn from_claims(claims: Claims) -> Result<Self, Error> {
        let jti = claims.jti.clone();
        let payload = SessionPayload::try_from(claims)
            .map_err(|_| ErrorUnauthorized("Invalid token claims"))?;
        Ok(Self {
            user_id: payload.user_id,
            email: payload.email,
            is_activated: payload.is_activated,
            jti,
        })
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    codec: TokenCodec,
}

impl JwtAuth {
    /// Creates the middleware around a token codec
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            codec: self.codec.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    codec: TokenCodec,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let codec = self.codec.clone();

        Box::pin(async move {
            let token = extract_bearer_token(&req)
                .ok_or_else(|| ErrorUnauthorized("Missing or invalid Authorization header"))?;

            let claims = codec
                .verify(&token, TokenKind::Access)
                .map_err(|_| ErrorUnauthorized("Invalid or expired token"))?;

            let context = AuthContext::from_claims(claims)?;
            req.extensions_mut().insert(context);

            service.call(req).await
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
