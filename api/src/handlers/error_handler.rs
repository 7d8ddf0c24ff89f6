//! Maps domain errors to HTTP responses.

use actix_web::{http::StatusCode, HttpResponse};
use validator::ValidationErrors;

use id_core::errors::{AuthError, DomainError};
use id_shared::types::response::ErrorResponse;

fn respond(status: StatusCode, code: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}

/// Convert a domain error into the appropriate HTTP response
///
/// Every `Unauthorized` and token error maps to the same 401 body, so
/// the response never reveals whether a token was malformed, expired,
/// or revoked.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            respond(StatusCode::BAD_REQUEST, "validation_error", message)
        }
        DomainError::Auth(auth_error) => handle_auth_error(auth_error),
        DomainError::Unauthorized | DomainError::Token(_) => respond(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "Authentication required",
        ),
        DomainError::NotFound { resource } => respond(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("{resource} not found"),
        ),
        DomainError::Internal { message } => {
            log::error!("Internal error: {message}");
            respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred",
            )
        }
    }
}

fn handle_auth_error(error: AuthError) -> HttpResponse {
    let code = match error {
        AuthError::EmailAlreadyRegistered { .. } => "email_already_registered",
        AuthError::UserNotFound => "user_not_found",
        AuthError::WrongPassword => "wrong_password",
        AuthError::InvalidActivationLink => "invalid_activation_link",
    };
    respond(StatusCode::BAD_REQUEST, code, error.to_string())
}

/// Convert request DTO validation failures into a 400 response
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid {field}"))
            })
        })
        .collect::<Vec<_>>()
        .join("; ");

    respond(StatusCode::BAD_REQUEST, "validation_error", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use id_core::errors::TokenError;

    #[test]
    fn test_unauthorized_and_token_errors_share_a_body() {
        let a = handle_domain_error(DomainError::Unauthorized);
        let b = handle_domain_error(DomainError::Token(TokenError::TokenExpired));
        let c = handle_domain_error(DomainError::Token(TokenError::InvalidSignature));

        assert_eq!(a.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(b.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(c.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_auth_errors_map_to_bad_request() {
        let response = handle_domain_error(DomainError::Auth(AuthError::WrongPassword));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_hides_details() {
        let response = handle_domain_error(DomainError::Internal {
            message: "connection refused to db-host:3306".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
