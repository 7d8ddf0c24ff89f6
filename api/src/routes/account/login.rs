use actix_web::{web, HttpResponse};
use validator::Validate;

use id_core::repositories::{SessionRepository, UserRepository};
use id_core::services::MailerService;

use crate::dto::{AuthResponseDto, LoginRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};

use super::{refresh_cookie, AppState};

/// Handler for POST /api/login
///
/// Authenticates with email and password. Opening the new session
/// invalidates whatever session the user previously held.
///
/// # Errors
/// - 400 Bad Request: unknown email or wrong password
/// - 500 Internal Server Error: storage or signing failure
pub async fn login<U, S, M>(
    state: web::Data<AppState<U, S, M>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    M: MailerService + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .account_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(response) => {
            let dto = AuthResponseDto::from(response);
            HttpResponse::Ok()
                .cookie(refresh_cookie(&state.cookie, &dto.refresh_token))
                .json(dto)
        }
        Err(error) => handle_domain_error(error),
    }
}
