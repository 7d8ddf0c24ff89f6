use actix_web::{web, HttpResponse};
use validator::Validate;

use id_core::repositories::{SessionRepository, UserRepository};
use id_core::services::MailerService;

use crate::dto::{AuthResponseDto, RegistrationRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};

use super::{refresh_cookie, AppState};

/// Handler for POST /api/registration
///
/// Creates an account, sends the activation email in the background, and
/// opens the first session. The refresh token is set as an HTTP-only
/// cookie and also returned in the body for non-browser clients.
///
/// # Errors
/// - 400 Bad Request: invalid input or email already registered
/// - 500 Internal Server Error: storage or signing failure
pub async fn registration<U, S, M>(
    state: web::Data<AppState<U, S, M>>,
    request: web::Json<RegistrationRequest>,
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
        .register(
            &request.name,
            &request.surname,
            &request.email,
            &request.password,
        )
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
