use actix_web::{web, HttpRequest, HttpResponse};

use id_core::repositories::{SessionRepository, UserRepository};
use id_core::services::MailerService;

use crate::dto::AuthResponseDto;
use crate::handlers::handle_domain_error;

use super::{refresh_cookie, refresh_token_from_request, AppState};

/// Handler for GET /api/refresh
///
/// Exchanges the refresh cookie for a fresh token pair. The presented
/// token stops working the moment the new pair is issued; replaying it
/// yields 401.
///
/// # Errors
/// - 401 Unauthorized: missing, invalid, expired, or already-rotated token
/// - 500 Internal Server Error: storage or signing failure
pub async fn refresh<U, S, M>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, M>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    M: MailerService + 'static,
{
    let refresh_token = refresh_token_from_request(&req, &state.cookie);

    match state.account_service.refresh(&refresh_token).await {
        Ok(response) => {
            let dto = AuthResponseDto::from(response);
            HttpResponse::Ok()
                .cookie(refresh_cookie(&state.cookie, &dto.refresh_token))
                .json(dto)
        }
        Err(error) => handle_domain_error(error),
    }
}
