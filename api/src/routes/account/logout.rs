use actix_web::{web, HttpRequest, HttpResponse};

use id_core::repositories::{SessionRepository, UserRepository};
use id_core::services::MailerService;
use id_shared::types::response::ApiResponse;

use crate::handlers::handle_domain_error;

use super::{clear_refresh_cookie, refresh_token_from_request, AppState};

/// Handler for POST /api/logout
///
/// Revokes the session named by the refresh cookie and clears the cookie.
/// Logging out without a cookie, or with an already-revoked token, still
/// succeeds.
pub async fn logout<U, S, M>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, M>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    M: MailerService + 'static,
{
    let refresh_token = refresh_token_from_request(&req, &state.cookie);

    match state.account_service.logout(&refresh_token).await {
        Ok(_) => HttpResponse::Ok()
            .cookie(clear_refresh_cookie(&state.cookie))
            .json(ApiResponse::success("Logged out")),
        Err(error) => handle_domain_error(error),
    }
}
