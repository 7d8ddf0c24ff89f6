use actix_web::{web, HttpResponse};
use validator::Validate;

use id_core::repositories::{SessionRepository, UserRepository};
use id_core::services::MailerService;
use id_shared::types::response::ApiResponse;

use crate::dto::ChangePasswordRequest;
use crate::handlers::{handle_domain_error, handle_validation_errors};

use super::{clear_refresh_cookie, AppState};

/// Handler for POST /api/changePassword
///
/// Verifies the current password, stores the new hash, and revokes the
/// user's session; the client must log in again with the new password.
///
/// # Errors
/// - 400 Bad Request: unknown email, wrong current password, or a new
///   password that fails the policy
pub async fn change_password<U, S, M>(
    state: web::Data<AppState<U, S, M>>,
    request: web::Json<ChangePasswordRequest>,
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
        .change_password(
            &request.email,
            &request.current_password,
            &request.new_password,
        )
        .await
    {
        Ok(()) => HttpResponse::Ok()
            .cookie(clear_refresh_cookie(&state.cookie))
            .json(ApiResponse::success("Password changed")),
        Err(error) => handle_domain_error(error),
    }
}
