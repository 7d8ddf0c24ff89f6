use actix_web::{web, HttpResponse};

use id_core::repositories::{SessionRepository, UserRepository};
use id_core::services::MailerService;

use crate::dto::UserDto;
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;

use super::AppState;

/// Handler for GET /api/users
///
/// Lists all registered users as credential-free summaries. Requires a
/// valid access token; the JwtAuth middleware enforces that before this
/// handler runs.
pub async fn users<U, S, M>(
    state: web::Data<AppState<U, S, M>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    M: MailerService + 'static,
{
    log::debug!("User listing requested by {}", auth.user_id);

    match state.account_service.list_users().await {
        Ok(summaries) => {
            let users: Vec<UserDto> = summaries.into_iter().map(UserDto::from).collect();
            HttpResponse::Ok().json(users)
        }
        Err(error) => handle_domain_error(error),
    }
}
