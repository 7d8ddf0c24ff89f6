use actix_web::{http::header, web, HttpResponse};

use id_core::repositories::{SessionRepository, UserRepository};
use id_core::services::MailerService;

use crate::handlers::handle_domain_error;

use super::AppState;

/// Handler for GET /api/activate/{link}
///
/// Consumes the one-time activation link and redirects the browser to
/// the web client. A consumed or unknown link yields 400.
pub async fn activate<U, S, M>(
    state: web::Data<AppState<U, S, M>>,
    link: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    M: MailerService + 'static,
{
    match state.account_service.activate(&link).await {
        Ok(()) => HttpResponse::Found()
            .insert_header((header::LOCATION, state.client_url.clone()))
            .finish(),
        Err(error) => handle_domain_error(error),
    }
}
