//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::account::{
    activate::activate, change_password::change_password, login::login, logout::logout,
    refresh::refresh, registration::registration, users::users, AppState,
};

use id_core::repositories::{SessionRepository, UserRepository};
use id_core::services::{MailerService, TokenCodec};

/// Create and configure the application with all dependencies
pub fn create_app<U, S, M>(
    app_state: web::Data<AppState<U, S, M>>,
    codec: TokenCodec,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    M: MailerService + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware (order matters: CORS before logging)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Account routes
        .service(
            web::scope("/api")
                .route("/registration", web::post().to(registration::<U, S, M>))
                .route("/login", web::post().to(login::<U, S, M>))
                .route("/logout", web::post().to(logout::<U, S, M>))
                .route("/activate/{link}", web::get().to(activate::<U, S, M>))
                .route("/refresh", web::get().to(refresh::<U, S, M>))
                .route(
                    "/users",
                    web::get().to(users::<U, S, M>).wrap(JwtAuth::new(codec)),
                )
                .route("/changePassword", web::post().to(change_password::<U, S, M>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "identity-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
