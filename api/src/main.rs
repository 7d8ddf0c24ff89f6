use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use id_api::app::create_app;
use id_api::routes::AppState;
use id_core::services::{AccountConfig, AccountService, SessionService, TokenCodec, TokenConfig};
use id_infra::database::{create_pool, MySqlSessionRepository, MySqlUserRepository};
use id_infra::mail::SmtpMailer;
use id_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Identity API server");

    // Load configuration
    let config = AppConfig::from_env();
    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT secrets are development defaults; set JWT_ACCESS_SECRET and JWT_REFRESH_SECRET");
    }

    // Initialize database connections
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    info!("Database connection pool established");

    // Create repository implementations
    let users = Arc::new(MySqlUserRepository::new(pool.clone()));
    let sessions = Arc::new(MySqlSessionRepository::new(pool));

    // Create mail transport
    let mailer = Arc::new(
        SmtpMailer::new(&config.mail)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?,
    );

    // Wire services together
    let codec = TokenCodec::new(TokenConfig::from(&config.auth.jwt));
    let session_service = SessionService::new(codec.clone(), sessions);
    let account_config = AccountConfig {
        api_url: config.server.api_url.clone(),
        client_url: config.server.client_url.clone(),
        ..AccountConfig::default()
    };
    let account_service = Arc::new(AccountService::new(
        users,
        session_service,
        mailer,
        account_config,
    ));

    let state = web::Data::new(AppState {
        account_service,
        cookie: config.auth.cookie.clone(),
        client_url: config.server.client_url.clone(),
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {bind_address}");

    HttpServer::new(move || create_app(state.clone(), codec.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
