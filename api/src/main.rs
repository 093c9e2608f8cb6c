use std::io;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use vb_api::app::create_app;
use vb_api::routes::users::AppState;

use vb_core::services::auth::AuthService;
use vb_core::services::registration::{RegistrationService, RegistrationServiceConfig};
use vb_core::services::session::{SessionService, SessionServiceConfig};
use vb_core::services::verification::VerificationService;
use vb_infra::{CloudinaryAvatarStore, DatabasePool, MailgunEmailService, MySqlAccountRepository};
use vb_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting VibeBox API Server");

    // Load configuration
    let config = AppConfig::from_env();
    info!("Environment: {}", config.environment);

    // Database connection pool, shared by every worker
    let pool = DatabasePool::new(config.database.clone())
        .await
        .map_err(|error| io::Error::new(io::ErrorKind::Other, error))?;
    let statistics = pool.get_statistics();
    info!(
        "Database pool ready: {} connections ({} max)",
        statistics.connections, statistics.max_connections
    );

    // Repository and external service implementations
    let accounts = Arc::new(MySqlAccountRepository::new(pool.get_pool().clone()));
    let email_service = Arc::new(
        MailgunEmailService::new(config.email.clone())
            .map_err(|error| io::Error::new(io::ErrorKind::Other, error))?,
    );
    let avatar_store = Arc::new(
        CloudinaryAvatarStore::new(config.media.clone())
            .map_err(|error| io::Error::new(io::ErrorKind::Other, error))?,
    );

    // Domain services
    let session_service = Arc::new(SessionService::new(SessionServiceConfig {
        jwt_secret: config.session.secret.clone(),
        token_expiry_seconds: config.session.token_expiry,
    }));
    let registration_service = Arc::new(RegistrationService::new(
        accounts.clone(),
        email_service,
        avatar_store,
        RegistrationServiceConfig {
            avatar_folder: config.media.upload_folder.clone(),
            default_avatar_url: config.media.default_avatar_url.clone(),
        },
    ));
    let verification_service = Arc::new(VerificationService::new(accounts.clone()));
    let auth_service = Arc::new(AuthService::new(accounts, session_service.clone()));

    let app_state = web::Data::new(AppState {
        registration_service,
        verification_service,
        auth_service,
        session_service,
        session_config: config.session.clone(),
    });

    let bind_address = config.server.bind_address();
    let max_payload_size = config.server.max_payload_size;
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone(), max_payload_size))
        .keep_alive(Duration::from_secs(config.server.keep_alive));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = server.bind(&bind_address)?.run().await;

    // Drain the pool so in-flight queries finish before exit
    pool.close().await;

    result
}
