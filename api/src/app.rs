//! Application factory
//!
//! This module provides the factory for creating the Actix-web application
//! with its middleware stack, payload limits, and route table.

use actix_multipart::form::MultipartFormConfig;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::error::InternalError;
use actix_web::middleware::Logger;
use actix_web::{web, App, Error, HttpResponse};

use crate::middleware::cors::create_cors;
use crate::middleware::session_guard::SessionGuard;
use crate::routes::users::{
    signin::signin, signout::signout, signup::signup, verify::verify, AppState,
};

use vb_core::repositories::AccountRepository;
use vb_core::services::registration::{AvatarStoreTrait, EmailServiceTrait};
use vb_shared::ApiResponse;

/// Create and configure the application with all dependencies
///
/// `max_payload_size` caps the signup multipart body; it also raises the
/// in-memory buffering limit, since the avatar bytes are read into memory
/// before the upload to the store.
pub fn create_app<A, M, S>(
    app_state: web::Data<AppState<A, M, S>>,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    M: EmailServiceTrait + 'static,
    S: AvatarStoreTrait + 'static,
{
    // The guard needs its own handles; the state is moved into app_data
    let sessions = app_state.session_service.clone();
    let cookie_name = app_state.session_config.cookie_name.clone();

    // Bodies that cannot be parsed at all answer with the same envelope
    // as a failed validation pass
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ApiResponse::failure("Validation failed"));
        InternalError::from_response(err, response).into()
    });

    let multipart_config = MultipartFormConfig::default()
        .total_limit(max_payload_size)
        .memory_limit(max_payload_size)
        .error_handler(|err, _req| {
            let response =
                HttpResponse::BadRequest().json(ApiResponse::failure("Validation failed"));
            InternalError::from_response(err, response).into()
        });

    App::new()
        // Add application state and extractor configuration
        .app_data(app_state)
        .app_data(json_config)
        .app_data(multipart_config)
        // Add middleware (CORS runs outermost, then logging)
        .wrap(Logger::default())
        .wrap(create_cors())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Account lifecycle routes; signed-in visitors are redirected
        // away from signup and verify
        .service(
            web::scope("/api/users")
                .route(
                    "/signup",
                    web::post()
                        .to(signup::<A, M, S>)
                        .wrap(SessionGuard::new(sessions.clone(), cookie_name.clone())),
                )
                .route(
                    "/verify",
                    web::post()
                        .to(verify::<A, M, S>)
                        .wrap(SessionGuard::new(sessions, cookie_name)),
                )
                .route("/signin", web::post().to(signin::<A, M, S>))
                .route("/signout", web::post().to(signout::<A, M, S>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "vibebox-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::failure("The requested resource was not found"))
}
