//! Integration tests for the session redirect guard
//!
//! Signup and verify are wrapped by the guard: a request carrying a valid
//! session cookie is redirected to the home route before the handler or
//! its extractors run. Anything else passes through untouched.

use std::sync::Arc;

use actix_web::{http::header, test, web};
use uuid::Uuid;

use vb_api::app::create_app;
use vb_api::routes::users::AppState;

use vb_core::services::auth::AuthService;
use vb_core::services::registration::{RegistrationService, RegistrationServiceConfig};
use vb_core::services::session::{SessionService, SessionServiceConfig};
use vb_core::services::verification::VerificationService;
use vb_shared::config::SessionConfig;

// Mock implementations for testing
use vb_infra::mocks::{MockAccountRepository, MockAvatarStore, MockEmailService};

const TEST_PAYLOAD_LIMIT: usize = 6 * 1024 * 1024;

type MockState = AppState<MockAccountRepository, MockEmailService, MockAvatarStore>;

fn test_state(accounts: Arc<MockAccountRepository>) -> web::Data<MockState> {
    let email_service = Arc::new(MockEmailService::new());
    let avatar_store = Arc::new(MockAvatarStore::new());

    let session_service = Arc::new(SessionService::new(SessionServiceConfig::with_secret(
        "test_secret",
    )));
    let registration_service = Arc::new(RegistrationService::new(
        accounts.clone(),
        email_service,
        avatar_store,
        RegistrationServiceConfig::default(),
    ));
    let verification_service = Arc::new(VerificationService::new(accounts.clone()));
    let auth_service = Arc::new(AuthService::new(accounts, session_service.clone()));

    web::Data::new(AppState {
        registration_service,
        verification_service,
        auth_service,
        session_service,
        session_config: SessionConfig::new("test_secret"),
    })
}

#[actix_web::test]
async fn test_signup_redirects_when_signed_in() {
    // Setup a signed-in caller
    let accounts = Arc::new(MockAccountRepository::new());
    let state = test_state(accounts.clone());
    let token = state.session_service.issue(Uuid::new_v4()).unwrap();

    let app = test::init_service(create_app(state, TEST_PAYLOAD_LIMIT)).await;

    // Make signup request with the session cookie and no body
    let req = test::TestRequest::post()
        .uri("/api/users/signup")
        .insert_header((header::COOKIE, format!("token={}", token)))
        .to_request();

    let resp = test::call_service(&app, req).await;

    // Verify redirect: the handler never ran
    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    assert_eq!(accounts.count().await, 0);
}

#[actix_web::test]
async fn test_verify_redirects_when_signed_in() {
    // Setup a signed-in caller
    let accounts = Arc::new(MockAccountRepository::new());
    let state = test_state(accounts);
    let token = state.session_service.issue(Uuid::new_v4()).unwrap();

    let app = test::init_service(create_app(state, TEST_PAYLOAD_LIMIT)).await;

    // Make verify request with the session cookie
    let req = test::TestRequest::post()
        .uri("/api/users/verify")
        .insert_header((header::COOKIE, format!("token={}", token)))
        .set_json(serde_json::json!({ "username": "dana", "code": "482913" }))
        .to_request();

    let resp = test::call_service(&app, req).await;

    // Verify redirect
    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
}

#[actix_web::test]
async fn test_garbage_cookie_passes_through() {
    // Setup
    let accounts = Arc::new(MockAccountRepository::new());
    let app = test::init_service(create_app(test_state(accounts), TEST_PAYLOAD_LIMIT)).await;

    // A cookie that is not a token at all counts as signed out
    let req = test::TestRequest::post()
        .uri("/api/users/verify")
        .insert_header((header::COOKIE, "token=garbage"))
        .set_json(serde_json::json!({ "username": "nobody", "code": "482913" }))
        .to_request();

    let resp = test::call_service(&app, req).await;

    // The handler ran and reported the unknown user
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User not found");
}

#[actix_web::test]
async fn test_expired_token_passes_through() {
    // Setup
    let accounts = Arc::new(MockAccountRepository::new());
    let app = test::init_service(create_app(test_state(accounts), TEST_PAYLOAD_LIMIT)).await;

    // A token signed with the right secret but already past its expiry,
    // beyond the validation leeway
    let stale_issuer = SessionService::new(SessionServiceConfig {
        jwt_secret: "test_secret".to_string(),
        token_expiry_seconds: -120,
    });
    let stale_token = stale_issuer.issue(Uuid::new_v4()).unwrap();

    let req = test::TestRequest::post()
        .uri("/api/users/verify")
        .insert_header((header::COOKIE, format!("token={}", stale_token)))
        .set_json(serde_json::json!({ "username": "nobody", "code": "482913" }))
        .to_request();

    let resp = test::call_service(&app, req).await;

    // Treated as unauthenticated, so the handler ran
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_signin_ignores_session_cookie() {
    // Setup a signed-in caller
    let accounts = Arc::new(MockAccountRepository::new());
    let state = test_state(accounts);
    let token = state.session_service.issue(Uuid::new_v4()).unwrap();

    let app = test::init_service(create_app(state, TEST_PAYLOAD_LIMIT)).await;

    // Signin is not guarded; the request reaches the handler
    let req = test::TestRequest::post()
        .uri("/api/users/signin")
        .insert_header((header::COOKIE, format!("token={}", token)))
        .set_json(serde_json::json!({
            "identifier": "nobody@example.com",
            "password": "sup3r-secret",
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;

    // No redirect; the handler answered
    assert_eq!(resp.status(), 404);
}
