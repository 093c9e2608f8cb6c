//! Integration tests for the verify endpoint

use std::sync::Arc;

use actix_web::{test, web};
use chrono::{Duration, NaiveDate, Utc};

use vb_api::app::create_app;
use vb_api::routes::users::AppState;

use vb_core::domain::entities::{Account, AccountProfile, Gender, VerificationCode};
use vb_core::repositories::AccountRepository;
use vb_core::services::auth::AuthService;
use vb_core::services::password;
use vb_core::services::registration::{RegistrationService, RegistrationServiceConfig};
use vb_core::services::session::{SessionService, SessionServiceConfig};
use vb_core::services::verification::VerificationService;
use vb_shared::config::SessionConfig;

// Mock implementations for testing
use vb_infra::mocks::{MockAccountRepository, MockAvatarStore, MockEmailService};

const TEST_PAYLOAD_LIMIT: usize = 6 * 1024 * 1024;

const FIXTURE_CODE: &str = "482913";

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

/// Pending account holding the given code and expiry offset
fn pending_account(minutes_until_expiry: i64) -> Account {
    Account::new(
        AccountProfile {
            email: "dana@example.com".to_string(),
            mobile_number: "0412345678".to_string(),
            username: "dana".to_string(),
            first_name: "Dana".to_string(),
            last_name: "Hill".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1994, 4, 12).unwrap(),
            gender: Gender::Female,
            avatar_url: "https://cdn.example.com/VibeBox/Avatar/avatar-1.png".to_string(),
            password_hash: password::hash_password("sup3r-secret").unwrap(),
        },
        VerificationCode::from_parts(
            FIXTURE_CODE.to_string(),
            Utc::now() + Duration::minutes(minutes_until_expiry),
        ),
    )
}

#[actix_web::test]
async fn test_verify_success() {
    // Setup a pending account
    let accounts = Arc::new(MockAccountRepository::new());
    accounts.create(pending_account(60)).await.unwrap();

    let app = test::init_service(create_app(test_state(accounts.clone()), TEST_PAYLOAD_LIMIT)).await;

    // Submit the correct code; the username arrives with different casing
    let req = test::TestRequest::post()
        .uri("/api/users/verify")
        .set_json(serde_json::json!({ "username": "Dana", "code": FIXTURE_CODE }))
        .to_request();

    let resp = test::call_service(&app, req).await;

    // Verify response
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User verified successfully");

    // The stored account flipped to verified and dropped its code
    let stored = accounts.find_by_username("dana").await.unwrap().unwrap();
    assert!(stored.is_verified());
    assert!(stored.pending_code().is_none());
}

#[actix_web::test]
async fn test_verify_wrong_code() {
    // Setup a pending account
    let accounts = Arc::new(MockAccountRepository::new());
    accounts.create(pending_account(60)).await.unwrap();

    let app = test::init_service(create_app(test_state(accounts.clone()), TEST_PAYLOAD_LIMIT)).await;

    // Make verify request with a wrong code
    let req = test::TestRequest::post()
        .uri("/api/users/verify")
        .set_json(serde_json::json!({ "username": "dana", "code": "111111" }))
        .to_request();

    let resp = test::call_service(&app, req).await;

    // Verify response
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid verification code");

    // The account stays pending
    let stored = accounts.find_by_username("dana").await.unwrap().unwrap();
    assert!(!stored.is_verified());
}

#[actix_web::test]
async fn test_verify_expired_code() {
    // Setup a pending account whose code already expired
    let accounts = Arc::new(MockAccountRepository::new());
    accounts.create(pending_account(-5)).await.unwrap();

    let app = test::init_service(create_app(test_state(accounts), TEST_PAYLOAD_LIMIT)).await;

    // Submit the correct but stale code
    let req = test::TestRequest::post()
        .uri("/api/users/verify")
        .set_json(serde_json::json!({ "username": "dana", "code": FIXTURE_CODE }))
        .to_request();

    let resp = test::call_service(&app, req).await;

    // Verify response
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Verification code has expired");
}

#[actix_web::test]
async fn test_verify_already_verified() {
    // Setup a verified account
    let accounts = Arc::new(MockAccountRepository::new());
    let mut account = pending_account(60);
    account.confirm_verification(FIXTURE_CODE).unwrap();
    accounts.create(account).await.unwrap();

    let app = test::init_service(create_app(test_state(accounts), TEST_PAYLOAD_LIMIT)).await;

    // Make verify request a second time
    let req = test::TestRequest::post()
        .uri("/api/users/verify")
        .set_json(serde_json::json!({ "username": "dana", "code": FIXTURE_CODE }))
        .to_request();

    let resp = test::call_service(&app, req).await;

    // Verify response
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User already verified");
}

#[actix_web::test]
async fn test_verify_unknown_username() {
    // Setup with no accounts
    let accounts = Arc::new(MockAccountRepository::new());
    let app = test::init_service(create_app(test_state(accounts), TEST_PAYLOAD_LIMIT)).await;

    // Make verify request
    let req = test::TestRequest::post()
        .uri("/api/users/verify")
        .set_json(serde_json::json!({ "username": "nobody", "code": FIXTURE_CODE }))
        .to_request();

    let resp = test::call_service(&app, req).await;

    // Verify response
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User not found");
}

#[actix_web::test]
async fn test_verify_missing_fields() {
    // Setup with no accounts
    let accounts = Arc::new(MockAccountRepository::new());
    let app = test::init_service(create_app(test_state(accounts), TEST_PAYLOAD_LIMIT)).await;

    // Make verify request with an empty body
    let req = test::TestRequest::post()
        .uri("/api/users/verify")
        .set_json(serde_json::json!({}))
        .to_request();

    let resp = test::call_service(&app, req).await;

    // Verify response
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "All fields are required");
    assert_eq!(body["errors"]["username"][0], "This field is required");
    assert_eq!(body["errors"]["code"][0], "This field is required");
}

#[actix_web::test]
async fn test_verify_rejects_short_code() {
    // Setup a pending account
    let accounts = Arc::new(MockAccountRepository::new());
    accounts.create(pending_account(60)).await.unwrap();

    let app = test::init_service(create_app(test_state(accounts), TEST_PAYLOAD_LIMIT)).await;

    // A code that is not six digits never reaches the service
    let req = test::TestRequest::post()
        .uri("/api/users/verify")
        .set_json(serde_json::json!({ "username": "dana", "code": "123" }))
        .to_request();

    let resp = test::call_service(&app, req).await;

    // Verify response
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"]["code"][0], "Verification code must be 6 digits");
}
