//! Integration tests for the signin endpoint

use std::sync::Arc;

use actix_web::{http::header, test, web};
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

const FIXTURE_PASSWORD: &str = "sup3r-secret";

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

/// Account holding the fixture credentials, verified or still pending
fn fixture_account(verified: bool) -> Account {
    let mut account = Account::new(
        AccountProfile {
            email: "dana@example.com".to_string(),
            mobile_number: "0412345678".to_string(),
            username: "dana".to_string(),
            first_name: "Dana".to_string(),
            last_name: "Hill".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1994, 4, 12).unwrap(),
            gender: Gender::Female,
            avatar_url: "https://cdn.example.com/VibeBox/Avatar/avatar-1.png".to_string(),
            password_hash: password::hash_password(FIXTURE_PASSWORD).unwrap(),
        },
        VerificationCode::from_parts("482913".to_string(), Utc::now() + Duration::minutes(60)),
    );
    if verified {
        account.confirm_verification("482913").unwrap();
    }
    account
}

#[actix_web::test]
async fn test_signin_success_sets_session_cookie() {
    // Setup a verified account
    let accounts = Arc::new(MockAccountRepository::new());
    let stored = accounts.create(fixture_account(true)).await.unwrap();

    let app = test::init_service(create_app(test_state(accounts), TEST_PAYLOAD_LIMIT)).await;

    // Make signin request
    let req = test::TestRequest::post()
        .uri("/api/users/signin")
        .set_json(serde_json::json!({
            "identifier": "dana@example.com",
            "password": FIXTURE_PASSWORD,
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;

    // Verify response and cookie
    assert_eq!(resp.status(), 200);

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(set_cookie.starts_with("token="));
    assert!(!set_cookie.starts_with("token=;"));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("Max-Age=604800"));

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Signin successful");
    assert_eq!(body["userId"], stored.id.to_string());
}

#[actix_web::test]
async fn test_signin_accepts_mobile_identifier() {
    // Setup a verified account
    let accounts = Arc::new(MockAccountRepository::new());
    accounts.create(fixture_account(true)).await.unwrap();

    let app = test::init_service(create_app(test_state(accounts), TEST_PAYLOAD_LIMIT)).await;

    // Sign in with the mobile number instead of the email
    let req = test::TestRequest::post()
        .uri("/api/users/signin")
        .set_json(serde_json::json!({
            "identifier": "0412345678",
            "password": FIXTURE_PASSWORD,
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Signin successful");
}

#[actix_web::test]
async fn test_signin_trims_identifier() {
    // Setup a verified account
    let accounts = Arc::new(MockAccountRepository::new());
    accounts.create(fixture_account(true)).await.unwrap();

    let app = test::init_service(create_app(test_state(accounts), TEST_PAYLOAD_LIMIT)).await;

    // The identifier arrives padded; the password must stay untouched
    let req = test::TestRequest::post()
        .uri("/api/users/signin")
        .set_json(serde_json::json!({
            "identifier": "  Dana@Example.com  ",
            "password": FIXTURE_PASSWORD,
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_signin_does_not_trim_password() {
    // Setup a verified account
    let accounts = Arc::new(MockAccountRepository::new());
    accounts.create(fixture_account(true)).await.unwrap();

    let app = test::init_service(create_app(test_state(accounts), TEST_PAYLOAD_LIMIT)).await;

    // Padding around the password makes it a different password
    let req = test::TestRequest::post()
        .uri("/api/users/signin")
        .set_json(serde_json::json!({
            "identifier": "dana@example.com",
            "password": format!(" {} ", FIXTURE_PASSWORD),
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_signin_unknown_identifier() {
    // Setup with no accounts
    let accounts = Arc::new(MockAccountRepository::new());
    let app = test::init_service(create_app(test_state(accounts), TEST_PAYLOAD_LIMIT)).await;

    // Make signin request
    let req = test::TestRequest::post()
        .uri("/api/users/signin")
        .set_json(serde_json::json!({
            "identifier": "nobody@example.com",
            "password": FIXTURE_PASSWORD,
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;

    // Verify response
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User not found");
}

#[actix_web::test]
async fn test_signin_wrong_password() {
    // Setup a verified account
    let accounts = Arc::new(MockAccountRepository::new());
    accounts.create(fixture_account(true)).await.unwrap();

    let app = test::init_service(create_app(test_state(accounts), TEST_PAYLOAD_LIMIT)).await;

    // Make signin request with the wrong password
    let req = test::TestRequest::post()
        .uri("/api/users/signin")
        .set_json(serde_json::json!({
            "identifier": "dana@example.com",
            "password": "wrong-password",
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;

    // Verify response: no cookie is set
    assert_eq!(resp.status(), 401);
    assert!(resp.headers().get(header::SET_COOKIE).is_none());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid password");
}

#[actix_web::test]
async fn test_signin_unverified_account() {
    // Setup a pending account
    let accounts = Arc::new(MockAccountRepository::new());
    accounts.create(fixture_account(false)).await.unwrap();

    let app = test::init_service(create_app(test_state(accounts), TEST_PAYLOAD_LIMIT)).await;

    // Correct credentials, but the account never verified
    let req = test::TestRequest::post()
        .uri("/api/users/signin")
        .set_json(serde_json::json!({
            "identifier": "dana@example.com",
            "password": FIXTURE_PASSWORD,
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;

    // Verify response
    assert_eq!(resp.status(), 403);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Please verify your account first.");
}

#[actix_web::test]
async fn test_signin_wrong_password_wins_over_unverified() {
    // Setup a pending account
    let accounts = Arc::new(MockAccountRepository::new());
    accounts.create(fixture_account(false)).await.unwrap();

    let app = test::init_service(create_app(test_state(accounts), TEST_PAYLOAD_LIMIT)).await;

    // The password check runs before the verification check
    let req = test::TestRequest::post()
        .uri("/api/users/signin")
        .set_json(serde_json::json!({
            "identifier": "dana@example.com",
            "password": "wrong-password",
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid password");
}

#[actix_web::test]
async fn test_signin_missing_fields() {
    // Setup with no accounts
    let accounts = Arc::new(MockAccountRepository::new());
    let app = test::init_service(create_app(test_state(accounts), TEST_PAYLOAD_LIMIT)).await;

    // Make signin request with an empty body
    let req = test::TestRequest::post()
        .uri("/api/users/signin")
        .set_json(serde_json::json!({}))
        .to_request();

    let resp = test::call_service(&app, req).await;

    // Verify response
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "All fields are required");
    assert_eq!(body["errors"]["identifier"][0], "This field is required");
    assert_eq!(body["errors"]["password"][0], "This field is required");
}

#[actix_web::test]
async fn test_signin_unparseable_body() {
    // Setup with no accounts
    let accounts = Arc::new(MockAccountRepository::new());
    let app = test::init_service(create_app(test_state(accounts), TEST_PAYLOAD_LIMIT)).await;

    // Send a body that is not JSON at all
    let req = test::TestRequest::post()
        .uri("/api/users/signin")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("not json")
        .to_request();

    let resp = test::call_service(&app, req).await;

    // Verify response: same envelope as a failed validation pass
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed");
}
