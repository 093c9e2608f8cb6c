//! Mapping from domain errors to HTTP responses
//!
//! Display strings of the domain errors double as the client-facing
//! messages for 4xx answers. Server-side failures (5xx) answer with the
//! calling endpoint's generic fallback message and keep the detail in the
//! log, tagged with the shared error code.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use vb_core::errors::{
    AuthError, ConflictError, DependencyError, DomainError, SessionError, VerificationError,
};
use vb_shared::codes;
use vb_shared::validation::ValidationErrors;
use vb_shared::ApiResponse;

/// HTTP status code for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::BAD_REQUEST,
        DomainError::Auth(AuthError::InvalidPassword) => StatusCode::UNAUTHORIZED,
        DomainError::Auth(AuthError::AccountNotVerified) => StatusCode::FORBIDDEN,
        DomainError::Verification(_) => StatusCode::BAD_REQUEST,
        DomainError::Session(SessionError::TokenGeneration(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DomainError::Session(_) => StatusCode::UNAUTHORIZED,
        DomainError::Dependency(_) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Database(_) | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Machine-readable code for a domain error, used in log lines
pub fn error_code(error: &DomainError) -> &'static str {
    match error {
        DomainError::Validation { .. } => codes::VALIDATION_FAILED,
        DomainError::NotFound { .. } => codes::ACCOUNT_NOT_FOUND,
        DomainError::Conflict(ConflictError::EmailTaken) => codes::EMAIL_TAKEN,
        DomainError::Conflict(ConflictError::MobileTaken) => codes::MOBILE_TAKEN,
        DomainError::Conflict(ConflictError::UsernameTaken) => codes::USERNAME_TAKEN,
        DomainError::Conflict(ConflictError::ConcurrentUpdate) => codes::CONCURRENT_UPDATE,
        DomainError::Auth(AuthError::InvalidPassword) => codes::INVALID_PASSWORD,
        DomainError::Auth(AuthError::AccountNotVerified) => codes::ACCOUNT_NOT_VERIFIED,
        DomainError::Verification(VerificationError::AlreadyVerified) => codes::ALREADY_VERIFIED,
        DomainError::Verification(VerificationError::InvalidCode) => codes::INVALID_CODE,
        DomainError::Verification(VerificationError::CodeExpired) => codes::CODE_EXPIRED,
        DomainError::Session(SessionError::TokenExpired) => codes::SESSION_EXPIRED,
        DomainError::Session(SessionError::TokenGeneration(_)) => codes::INTERNAL_ERROR,
        DomainError::Session(SessionError::InvalidToken) => codes::SESSION_INVALID,
        DomainError::Dependency(DependencyError::EmailDispatch(_)) => codes::EMAIL_DISPATCH_FAILED,
        DomainError::Dependency(_) => codes::AVATAR_UPLOAD_FAILED,
        DomainError::Database(_) => codes::DATABASE_ERROR,
        DomainError::Internal { .. } => codes::INTERNAL_ERROR,
    }
}

/// Build the envelope response for a domain error
///
/// # Arguments
///
/// * `error` - The failure raised by the service call
/// * `fallback` - Generic message used when the status is 5xx
pub fn domain_error_response(error: &DomainError, fallback: &str) -> HttpResponse {
    let status = status_for(error);
    let code = error_code(error);

    if status.is_server_error() {
        log::error!("[{}] {}", code, error);
        HttpResponse::build(status).json(ApiResponse::failure(fallback))
    } else {
        log::warn!("[{}] {}", code, error);
        HttpResponse::build(status).json(ApiResponse::failure(error.to_string()))
    }
}

/// Build the 400 envelope for an aggregated validation failure
///
/// The message is "All fields are required" when any field was missing,
/// otherwise "Validation failed"; the field map rides along either way.
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let (code, message) = if errors.has_missing_fields() {
        (codes::MISSING_FIELDS, "All fields are required")
    } else {
        (codes::VALIDATION_FAILED, "Validation failed")
    };

    log::warn!("[{}] {} field error(s)", code, errors.errors().len());

    HttpResponse::BadRequest()
        .json(ApiResponse::failure_with_errors(message, errors.to_field_errors()))
}
