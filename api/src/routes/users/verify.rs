use actix_web::{web, HttpResponse};

use vb_core::repositories::AccountRepository;
use vb_core::services::registration::{AvatarStoreTrait, EmailServiceTrait};
use vb_shared::ApiResponse;

use crate::dto::users::VerifyRequest;
use crate::handlers::error::{domain_error_response, validation_error_response};

use super::AppState;

const VERIFY_FALLBACK: &str = "Error verifying user.";

/// Handler for `POST /api/users/verify`
///
/// Request body:
/// ```json
/// {
///     "username": "johndoe",
///     "code": "482913"
/// }
/// ```
///
/// Responses:
/// - 200: code accepted, account marked verified
/// - 400: validation failure, wrong or expired code, already verified
/// - 404: no account with that username
pub async fn verify<A, M, S>(
    state: web::Data<AppState<A, M, S>>,
    request: web::Json<VerifyRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    M: EmailServiceTrait + 'static,
    S: AvatarStoreTrait + 'static,
{
    let (username, code) = match request.validate_fields() {
        Ok(fields) => fields,
        Err(errors) => return validation_error_response(&errors),
    };

    log::info!("Processing verification for username: {}", username);

    match state.verification_service.verify_account(&username, &code).await {
        Ok(account) => {
            log::info!("Verification completed for account: {}", account.id);
            HttpResponse::Ok().json(ApiResponse::success("User verified successfully"))
        }
        Err(error) => domain_error_response(&error, VERIFY_FALLBACK),
    }
}
