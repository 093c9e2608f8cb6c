use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse};

use crate::dto::users::SignupForm;
use crate::handlers::error::{domain_error_response, validation_error_response};

use vb_core::repositories::AccountRepository;
use vb_core::services::registration::{AvatarStoreTrait, EmailServiceTrait};
use vb_shared::ApiResponse;

use super::AppState;

/// Generic message for failures the client cannot act on
const SIGNUP_FALLBACK: &str = "Signup failed.";

/// Handler for `POST /api/users/signup`
///
/// Accepts the multipart signup form, uploads the avatar, creates or
/// overwrites the account, and dispatches the verification email.
///
/// # Responses
///
/// - 201 `{"success": true, "message": "Signup successful."}`
/// - 400 missing or malformed fields, with the per-field error map
/// - 400 email, mobile number, or username already registered
/// - 500 avatar upload or email dispatch failure
pub async fn signup<A, M, S>(
    state: web::Data<AppState<A, M, S>>,
    MultipartForm(form): MultipartForm<SignupForm>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    M: EmailServiceTrait + 'static,
    S: AvatarStoreTrait + 'static,
{
    let signup = match form.into_new_signup() {
        Ok(signup) => signup,
        Err(errors) => return validation_error_response(&errors),
    };

    log::info!("Processing signup for username: {}", signup.username);

    match state.registration_service.register(signup).await {
        Ok(outcome) => {
            log::info!(
                "Signup completed for account: {} (overwrote existing: {})",
                outcome.account_id,
                outcome.overwrote_existing
            );
            HttpResponse::Created().json(ApiResponse::success("Signup successful."))
        }
        Err(error) => domain_error_response(&error, SIGNUP_FALLBACK),
    }
}
