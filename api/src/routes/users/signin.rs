use actix_web::cookie::time::Duration;
use actix_web::{web, HttpResponse};

use crate::dto::users::{SigninRequest, SigninResponse};
use crate::handlers::error::{domain_error_response, validation_error_response};

use vb_core::repositories::AccountRepository;
use vb_core::services::registration::{AvatarStoreTrait, EmailServiceTrait};

use super::{session_cookie, AppState};

/// Generic message for failures the client cannot act on
const SIGNIN_FALLBACK: &str = "Signin failed.";

/// Handler for `POST /api/users/signin`
///
/// Resolves the identifier to an account, checks the password, and on
/// success sets the session cookie alongside the response body.
///
/// # Request Body
///
/// ```json
/// {
///     "identifier": "alice@example.com",
///     "password": "sup3r-secret"
/// }
/// ```
///
/// # Responses
///
/// - 200 `{"success": true, "message": "Signin successful", "userId": "..."}`
///   with the `Set-Cookie` header
/// - 400 missing fields
/// - 404 "User not found"
/// - 401 "Invalid password" (checked before the verified state)
/// - 403 "Please verify your account first."
pub async fn signin<A, M, S>(
    state: web::Data<AppState<A, M, S>>,
    request: web::Json<SigninRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    M: EmailServiceTrait + 'static,
    S: AvatarStoreTrait + 'static,
{
    let (identifier, password) = match request.validate_fields() {
        Ok(fields) => fields,
        Err(errors) => return validation_error_response(&errors),
    };

    match state.auth_service.sign_in(&identifier, &password).await {
        Ok(outcome) => {
            log::info!("Signin completed for account: {}", outcome.account_id);

            let cookie = session_cookie(
                &state.session_config,
                outcome.token,
                Duration::seconds(outcome.expires_in),
            );

            HttpResponse::Ok().cookie(cookie).json(SigninResponse {
                success: true,
                message: "Signin successful".to_string(),
                user_id: outcome.account_id.to_string(),
            })
        }
        Err(error) => domain_error_response(&error, SIGNIN_FALLBACK),
    }
}
