//! Handlers for the `/api/users` scope
//!
//! Each handler runs the request's validation pass, calls exactly one
//! service method, and translates the result into the response envelope.
//! No domain logic lives here.

pub mod signin;
pub mod signout;
pub mod signup;
pub mod verify;

use std::sync::Arc;

use actix_web::cookie::time::Duration;
use actix_web::cookie::Cookie;

use vb_core::repositories::AccountRepository;
use vb_core::services::auth::AuthService;
use vb_core::services::registration::{AvatarStoreTrait, EmailServiceTrait, RegistrationService};
use vb_core::services::session::SessionService;
use vb_core::services::verification::VerificationService;
use vb_shared::config::SessionConfig;

/// Application state that holds the shared services
pub struct AppState<A, M, S>
where
    A: AccountRepository,
    M: EmailServiceTrait,
    S: AvatarStoreTrait,
{
    pub registration_service: Arc<RegistrationService<A, M, S>>,
    pub verification_service: Arc<VerificationService<A>>,
    pub auth_service: Arc<AuthService<A>>,
    pub session_service: Arc<SessionService>,
    /// Cookie policy applied when issuing and clearing the session cookie
    pub session_config: SessionConfig,
}

/// Session cookie built under the configured policy
///
/// Signin passes the issued token with its lifetime; signout passes an
/// empty value with `Duration::ZERO` so the browser drops the cookie.
fn session_cookie(config: &SessionConfig, value: String, max_age: Duration) -> Cookie<'static> {
    Cookie::build(config.cookie_name.clone(), value)
        .path(config.cookie_path.clone())
        .http_only(config.cookie_http_only)
        .secure(config.cookie_secure)
        .max_age(max_age)
        .finish()
}
