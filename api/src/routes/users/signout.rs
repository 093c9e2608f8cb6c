use actix_web::cookie::time::Duration;
use actix_web::{web, HttpResponse};

use vb_core::repositories::AccountRepository;
use vb_core::services::registration::{AvatarStoreTrait, EmailServiceTrait};
use vb_shared::ApiResponse;

use super::{session_cookie, AppState};

/// Handler for `POST /api/users/signout`
///
/// Sessions are stateless, so there is nothing to revoke server-side;
/// signing out means telling the browser to drop the cookie. Answers 200
/// whether or not the request carried a session.
pub async fn signout<A, M, S>(state: web::Data<AppState<A, M, S>>) -> HttpResponse
where
    A: AccountRepository + 'static,
    M: EmailServiceTrait + 'static,
    S: AvatarStoreTrait + 'static,
{
    log::info!("Signout, clearing session cookie");

    let clearing = session_cookie(&state.session_config, String::new(), Duration::ZERO);

    HttpResponse::Ok()
        .cookie(clearing)
        .json(ApiResponse::success("Signout successful"))
}
