//! Session-aware redirect guard for the entry endpoints.
//!
//! Signup and verify serve callers who are not signed in yet, so requests
//! carrying a valid session cookie are redirected to the home route
//! instead of reaching the handler. A missing, invalid, or expired cookie
//! passes through as unauthenticated.

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;

use vb_core::services::session::SessionService;

/// Where authenticated callers are sent instead
const HOME_LOCATION: &str = "/";

/// Session guard middleware factory
pub struct SessionGuard {
    sessions: Arc<SessionService>,
    cookie_name: String,
}

impl SessionGuard {
    /// Creates a guard validating the named cookie with the given service
    pub fn new(sessions: Arc<SessionService>, cookie_name: impl Into<String>) -> Self {
        Self {
            sessions,
            cookie_name: cookie_name.into(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionGuardMiddleware {
            service: Rc::new(service),
            sessions: Arc::clone(&self.sessions),
            cookie_name: self.cookie_name.clone(),
        }))
    }
}

/// Session guard middleware service
pub struct SessionGuardMiddleware<S> {
    service: Rc<S>,
    sessions: Arc<SessionService>,
    cookie_name: String,
}

impl<S, B> Service<ServiceRequest> for SessionGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let sessions = Arc::clone(&self.sessions);
        let cookie_name = self.cookie_name.clone();

        Box::pin(async move {
            let authenticated = req
                .cookie(&cookie_name)
                .map(|cookie| sessions.verify(cookie.value()).is_ok())
                .unwrap_or(false);

            if authenticated {
                log::info!(
                    "Authenticated session on {}, redirecting to {}",
                    req.path(),
                    HOME_LOCATION
                );

                let (request, _payload) = req.into_parts();
                let response = HttpResponse::Found()
                    .insert_header((header::LOCATION, HOME_LOCATION))
                    .finish()
                    .map_into_right_body();

                return Ok(ServiceResponse::new(request, response));
            }

            service
                .call(req)
                .await
                .map(|response| response.map_into_left_body())
        })
    }
}
