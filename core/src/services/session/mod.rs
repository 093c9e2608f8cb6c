//! Session token service for the stateless login session
//!
//! Issues and validates the signed JWT that rides in the `token` cookie.
//! There is no server-side session store; possession of a valid token is
//! the whole session.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::SessionServiceConfig;
pub use service::SessionService;
