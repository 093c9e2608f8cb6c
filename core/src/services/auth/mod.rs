//! Authentication service module for credential signin
//!
//! Resolves the submitted identifier to an account, checks the password
//! against its bcrypt hash, and issues the session token.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
