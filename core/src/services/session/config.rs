//! Configuration for the session token service

use crate::domain::entities::session::SESSION_TOKEN_EXPIRY_DAYS;

/// Configuration for the session token service
#[derive(Debug, Clone)]
pub struct SessionServiceConfig {
    /// Secret for HS256 signing and verification
    pub jwt_secret: String,
    /// Lifetime of an issued token in seconds
    pub token_expiry_seconds: i64,
}

impl Default for SessionServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-change-in-production".to_string(),
            token_expiry_seconds: SESSION_TOKEN_EXPIRY_DAYS * 24 * 60 * 60,
        }
    }
}

impl SessionServiceConfig {
    /// Config with the given secret and the default seven-day lifetime
    pub fn with_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }
}
