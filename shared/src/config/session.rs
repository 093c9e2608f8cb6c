//! Session token and cookie configuration

use serde::{Deserialize, Serialize};

use super::environment::Environment;

/// Configuration for the stateless JWT session tokens and their cookie
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Secret key for signing session tokens
    pub secret: String,

    /// Session token validity in seconds
    pub token_expiry: i64,

    /// Session cookie name
    pub cookie_name: String,

    /// Session cookie Secure flag (HTTPS only)
    pub cookie_secure: bool,

    /// Session cookie HttpOnly flag
    #[serde(default = "default_http_only")]
    pub cookie_http_only: bool,

    /// Session cookie path
    #[serde(default = "default_cookie_path")]
    pub cookie_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            token_expiry: 7 * 86400,
            cookie_name: String::from("token"),
            cookie_secure: false,
            cookie_http_only: default_http_only(),
            cookie_path: default_cookie_path(),
        }
    }
}

impl SessionConfig {
    /// Create a new session configuration with a secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token expiry in days
    pub fn with_expiry_days(mut self, days: i64) -> Self {
        self.token_expiry = days * 86400;
        self
    }

    /// Create from environment variables
    pub fn from_env(environment: Environment) -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "development-secret-please-change-in-production".to_string());
        let token_expiry = std::env::var("SESSION_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "604800".to_string())
            .parse()
            .unwrap_or(604800);

        Self {
            secret,
            token_expiry,
            cookie_secure: environment.require_secure_cookies(),
            ..Default::default()
        }
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }
}

fn default_http_only() -> bool {
    true
}

fn default_cookie_path() -> String {
    String::from("/")
}
