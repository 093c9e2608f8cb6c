//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `database` - Database connection and pool configuration
//! - `email` - Transactional email provider credentials
//! - `environment` - Environment detection
//! - `media` - Avatar object-storage credentials
//! - `server` - HTTP server configuration
//! - `session` - Session token signing and cookie policy

pub mod database;
pub mod email;
pub mod environment;
pub mod media;
pub mod server;
pub mod session;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use environment::Environment;
pub use media::{MediaConfig, DEFAULT_AVATAR_URL};
pub use server::ServerConfig;
pub use session::SessionConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Session token configuration
    pub session: SessionConfig,

    /// Email provider configuration
    pub email: EmailConfig,

    /// Avatar storage configuration
    pub media: MediaConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            session: SessionConfig::default(),
            email: EmailConfig::default(),
            media: MediaConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            database: DatabaseConfig::new("mysql://localhost:3306/vibebox_dev"),
            ..Default::default()
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 8080),
            database: DatabaseConfig::new("mysql://prod-db:3306/vibebox").with_max_connections(50),
            session: SessionConfig {
                cookie_secure: true,
                ..Default::default()
            },
            email: EmailConfig::default(),
            media: MediaConfig::default(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            session: SessionConfig::from_env(environment),
            email: EmailConfig::from_env(),
            media: MediaConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_config() {
        let config = AppConfig::development();
        assert!(config.environment.is_development());
        assert!(!config.session.cookie_secure);
    }

    #[test]
    fn test_production_config() {
        let config = AppConfig::production();
        assert!(config.environment.is_production());
        assert!(config.session.cookie_secure);
        assert_eq!(config.database.max_connections, 50);
    }
}
