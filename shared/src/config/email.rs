//! Transactional email provider configuration

use serde::{Deserialize, Serialize};

/// Mailgun API configuration for verification emails
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Mailgun API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Mailgun sending domain
    pub domain: String,

    /// Mailgun API key
    pub api_key: String,

    /// From header for outgoing mail
    pub sender: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            domain: String::from("mg.vibebox.app"),
            api_key: String::new(),
            sender: String::from("VibeBox <no-reply@vibebox.app>"),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            api_base: std::env::var("MAILGUN_API_BASE")
                .unwrap_or_else(|_| default_api_base()),
            domain: std::env::var("MAILGUN_DOMAIN")
                .unwrap_or_else(|_| "mg.vibebox.app".to_string()),
            api_key: std::env::var("MAILGUN_API_KEY").unwrap_or_default(),
            sender: std::env::var("MAIL_SENDER")
                .unwrap_or_else(|_| "VibeBox <no-reply@vibebox.app>".to_string()),
        }
    }

    /// Check whether credentials are present
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.domain.is_empty()
    }
}

fn default_api_base() -> String {
    String::from("https://api.mailgun.net")
}
