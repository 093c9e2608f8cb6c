//! Mailgun Email Service Implementation
//!
//! This module sends verification emails through the Mailgun messages API.
//! It implements the EmailServiceTrait for production email delivery.
//!
//! ## Features
//!
//! - Verification emails with plain-text and HTML bodies
//! - Configuration guard so unconfigured environments fail fast
//! - Comprehensive error handling with response bodies preserved
//! - Security: Email address masking in logs

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, info};

use vb_core::services::EmailServiceTrait;
use vb_shared::config::EmailConfig;

use crate::{email::mask_email, InfrastructureError};

/// Subject line for verification emails
const VERIFICATION_SUBJECT: &str = "VibeBox | Verification Code";

/// Timeout for Mailgun API requests in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Mailgun email service implementation
pub struct MailgunEmailService {
    client: reqwest::Client,
    config: EmailConfig,
}

/// Response returned by the Mailgun messages endpoint
#[derive(Debug, Deserialize)]
struct MailgunResponse {
    /// Provider-assigned message identifier
    id: String,
    /// Human-readable status line
    #[serde(default)]
    #[allow(dead_code)]
    message: String,
}

impl MailgunEmailService {
    /// Create a new Mailgun email service
    ///
    /// # Arguments
    ///
    /// * `config` - Mailgun credentials and sending domain
    pub fn new(config: EmailConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                InfrastructureError::Config(format!("Failed to build HTTP client: {}", e))
            })?;

        info!(
            "Mailgun email service initialized for domain: {}",
            config.domain
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(EmailConfig::from_env())
    }

    /// Send a verification email via the Mailgun messages API
    ///
    /// # Arguments
    ///
    /// * `to` - Recipient email address
    /// * `username` - Username greeting the recipient
    /// * `code` - The six-digit verification code
    /// * `verify_url` - Absolute URL of the verification page
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier for the accepted message
    /// * `Err(InfrastructureError)` - If the request fails or Mailgun rejects it
    pub async fn send_verification(
        &self,
        to: &str,
        username: &str,
        code: &str,
        verify_url: &str,
    ) -> Result<String, InfrastructureError> {
        if !self.config.is_configured() {
            return Err(InfrastructureError::Config(
                "Mailgun credentials are not configured".to_string(),
            ));
        }

        let endpoint = format!(
            "{}/v3/{}/messages",
            self.config.api_base, self.config.domain
        );
        let text = text_body(username, code);
        let html = html_body(username, code, verify_url);
        let params = [
            ("from", self.config.sender.as_str()),
            ("to", to),
            ("subject", VERIFICATION_SUBJECT),
            ("text", text.as_str()),
            ("html", html.as_str()),
        ];

        let response = self
            .client
            .post(&endpoint)
            .basic_auth("api", Some(&self.config.api_key))
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                error!("Mailgun request failed: {}", e);
                InfrastructureError::Email(format!("Mailgun request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                "Mailgun rejected message to {} with status {}: {}",
                mask_email(to),
                status,
                body
            );
            return Err(InfrastructureError::Email(format!(
                "Mailgun returned status {}: {}",
                status, body
            )));
        }

        let parsed: MailgunResponse = response.json().await.map_err(|e| {
            InfrastructureError::Email(format!("Failed to parse Mailgun response: {}", e))
        })?;

        info!(
            "Verification email sent to {} with id: {}",
            mask_email(to),
            parsed.id
        );

        Ok(parsed.id)
    }
}

#[async_trait]
impl EmailServiceTrait for MailgunEmailService {
    async fn send_verification_email(
        &self,
        to: &str,
        username: &str,
        code: &str,
        verify_url: &str,
    ) -> Result<String, String> {
        self.send_verification(to, username, code, verify_url)
            .await
            .map_err(|e| e.to_string())
    }
}

/// Plain-text body of the verification email
fn text_body(username: &str, code: &str) -> String {
    format!(
        "Hello, {}\n\nThank you for registering. Please use the following verification code to complete your registration:\n\n{}\n\nThis code is valid only for 1 hour.\n\nIf you did not request this code, please ignore this email.",
        username, code
    )
}

/// HTML body of the verification email
fn html_body(username: &str, code: &str, verify_url: &str) -> String {
    format!(
        r#"
        <html>
          <body>
            <div style="font-family: Arial, sans-serif; line-height: 1.6;">
              <h2>Hello {},</h2>
              <p>Thank you for registering. Please use the following verification code to complete your registration:</p>
              <p style="font-size: 1.5em; font-weight: bold;">{}</p>
              <p>Or copy and paste this url in your browser to verify your account:</p>
              <p>{}</p>
              <p>This code is valid only for 1 hour.</p>
              <p>If you did not request this code, please ignore this email.</p>
            </div>
          </body>
        </html>"#,
        username, code, verify_url
    )
}
