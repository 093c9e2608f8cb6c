//! Email Service Module
//!
//! This module provides transactional email delivery for account
//! verification. Mailgun is the production provider; a mock
//! implementation for development and tests lives in `crate::mocks`.
//!
//! ## Features
//!
//! - **Mailgun Support**: Verification emails via the Mailgun HTTP API
//! - **Security**: Email address masking in logs

pub mod mailgun;

pub use mailgun::MailgunEmailService;

/// Helper function to mask email addresses for logging
///
/// Keeps the first character of the local part and the full domain
/// so log lines stay correlatable without exposing the address.
///
/// # Example
///
/// ```ignore
/// let masked = mask_email("erin@example.com");
/// assert_eq!(masked, "e***@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = &local[..local
                .char_indices()
                .nth(1)
                .map(|(i, _)| i)
                .unwrap_or(local.len())];
            format!("{}***@{}", first, domain)
        }
        _ => "*".repeat(email.len()),
    }
}
