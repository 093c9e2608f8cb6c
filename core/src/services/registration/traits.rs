//! Traits for email and media store integration

use async_trait::async_trait;

/// Trait for the transactional email provider
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send a verification code email, returning the provider message id
    ///
    /// # Arguments
    /// * `to` - Recipient email address
    /// * `username` - Username greeting the recipient
    /// * `code` - The six-digit verification code
    /// * `verify_url` - Absolute URL of the verification page
    async fn send_verification_email(
        &self,
        to: &str,
        username: &str,
        code: &str,
        verify_url: &str,
    ) -> Result<String, String>;
}

/// Trait for the avatar media store
#[async_trait]
pub trait AvatarStoreTrait: Send + Sync {
    /// Upload avatar bytes into a folder, returning the public URL
    async fn upload(&self, data: &[u8], folder: &str) -> Result<String, String>;

    /// Remove a previously uploaded avatar by its public URL
    async fn delete(&self, url: &str) -> Result<(), String>;
}
