//! Cloudinary Avatar Store Implementation
//!
//! This module uploads account avatars to Cloudinary and removes replaced
//! ones. It implements the AvatarStoreTrait for production media storage.
//!
//! ## Features
//!
//! - Signed upload and destroy requests (SHA-256 signatures)
//! - Configuration guard so unconfigured environments fail fast
//! - Public id extraction from delivery URLs for deletions

use async_trait::async_trait;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::time::Duration;
use tracing::{error, info, warn};

use vb_core::services::AvatarStoreTrait;
use vb_shared::config::MediaConfig;

use crate::InfrastructureError;

/// Timeout for Cloudinary API requests in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Cloudinary avatar store implementation
pub struct CloudinaryAvatarStore {
    client: reqwest::Client,
    config: MediaConfig,
}

/// Response returned by the Cloudinary upload endpoint
#[derive(Debug, Deserialize)]
struct UploadResponse {
    /// HTTPS delivery URL of the stored image
    secure_url: String,
    /// Identifier used for later destroy calls
    #[serde(default)]
    public_id: String,
}

/// Response returned by the Cloudinary destroy endpoint
#[derive(Debug, Deserialize)]
struct DestroyResponse {
    /// "ok" on success, "not found" when the id is unknown
    result: String,
}

impl CloudinaryAvatarStore {
    /// Create a new Cloudinary avatar store
    ///
    /// # Arguments
    ///
    /// * `config` - Cloudinary credentials and upload folder
    pub fn new(config: MediaConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                InfrastructureError::Config(format!("Failed to build HTTP client: {}", e))
            })?;

        info!(
            "Cloudinary avatar store initialized for cloud: {}",
            config.cloud_name
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(MediaConfig::from_env())
    }

    /// Sign request parameters the way Cloudinary expects
    ///
    /// Parameters are sorted by key, joined as `key=value` pairs with `&`,
    /// and the API secret is appended before hashing.
    fn sign(&self, params: &[(&str, &str)]) -> String {
        let mut sorted = params.to_vec();
        sorted.sort_by_key(|&(key, _)| key);

        let to_sign: String = sorted
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha256::new();
        hasher.update(to_sign.as_bytes());
        hasher.update(self.config.api_secret.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Upload avatar bytes into a folder
    ///
    /// # Arguments
    ///
    /// * `data` - Raw image bytes from the signup form
    /// * `folder` - Cloudinary folder the avatar is stored under
    ///
    /// # Returns
    ///
    /// * `Ok(secure_url)` - HTTPS delivery URL of the stored avatar
    /// * `Err(InfrastructureError)` - If the upload fails or is rejected
    pub async fn upload_avatar(
        &self,
        data: &[u8],
        folder: &str,
    ) -> Result<String, InfrastructureError> {
        if data.is_empty() {
            return Err(InfrastructureError::Media(
                "Avatar data is empty".to_string(),
            ));
        }
        if !self.config.is_configured() {
            return Err(InfrastructureError::Config(
                "Cloudinary credentials are not configured".to_string(),
            ));
        }

        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = self.sign(&[("folder", folder), ("timestamp", &timestamp)]);

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(data.to_vec()).file_name("avatar"),
            )
            .text("folder", folder.to_string())
            .text("timestamp", timestamp)
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature);

        let endpoint = format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.config.cloud_name
        );

        let response = self
            .client
            .post(&endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("Cloudinary upload request failed: {}", e);
                InfrastructureError::Media(format!("Cloudinary upload request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                "Cloudinary upload rejected with status {}: {}",
                status, body
            );
            return Err(InfrastructureError::Media(format!(
                "Cloudinary returned status {}: {}",
                status, body
            )));
        }

        let parsed: UploadResponse = response.json().await.map_err(|e| {
            InfrastructureError::Media(format!("Failed to parse Cloudinary response: {}", e))
        })?;

        info!(
            "Avatar uploaded to Cloudinary as {} ({} bytes)",
            parsed.public_id,
            data.len()
        );

        Ok(parsed.secure_url)
    }

    /// Delete a previously uploaded avatar by its delivery URL
    ///
    /// # Arguments
    ///
    /// * `url` - The secure URL returned by an earlier upload
    pub async fn delete_avatar(&self, url: &str) -> Result<(), InfrastructureError> {
        if !self.config.is_configured() {
            return Err(InfrastructureError::Config(
                "Cloudinary credentials are not configured".to_string(),
            ));
        }

        let public_id = public_id_from_url(url).ok_or_else(|| {
            InfrastructureError::Media(format!("Cannot derive public id from URL: {}", url))
        })?;

        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = self.sign(&[("public_id", &public_id), ("timestamp", &timestamp)]);

        let endpoint = format!(
            "https://api.cloudinary.com/v1_1/{}/image/destroy",
            self.config.cloud_name
        );
        let params = [
            ("public_id", public_id.as_str()),
            ("timestamp", timestamp.as_str()),
            ("api_key", self.config.api_key.as_str()),
            ("signature", signature.as_str()),
        ];

        let response = self
            .client
            .post(&endpoint)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                error!("Cloudinary destroy request failed: {}", e);
                InfrastructureError::Media(format!("Cloudinary destroy request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                "Cloudinary destroy rejected with status {}: {}",
                status, body
            );
            return Err(InfrastructureError::Media(format!(
                "Cloudinary returned status {}: {}",
                status, body
            )));
        }

        let parsed: DestroyResponse = response.json().await.map_err(|e| {
            InfrastructureError::Media(format!("Failed to parse Cloudinary response: {}", e))
        })?;

        if parsed.result != "ok" {
            warn!(
                "Cloudinary destroy returned '{}' for {}",
                parsed.result, public_id
            );
            return Err(InfrastructureError::Media(format!(
                "Cloudinary destroy returned '{}'",
                parsed.result
            )));
        }

        info!("Avatar {} deleted from Cloudinary", public_id);

        Ok(())
    }
}

#[async_trait]
impl AvatarStoreTrait for CloudinaryAvatarStore {
    async fn upload(&self, data: &[u8], folder: &str) -> Result<String, String> {
        self.upload_avatar(data, folder)
            .await
            .map_err(|e| e.to_string())
    }

    async fn delete(&self, url: &str) -> Result<(), String> {
        self.delete_avatar(url).await.map_err(|e| e.to_string())
    }
}

/// Derive the Cloudinary public id from a delivery URL
///
/// Takes everything after the `/upload/` segment, drops a leading version
/// segment such as `v1713075500`, and strips the file extension.
///
/// # Example
///
/// ```ignore
/// let id = public_id_from_url(
///     "https://res.cloudinary.com/demo/image/upload/v1713075500/VibeBox/Avatar/abc123.png",
/// );
/// assert_eq!(id.as_deref(), Some("VibeBox/Avatar/abc123"));
/// ```
pub fn public_id_from_url(url: &str) -> Option<String> {
    let (_, after_upload) = url.split_once("/upload/")?;

    let mut segments: Vec<&str> = after_upload.split('/').collect();
    if let Some(first) = segments.first() {
        let is_version = first.len() > 1
            && first.starts_with('v')
            && first[1..].chars().all(|c| c.is_ascii_digit());
        if is_version {
            segments.remove(0);
        }
    }
    if segments.is_empty() || segments.iter().any(|s| s.is_empty()) {
        return None;
    }

    let joined = segments.join("/");
    let public_id = match joined.rsplit_once('.') {
        // A dot inside a folder segment is not an extension
        Some((stem, ext)) if !ext.contains('/') => stem.to_string(),
        _ => joined,
    };

    if public_id.is_empty() {
        None
    } else {
        Some(public_id)
    }
}
