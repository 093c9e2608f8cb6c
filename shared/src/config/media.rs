//! Avatar object-storage provider configuration

use serde::{Deserialize, Serialize};

/// Placeholder shown for accounts that never uploaded a custom avatar.
/// The overwrite path skips remote deletion when the stored URL equals it.
pub const DEFAULT_AVATAR_URL: &str =
    "https://res.cloudinary.com/vibebox/image/upload/v1713075500/VibeBox/Avatar/upload-avatar.png";

/// Cloudinary configuration for avatar uploads
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    /// Cloudinary cloud name
    pub cloud_name: String,

    /// Cloudinary API key
    pub api_key: String,

    /// Cloudinary API secret used for request signing
    pub api_secret: String,

    /// Folder avatars are uploaded into
    #[serde(default = "default_upload_folder")]
    pub upload_folder: String,

    /// Placeholder avatar URL assigned to accounts without an upload
    #[serde(default = "default_avatar_url")]
    pub default_avatar_url: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            cloud_name: String::from("vibebox"),
            api_key: String::new(),
            api_secret: String::new(),
            upload_folder: default_upload_folder(),
            default_avatar_url: default_avatar_url(),
        }
    }
}

impl MediaConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            cloud_name: std::env::var("CLOUDINARY_CLOUD_NAME")
                .unwrap_or_else(|_| "vibebox".to_string()),
            api_key: std::env::var("CLOUDINARY_API_KEY").unwrap_or_default(),
            api_secret: std::env::var("CLOUDINARY_API_SECRET").unwrap_or_default(),
            upload_folder: std::env::var("CLOUDINARY_UPLOAD_FOLDER")
                .unwrap_or_else(|_| default_upload_folder()),
            default_avatar_url: std::env::var("DEFAULT_AVATAR_URL")
                .unwrap_or_else(|_| default_avatar_url()),
        }
    }

    /// Check whether credentials are present
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

fn default_upload_folder() -> String {
    String::from("VibeBox/Avatar")
}

fn default_avatar_url() -> String {
    String::from(DEFAULT_AVATAR_URL)
}
