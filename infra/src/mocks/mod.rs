//! Mock Service Implementations
//!
//! Mock email and avatar store implementations for development and
//! testing. Every call is recorded for inspection, and failures can be
//! simulated to exercise error paths. The account repository mock is
//! re-exported from the core crate so API tests can wire a full stack
//! without external services.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use vb_core::services::{AvatarStoreTrait, EmailServiceTrait};

pub use vb_core::repositories::MockAccountRepository;

use crate::email::mask_email;

/// A verification email captured by the mock email service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    /// Recipient address
    pub to: String,
    /// Username used in the greeting
    pub username: String,
    /// The six-digit verification code
    pub code: String,
    /// Verification page URL included in the body
    pub verify_url: String,
}

/// Mock email service for development and testing
///
/// This implementation:
/// - Records every verification email for inspection
/// - Generates mock message ids
/// - Can simulate delivery failures
#[derive(Clone, Default)]
pub struct MockEmailService {
    /// Emails captured so far
    sent: Arc<Mutex<Vec<SentEmail>>>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock email service that fails every send
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            simulate_failure: true,
        }
    }

    /// Get the emails recorded so far
    pub async fn sent_emails(&self) -> Vec<SentEmail> {
        self.sent.lock().await.clone()
    }

    /// Get the number of emails recorded so far
    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_verification_email(
        &self,
        to: &str,
        username: &str,
        code: &str,
        verify_url: &str,
    ) -> Result<String, String> {
        if self.simulate_failure {
            warn!(
                "Mock email service simulating failure for: {}",
                mask_email(to)
            );
            return Err("Simulated email delivery failure".to_string());
        }

        self.sent.lock().await.push(SentEmail {
            to: to.to_string(),
            username: username.to_string(),
            code: code.to_string(),
            verify_url: verify_url.to_string(),
        });

        let message_id = format!("mock_{}", Uuid::new_v4());

        info!(
            target: "email_service",
            provider = "mock",
            to = %mask_email(to),
            message_id = %message_id,
            "Verification email sent (mock)"
        );

        Ok(message_id)
    }
}

/// Mock avatar store for development and testing
///
/// This implementation:
/// - Returns deterministic URLs under a fake CDN host
/// - Records deleted URLs for inspection
/// - Can simulate upload and delete failures
#[derive(Clone, Default)]
pub struct MockAvatarStore {
    /// Counter for tracking the number of uploads
    uploads: Arc<AtomicU64>,
    /// URLs passed to delete so far
    deleted: Arc<Mutex<Vec<String>>>,
    /// Whether uploads should fail (for testing)
    fail_upload: bool,
    /// Whether deletions should fail (for testing)
    fail_delete: bool,
}

impl MockAvatarStore {
    /// Create a new mock avatar store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock store with configurable failure modes
    pub fn with_options(fail_upload: bool, fail_delete: bool) -> Self {
        Self {
            uploads: Arc::new(AtomicU64::new(0)),
            deleted: Arc::new(Mutex::new(Vec::new())),
            fail_upload,
            fail_delete,
        }
    }

    /// Get the total number of uploads
    pub fn upload_count(&self) -> u64 {
        self.uploads.load(Ordering::SeqCst)
    }

    /// Get the URLs deleted so far
    pub async fn deleted_urls(&self) -> Vec<String> {
        self.deleted.lock().await.clone()
    }
}

#[async_trait]
impl AvatarStoreTrait for MockAvatarStore {
    async fn upload(&self, data: &[u8], folder: &str) -> Result<String, String> {
        if data.is_empty() {
            return Err("Avatar data is empty".to_string());
        }
        if self.fail_upload {
            warn!("Mock avatar store simulating upload failure");
            return Err("Simulated avatar upload failure".to_string());
        }

        let sequence = self.uploads.fetch_add(1, Ordering::SeqCst) + 1;
        let url = format!("https://cdn.example.com/{}/avatar-{}.png", folder, sequence);

        info!(
            target: "media_service",
            provider = "mock",
            folder = %folder,
            bytes = data.len(),
            "Avatar uploaded (mock)"
        );

        Ok(url)
    }

    async fn delete(&self, url: &str) -> Result<(), String> {
        if self.fail_delete {
            warn!("Mock avatar store simulating delete failure");
            return Err("Simulated avatar delete failure".to_string());
        }

        self.deleted.lock().await.push(url.to_string());

        info!(
            target: "media_service",
            provider = "mock",
            url = %url,
            "Avatar deleted (mock)"
        );

        Ok(())
    }
}
