//! Mock implementations for testing the registration service

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::services::registration::{AvatarStoreTrait, EmailServiceTrait};

/// A verification email captured by the mock
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub username: String,
    pub code: String,
    pub verify_url: String,
}

pub struct MockEmailService {
    pub sent: Arc<Mutex<Vec<SentEmail>>>,
    pub fail_with: Option<String>,
}

impl MockEmailService {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(reason.to_string()),
        }
    }

    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
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
        if let Some(reason) = &self.fail_with {
            return Err(reason.clone());
        }
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            username: username.to_string(),
            code: code.to_string(),
            verify_url: verify_url.to_string(),
        });
        Ok("mock-message-id".to_string())
    }
}

pub struct MockAvatarStore {
    pub uploads: Arc<Mutex<Vec<(Vec<u8>, String)>>>,
    pub deletes: Arc<Mutex<Vec<String>>>,
    pub fail_upload: Option<String>,
    pub fail_delete: bool,
}

impl MockAvatarStore {
    pub fn new() -> Self {
        Self {
            uploads: Arc::new(Mutex::new(Vec::new())),
            deletes: Arc::new(Mutex::new(Vec::new())),
            fail_upload: None,
            fail_delete: false,
        }
    }

    pub fn failing_upload(reason: &str) -> Self {
        Self {
            fail_upload: Some(reason.to_string()),
            ..Self::new()
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn deleted_urls(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl AvatarStoreTrait for MockAvatarStore {
    async fn upload(&self, data: &[u8], folder: &str) -> Result<String, String> {
        if let Some(reason) = &self.fail_upload {
            return Err(reason.clone());
        }
        let mut uploads = self.uploads.lock().unwrap();
        uploads.push((data.to_vec(), folder.to_string()));
        Ok(format!(
            "https://cdn.example.com/{}/avatar-{}.png",
            folder,
            uploads.len()
        ))
    }

    async fn delete(&self, url: &str) -> Result<(), String> {
        self.deletes.lock().unwrap().push(url.to_string());
        if self.fail_delete {
            return Err("media store unavailable".to_string());
        }
        Ok(())
    }
}
