//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the VibeBox backend.
//! It provides concrete implementations for the persistence and external
//! services the account lifecycle depends on.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL account repository using SQLx
//! - **Email**: Mailgun client delivering verification emails
//! - **Media**: Cloudinary store holding avatar images
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `mock-services`: Enable mock implementations for testing

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Email module - verification email delivery
pub mod email;

/// Media module - avatar image storage
pub mod media;

/// Mock implementations backing integration tests
#[cfg(any(test, feature = "mock-services"))]
pub mod mocks;

#[cfg(feature = "mysql")]
pub use database::{DatabasePool, MySqlAccountRepository};
pub use email::MailgunEmailService;
pub use media::CloudinaryAvatarStore;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email provider error
    #[error("Email service error: {0}")]
    Email(String),

    /// Media store error
    #[error("Media store error: {0}")]
    Media(String),
}
