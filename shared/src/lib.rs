//! Shared utilities and common types for the VibeBox server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error codes and the API response envelope
//! - Validation utilities

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, EmailConfig, Environment, MediaConfig, ServerConfig, SessionConfig,
};
pub use errors::codes;
pub use types::ApiResponse;
pub use utils::validation;
