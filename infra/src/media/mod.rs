//! Media Storage Module
//!
//! This module provides avatar storage for account signup. Cloudinary is
//! the production provider; a mock implementation for development and
//! tests lives in `crate::mocks`.
//!
//! ## Features
//!
//! - **Cloudinary Support**: Signed uploads and deletions via the HTTP API
//! - **Public Id Extraction**: Derives delete targets from delivery URLs

pub mod cloudinary;

pub use cloudinary::{public_id_from_url, CloudinaryAvatarStore};
