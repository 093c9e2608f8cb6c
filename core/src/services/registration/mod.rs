//! Registration service module for the signup workflow
//!
//! This module implements the full signup use case:
//! - Reconciliation of the submission against existing accounts by email
//!   and mobile number
//! - Avatar upload to the media store before any database write
//! - Password hashing and verification code generation
//! - Create-or-overwrite persistence with optimistic concurrency
//! - Verification email dispatch once the record is durable

mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use service::{RegistrationService, RegistrationServiceConfig};
pub use traits::{AvatarStoreTrait, EmailServiceTrait};
pub use types::NewSignup;
