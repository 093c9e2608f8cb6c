//! Error type definitions for registration, verification, and session
//! operations.
//!
//! Display strings double as the client-facing response messages, so the
//! wording here is part of the wire contract.

use thiserror::Error;

/// Uniqueness conflicts raised while reconciling a signup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConflictError {
    #[error("Email is already registered.")]
    EmailTaken,

    #[error("Mobile number is already registered.")]
    MobileTaken,

    #[error("Username is already registered.")]
    UsernameTaken,

    #[error("Signup conflict, please retry.")]
    ConcurrentUpdate,
}

/// Credential failures during signin
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid password")]
    InvalidPassword,

    #[error("Please verify your account first.")]
    AccountNotVerified,
}

/// Failures of the unverified-to-verified transition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("User already verified")]
    AlreadyVerified,

    #[error("Invalid verification code")]
    InvalidCode,

    #[error("Verification code has expired")]
    CodeExpired,
}

/// Session token failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Failed to generate session token: {0}")]
    TokenGeneration(String),

    #[error("Invalid session token")]
    InvalidToken,

    #[error("Session token expired")]
    TokenExpired,
}

/// Failures of external collaborators the service depends on
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DependencyError {
    #[error("Avatar upload failed: {0}")]
    AvatarUpload(String),

    #[error("Avatar removal failed: {0}")]
    AvatarDelete(String),

    #[error("Verification email could not be sent: {0}")]
    EmailDispatch(String),
}
