//! Domain-specific error types and error handling.

pub mod types;

// Re-export all error types
pub use types::{AuthError, ConflictError, DependencyError, SessionError, VerificationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Database error: {0}")]
    Database(String),

    // Bridge to specific error types
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Dependency(#[from] DependencyError),
}

impl DomainError {
    /// Not-found error for the user resource
    pub fn user_not_found() -> Self {
        DomainError::NotFound {
            resource: "User".to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_wire_contract() {
        assert_eq!(DomainError::user_not_found().to_string(), "User not found");
        assert_eq!(
            DomainError::from(ConflictError::EmailTaken).to_string(),
            "Email is already registered."
        );
        assert_eq!(
            DomainError::from(AuthError::InvalidPassword).to_string(),
            "Invalid password"
        );
        assert_eq!(
            DomainError::from(AuthError::AccountNotVerified).to_string(),
            "Please verify your account first."
        );
        assert_eq!(
            DomainError::from(VerificationError::CodeExpired).to_string(),
            "Verification code has expired"
        );
    }
}
