//! Password hashing and verification built on bcrypt.

use tracing;

use crate::errors::{DomainError, DomainResult};

/// Bcrypt work factor applied to every stored password
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password for storage
///
/// # Arguments
/// * `plain` - The plaintext password
///
/// # Returns
/// * `Ok(String)` - Bcrypt hash including salt and cost
/// * `Err(DomainError)` - Hashing failed
pub fn hash_password(plain: &str) -> DomainResult<String> {
    bcrypt::hash(plain, HASH_COST).map_err(|e| {
        tracing::error!(error = %e, event = "password_hash_failed", "Failed to hash password");
        DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        }
    })
}

/// Check a plaintext password against a stored hash
///
/// # Arguments
/// * `plain` - The plaintext password from the signin request
/// * `hashed` - The stored bcrypt hash
///
/// # Returns
/// * `Ok(bool)` - Whether the password matches
/// * `Err(DomainError)` - The stored hash could not be parsed
pub fn verify_password(plain: &str, hashed: &str) -> DomainResult<bool> {
    bcrypt::verify(plain, hashed).map_err(|e| {
        tracing::error!(error = %e, event = "password_verify_failed", "Failed to verify password");
        DomainError::Internal {
            message: format!("Failed to verify password: {}", e),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("s3cret-Passw0rd").unwrap();

        assert!(hash.starts_with("$2"));
        assert!(verify_password("s3cret-Passw0rd", &hash).unwrap());
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("same-input").unwrap();
        let second = hash_password("same-input").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let result = verify_password("anything", "not-a-bcrypt-hash");

        assert!(result.is_err());
    }
}
