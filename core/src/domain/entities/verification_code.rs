//! Verification code value object for email-based account confirmation.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Smallest code value; keeps every code at six digits with no leading zero
pub const CODE_MIN: u32 = 100_000;

/// Largest code value
pub const CODE_MAX: u32 = 999_999;

/// Expiration time for verification codes (1 hour)
pub const EXPIRATION_MINUTES: i64 = 60;

/// A one-time numeric code proving email ownership, paired with its expiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// The 6-digit verification code
    pub code: String,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Creates a new verification code valid for one hour
    ///
    /// # Returns
    ///
    /// A new `VerificationCode` with a random 6-digit code drawn uniformly
    /// from 100000-999999
    pub fn new() -> Self {
        Self::new_with_expiration(EXPIRATION_MINUTES)
    }

    /// Creates a new verification code with a custom expiration time
    ///
    /// # Arguments
    ///
    /// * `expiration_minutes` - Number of minutes until the code expires
    pub fn new_with_expiration(expiration_minutes: i64) -> Self {
        Self {
            code: Self::generate_code(),
            expires_at: Utc::now() + Duration::minutes(expiration_minutes),
        }
    }

    /// Reconstructs a verification code from stored parts
    ///
    /// Used by repositories when mapping persisted rows back into the entity.
    pub fn from_parts(code: String, expires_at: DateTime<Utc>) -> Self {
        Self { code, expires_at }
    }

    /// Generates a random 6-digit code in the 100000-999999 range
    fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(CODE_MIN..=CODE_MAX);
        code.to_string()
    }

    /// Checks if the verification code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks whether the submitted code matches this one
    pub fn matches(&self, input_code: &str) -> bool {
        self.code == input_code
    }

    /// Gets the time remaining until expiration, or zero if expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

impl Default for VerificationCode {
    fn default() -> Self {
        Self::new()
    }
}
