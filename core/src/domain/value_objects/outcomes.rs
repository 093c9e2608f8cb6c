//! Results returned by the registration and signin services.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of a completed signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationOutcome {
    /// Identifier of the created or overwritten account
    pub account_id: Uuid,

    /// True when the signup replaced an existing unverified record
    pub overwrote_existing: bool,
}

impl RegistrationOutcome {
    /// Outcome for a brand-new account
    pub fn created(account_id: Uuid) -> Self {
        Self {
            account_id,
            overwrote_existing: false,
        }
    }

    /// Outcome for a repeat signup that replaced an unverified record
    pub fn overwritten(account_id: Uuid) -> Self {
        Self {
            account_id,
            overwrote_existing: true,
        }
    }
}

/// Result of a successful signin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigninOutcome {
    /// Identifier of the authenticated account
    pub account_id: Uuid,

    /// Signed session token for the cookie
    pub token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,
}

impl SigninOutcome {
    pub fn new(account_id: Uuid, token: String, expires_in: i64) -> Self {
        Self {
            account_id,
            token,
            expires_in,
        }
    }
}
