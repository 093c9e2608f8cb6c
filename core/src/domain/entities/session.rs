//! Session claims carried inside the stateless JWT cookie.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How long an issued session stays valid
pub const SESSION_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Issuer claim stamped into every token
pub const JWT_ISSUER: &str = "vibebox";

/// Audience claim stamped into every token
pub const JWT_AUDIENCE: &str = "vibebox-client";

/// Claims embedded in a session token
///
/// The token is the whole session: no server-side session row exists, so
/// everything needed to authenticate a later request travels in here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the account identifier
    pub sub: String,

    /// Issued-at time as a Unix timestamp
    pub iat: i64,

    /// Expiration time as a Unix timestamp
    pub exp: i64,

    /// Not-before time as a Unix timestamp
    pub nbf: i64,

    /// Token issuer
    pub iss: String,

    /// Intended audience
    pub aud: String,

    /// Unique token identifier
    pub jti: String,
}

impl Claims {
    /// Builds claims for a freshly issued session
    ///
    /// # Arguments
    /// * `account_id` - The authenticated account
    /// * `validity_seconds` - Lifetime of the token in seconds
    pub fn new(account_id: Uuid, validity_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(validity_seconds);

        Self {
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Parses the subject back into an account identifier
    pub fn account_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Whether the expiration time has passed
    pub fn is_expired(&self) -> bool {
        self.exp < Utc::now().timestamp()
    }
}
