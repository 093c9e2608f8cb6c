//! Machine-readable error codes shared across the server
//!
//! The HTTP envelope carries human-readable messages only; these codes are
//! attached to server-side log lines so failures can be grepped and counted
//! without parsing message text.

/// Standard error codes grouped by concern
pub mod codes {
    // Validation errors
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const MISSING_FIELDS: &str = "MISSING_FIELDS";

    // Account and identifier errors
    pub const ACCOUNT_NOT_FOUND: &str = "ACCOUNT_NOT_FOUND";
    pub const EMAIL_TAKEN: &str = "EMAIL_TAKEN";
    pub const MOBILE_TAKEN: &str = "MOBILE_TAKEN";
    pub const USERNAME_TAKEN: &str = "USERNAME_TAKEN";
    pub const CONCURRENT_UPDATE: &str = "CONCURRENT_UPDATE";

    // Credential and session errors
    pub const INVALID_PASSWORD: &str = "INVALID_PASSWORD";
    pub const ACCOUNT_NOT_VERIFIED: &str = "ACCOUNT_NOT_VERIFIED";
    pub const SESSION_INVALID: &str = "SESSION_INVALID";
    pub const SESSION_EXPIRED: &str = "SESSION_EXPIRED";

    // Verification errors
    pub const ALREADY_VERIFIED: &str = "ALREADY_VERIFIED";
    pub const INVALID_CODE: &str = "INVALID_CODE";
    pub const CODE_EXPIRED: &str = "CODE_EXPIRED";

    // Dependency errors
    pub const AVATAR_UPLOAD_FAILED: &str = "AVATAR_UPLOAD_FAILED";
    pub const EMAIL_DISPATCH_FAILED: &str = "EMAIL_DISPATCH_FAILED";

    // Catch-all
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}
