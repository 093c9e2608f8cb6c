//! Account entity representing a registered VibeBox user.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::types::VerificationError;

/// Gender of an account holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Returns the lowercase wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!("Invalid gender: {}", s)),
        }
    }
}

/// Verification state of an account
///
/// An unverified account always carries its pending code and expiry together;
/// a verified account carries neither. Modeling the pair inside the variant
/// keeps the two fields from drifting apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum VerificationStatus {
    /// Awaiting email confirmation with an outstanding code
    Pending(VerificationCode),
    /// Email ownership proven; terminal state
    Verified,
}

impl VerificationStatus {
    /// Whether the account has completed verification
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationStatus::Verified)
    }

    /// The outstanding code, if any
    pub fn pending_code(&self) -> Option<&VerificationCode> {
        match self {
            VerificationStatus::Pending(code) => Some(code),
            VerificationStatus::Verified => None,
        }
    }
}

/// Profile, identity, and credential fields submitted at signup
///
/// Bundled so the create and overwrite paths take the same payload. Identity
/// fields are expected to be normalized (trimmed, email and username
/// lowercased) before construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountProfile {
    pub email: String,
    pub mobile_number: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub avatar_url: String,
    pub password_hash: String,
}

/// Account entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Email address, unique, stored lowercase
    pub email: String,

    /// Mobile number, unique
    pub mobile_number: String,

    /// Username, unique, stored lowercase
    pub username: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Date of birth
    pub date_of_birth: NaiveDate,

    /// Gender
    pub gender: Gender,

    /// URL of the uploaded avatar in the media store
    pub avatar_url: String,

    /// Bcrypt hash of the password; never plaintext
    pub password_hash: String,

    /// Verification state with any outstanding code
    pub verification: VerificationStatus,

    /// Optimistic-concurrency version, bumped by the repository on update
    pub version: i64,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new unverified account from a signup submission
    pub fn new(profile: AccountProfile, code: VerificationCode) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: profile.email,
            mobile_number: profile.mobile_number,
            username: profile.username,
            first_name: profile.first_name,
            last_name: profile.last_name,
            date_of_birth: profile.date_of_birth,
            gender: profile.gender,
            avatar_url: profile.avatar_url,
            password_hash: profile.password_hash,
            verification: VerificationStatus::Pending(code),
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Display name combining first and last name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether the account has completed verification
    pub fn is_verified(&self) -> bool {
        self.verification.is_verified()
    }

    /// The outstanding verification code, if any
    pub fn pending_code(&self) -> Option<&VerificationCode> {
        self.verification.pending_code()
    }

    /// Replaces every submitted field on a repeat signup attempt
    ///
    /// The record keeps its identity (`id`, `created_at`, `version`); the
    /// account returns to `Pending` with the fresh code so the new submission
    /// must be verified like a first one.
    pub fn overwrite_with(&mut self, profile: AccountProfile, code: VerificationCode) {
        self.email = profile.email;
        self.mobile_number = profile.mobile_number;
        self.username = profile.username;
        self.first_name = profile.first_name;
        self.last_name = profile.last_name;
        self.date_of_birth = profile.date_of_birth;
        self.gender = profile.gender;
        self.avatar_url = profile.avatar_url;
        self.password_hash = profile.password_hash;
        self.verification = VerificationStatus::Pending(code);
        self.updated_at = Utc::now();
    }

    /// Attempts the unverified-to-verified transition
    ///
    /// Failure order: an already verified account is rejected first, then a
    /// code mismatch, then expiry. Mismatch is checked before expiry, so an
    /// incorrect code on an expired record still reports `InvalidCode`.
    /// On success the state becomes `Verified` and the code is cleared.
    pub fn confirm_verification(&mut self, submitted_code: &str) -> Result<(), VerificationError> {
        let pending = match &self.verification {
            VerificationStatus::Verified => return Err(VerificationError::AlreadyVerified),
            VerificationStatus::Pending(code) => code,
        };

        if !pending.matches(submitted_code) {
            return Err(VerificationError::InvalidCode);
        }

        if pending.is_expired() {
            return Err(VerificationError::CodeExpired);
        }

        self.verification = VerificationStatus::Verified;
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration as StdDuration;

    fn sample_profile() -> AccountProfile {
        AccountProfile {
            email: "a@x.com".to_string(),
            mobile_number: "1112223333".to_string(),
            username: "alice".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Nguyen".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1999, 4, 21).unwrap(),
            gender: Gender::Female,
            avatar_url: "https://cdn.example.com/avatars/alice.png".to_string(),
            password_hash: "$2b$10$abcdefghijklmnopqrstuv".to_string(),
        }
    }

    #[test]
    fn test_new_account_starts_unverified() {
        let account = Account::new(sample_profile(), VerificationCode::new());

        assert!(!account.is_verified());
        assert!(account.pending_code().is_some());
        assert_eq!(account.version, 0);
        assert_eq!(account.email, "a@x.com");
        assert_eq!(account.full_name(), "Alice Nguyen");
    }

    #[test]
    fn test_overwrite_keeps_identity() {
        let mut account = Account::new(sample_profile(), VerificationCode::new());
        let original_id = account.id;
        let original_created = account.created_at;
        let original_code = account.pending_code().unwrap().code.clone();

        let mut profile = sample_profile();
        profile.username = "alice_two".to_string();
        profile.mobile_number = "9998887777".to_string();
        let fresh = VerificationCode::new();
        let fresh_code = fresh.code.clone();
        account.overwrite_with(profile, fresh);

        assert_eq!(account.id, original_id);
        assert_eq!(account.created_at, original_created);
        assert_eq!(account.username, "alice_two");
        assert_eq!(account.mobile_number, "9998887777");
        assert!(!account.is_verified());
        let new_code = &account.pending_code().unwrap().code;
        assert_eq!(new_code, &fresh_code);
        // A colliding fresh code is possible but vanishingly unlikely
        if original_code != fresh_code {
            assert_ne!(new_code, &original_code);
        }
    }

    #[test]
    fn test_confirm_verification_success() {
        let mut account = Account::new(sample_profile(), VerificationCode::new());
        let code = account.pending_code().unwrap().code.clone();

        assert!(account.confirm_verification(&code).is_ok());
        assert!(account.is_verified());
        assert!(account.pending_code().is_none());
    }

    #[test]
    fn test_confirm_verification_rejects_second_attempt() {
        let mut account = Account::new(sample_profile(), VerificationCode::new());
        let code = account.pending_code().unwrap().code.clone();

        account.confirm_verification(&code).unwrap();
        let result = account.confirm_verification(&code);

        assert_eq!(result, Err(VerificationError::AlreadyVerified));
        assert!(account.is_verified());
    }

    #[test]
    fn test_confirm_verification_rejects_wrong_code() {
        let mut account = Account::new(sample_profile(), VerificationCode::new());

        let result = account.confirm_verification("000000");

        assert_eq!(result, Err(VerificationError::InvalidCode));
        assert!(!account.is_verified());
        assert!(account.pending_code().is_some());
    }

    #[test]
    fn test_confirm_verification_rejects_expired_code() {
        let mut account = Account::new(
            sample_profile(),
            VerificationCode::new_with_expiration(0),
        );
        let code = account.pending_code().unwrap().code.clone();

        thread::sleep(StdDuration::from_millis(10));
        let result = account.confirm_verification(&code);

        assert_eq!(result, Err(VerificationError::CodeExpired));
        assert!(!account.is_verified());
    }

    #[test]
    fn test_mismatch_reported_before_expiry() {
        let mut account = Account::new(
            sample_profile(),
            VerificationCode::new_with_expiration(0),
        );

        thread::sleep(StdDuration::from_millis(10));
        let result = account.confirm_verification("000000");

        assert_eq!(result, Err(VerificationError::InvalidCode));
    }

    #[test]
    fn test_gender_parsing_and_serialization() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("FEMALE".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("Other".parse::<Gender>().unwrap(), Gender::Other);
        assert!("custom".parse::<Gender>().is_err());

        let json = serde_json::to_string(&Gender::Male).unwrap();
        assert_eq!(json, "\"male\"");
    }

    #[test]
    fn test_account_serialization_round_trip() {
        let account = Account::new(sample_profile(), VerificationCode::new());

        let json = serde_json::to_string(&account).unwrap();
        let deserialized: Account = serde_json::from_str(&json).unwrap();

        assert_eq!(account, deserialized);
    }
}
