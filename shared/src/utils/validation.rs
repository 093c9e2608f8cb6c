//! Common validation utilities
//!
//! Field rules live here so the gateway and tests agree on one source:
//! names 3-20 characters, usernames 3-20 from `[a-zA-Z0-9_]`, mobile
//! numbers exactly 10 digits, passwords 8-50 characters, verification
//! codes exactly 6 digits.

use serde::Serialize;
use std::collections::HashMap;

/// Validation error with field-level details
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Collection of validation errors aggregated over a full request
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.add(ValidationError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Whether any collected error reports a missing field
    pub fn has_missing_fields(&self) -> bool {
        self.errors.iter().any(|e| e.message == missing_field_message())
    }

    pub fn to_field_errors(&self) -> HashMap<String, Vec<String>> {
        let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
        for error in &self.errors {
            field_errors
                .entry(error.field.clone())
                .or_default()
                .push(error.message.clone());
        }
        field_errors
    }
}

/// Message used for every absent required field
pub fn missing_field_message() -> String {
    String::from("This field is required")
}

/// Common validation functions
pub mod validators {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static USERNAME_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]{3,20}$").unwrap());

    static EMAIL_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

    static MOBILE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

    static CODE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").unwrap());

    /// Check if a string is not empty after trimming
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length is within bounds (inclusive)
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        len >= min && len <= max
    }

    /// Check if a personal name is 3-20 characters
    pub fn is_valid_name(value: &str) -> bool {
        length_between(value.trim(), 3, 20)
    }

    /// Check if a username is 3-20 characters of letters, digits, underscores
    pub fn is_valid_username(value: &str) -> bool {
        USERNAME_PATTERN.is_match(value.trim())
    }

    /// Check if an email address is syntactically valid
    pub fn is_valid_email(value: &str) -> bool {
        EMAIL_PATTERN.is_match(value.trim())
    }

    /// Check if a mobile number is exactly 10 digits
    pub fn is_valid_mobile_number(value: &str) -> bool {
        MOBILE_PATTERN.is_match(value.trim())
    }

    /// Check if a password is 8-50 characters
    pub fn is_valid_password(value: &str) -> bool {
        length_between(value, 8, 50)
    }

    /// Check if a verification code is exactly 6 digits
    pub fn is_valid_verification_code(value: &str) -> bool {
        CODE_PATTERN.is_match(value.trim())
    }

    /// Check if a date string parses as `YYYY-MM-DD`
    pub fn is_valid_date(value: &str) -> bool {
        chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").is_ok()
    }

    /// Check if a URL uses an http scheme
    pub fn is_valid_url(value: &str) -> bool {
        value.starts_with("http://") || value.starts_with("https://")
    }
}
