//! Request and response bodies for the account endpoints
//!
//! Every request type runs one validation pass that collects all missing
//! and malformed fields before the handler touches a service. An absent
//! field and a blank field report the same way, with the shared
//! missing-field message, so `has_missing_fields` can pick the
//! "All fields are required" response message.

use actix_multipart::form::bytes::Bytes;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use vb_core::domain::entities::account::Gender;
use vb_core::services::registration::NewSignup;
use vb_shared::validation::validators;
use vb_shared::validation::{missing_field_message, ValidationErrors};

/// Multipart signup submission
///
/// Field names mirror the client form, so the camel-cased parts are
/// renamed onto snake-cased fields. All parts are optional at extraction
/// time; presence is enforced by [`SignupForm::into_new_signup`].
#[derive(Debug, MultipartForm)]
pub struct SignupForm {
    #[multipart(rename = "firstName")]
    pub first_name: Option<Text<String>>,

    #[multipart(rename = "lastName")]
    pub last_name: Option<Text<String>>,

    pub dob: Option<Text<String>>,

    pub gender: Option<Text<String>>,

    pub username: Option<Text<String>>,

    pub mobileno: Option<Text<String>>,

    pub email: Option<Text<String>>,

    pub password: Option<Text<String>>,

    #[multipart(rename = "verifyUrl")]
    pub verify_url: Option<Text<String>>,

    /// Avatar image file part
    #[multipart(limit = "5MB")]
    pub avatar: Option<Bytes>,
}

impl SignupForm {
    /// Validate the whole form and convert it into the service input
    ///
    /// # Returns
    ///
    /// * `Ok(NewSignup)` - All fields present and well-formed
    /// * `Err(ValidationErrors)` - Every missing or malformed field,
    ///   collected in one pass
    pub fn into_new_signup(self) -> Result<NewSignup, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let first_name = require_text("firstName", self.first_name, &mut errors);
        let last_name = require_text("lastName", self.last_name, &mut errors);
        let dob = require_text("dob", self.dob, &mut errors);
        let gender_raw = require_text("gender", self.gender, &mut errors);
        let username = require_text("username", self.username, &mut errors);
        let mobile_number = require_text("mobileno", self.mobileno, &mut errors);
        let email = require_text("email", self.email, &mut errors);
        let verify_url = require_text("verifyUrl", self.verify_url, &mut errors);

        // Passwords are taken exactly as submitted, whitespace included
        let password = match self.password {
            Some(text) if !text.trim().is_empty() => text.into_inner(),
            _ => {
                errors.add_error("password", missing_field_message());
                String::new()
            }
        };

        if !first_name.is_empty() && !validators::is_valid_name(&first_name) {
            errors.add_error("firstName", "First name must be 3-20 characters");
        }
        if !last_name.is_empty() && !validators::is_valid_name(&last_name) {
            errors.add_error("lastName", "Last name must be 3-20 characters");
        }
        if !username.is_empty() && !validators::is_valid_username(&username) {
            errors.add_error(
                "username",
                "Username must be 3-20 characters of letters, numbers or underscores",
            );
        }
        if !mobile_number.is_empty() && !validators::is_valid_mobile_number(&mobile_number) {
            errors.add_error("mobileno", "Mobile number must be 10 digits");
        }
        if !email.is_empty() && !validators::is_valid_email(&email) {
            errors.add_error("email", "Invalid email address");
        }
        if !password.is_empty() && !validators::is_valid_password(&password) {
            errors.add_error("password", "Password must be 8-50 characters");
        }
        if !verify_url.is_empty() && !validators::is_valid_url(&verify_url) {
            errors.add_error("verifyUrl", "Verify URL must be an absolute http or https URL");
        }

        let date_of_birth = match dob.as_str() {
            "" => None,
            value => match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.add_error("dob", "Date of birth must be a valid date (YYYY-MM-DD)");
                    None
                }
            },
        };

        let gender = match gender_raw.as_str() {
            "" => None,
            value => match value.parse::<Gender>() {
                Ok(gender) => Some(gender),
                Err(_) => {
                    errors.add_error("gender", "Gender must be male, female or other");
                    None
                }
            },
        };

        let avatar = match self.avatar {
            Some(file) if !file.data.is_empty() => Some(file.data.to_vec()),
            _ => {
                errors.add_error("avatar", missing_field_message());
                None
            }
        };

        match (date_of_birth, gender, avatar) {
            (Some(date_of_birth), Some(gender), Some(avatar)) if errors.is_empty() => {
                Ok(NewSignup {
                    first_name,
                    last_name,
                    username,
                    email,
                    date_of_birth,
                    gender,
                    mobile_number,
                    password,
                    avatar,
                    verify_url,
                })
            }
            _ => Err(errors),
        }
    }
}

/// JSON body for `POST /api/users/signin`
#[derive(Debug, Clone, Deserialize)]
pub struct SigninRequest {
    /// Email address or ten-digit mobile number
    pub identifier: Option<String>,
    pub password: Option<String>,
}

impl SigninRequest {
    /// Validate both fields, returning `(identifier, password)` when present
    pub fn validate_fields(&self) -> Result<(String, String), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let identifier = required_field("identifier", &self.identifier, &mut errors);

        // The password keeps its whitespace; only blank counts as missing
        let password = match self.password.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Some(raw.to_string()),
            _ => {
                errors.add_error("password", missing_field_message());
                None
            }
        };

        match (identifier, password) {
            (Some(identifier), Some(password)) if errors.is_empty() => Ok((identifier, password)),
            _ => Err(errors),
        }
    }
}

/// JSON body for `POST /api/users/verify`
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyRequest {
    pub username: Option<String>,
    pub code: Option<String>,
}

impl VerifyRequest {
    /// Validate both fields, returning `(username, code)` when well-formed
    pub fn validate_fields(&self) -> Result<(String, String), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let username = required_field("username", &self.username, &mut errors);
        let code = required_field("code", &self.code, &mut errors);

        if let Some(value) = &code {
            if !validators::is_valid_verification_code(value) {
                errors.add_error("code", "Verification code must be 6 digits");
            }
        }

        match (username, code) {
            (Some(username), Some(code)) if errors.is_empty() => Ok((username, code)),
            _ => Err(errors),
        }
    }
}

/// Success body for signin, extending the envelope with the account id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Record a missing-field error when a text part is absent or blank
///
/// Returns the trimmed value, or an empty string after recording the error
/// so the later format checks can skip the field.
fn require_text(field: &str, value: Option<Text<String>>, errors: &mut ValidationErrors) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => {
            errors.add_error(field, missing_field_message());
            String::new()
        }
    }
}

/// Record a missing-field error when a JSON field is absent or blank
fn required_field(
    field: &str,
    value: &Option<String>,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match value.as_deref().map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Some(trimmed.to_string()),
        _ => {
            errors.add_error(field, missing_field_message());
            None
        }
    }
}
