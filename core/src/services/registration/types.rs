//! Input types for the registration service

use chrono::NaiveDate;

use crate::domain::entities::account::Gender;

/// A validated signup submission
///
/// Field formats are already checked at the gateway; the service still
/// normalizes identity fields (trimming, lowercasing email and username)
/// before touching the repository.
#[derive(Debug, Clone)]
pub struct NewSignup {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub mobile_number: String,
    pub password: String,
    /// Raw bytes of the uploaded avatar image
    pub avatar: Vec<u8>,
    /// Absolute URL of the verification page, embedded in the email
    pub verify_url: String,
}
