//! Domain entities representing core business objects.

pub mod account;
pub mod session;
pub mod verification_code;

// Re-export commonly used types
pub use account::{Account, AccountProfile, Gender, VerificationStatus};
pub use session::{Claims, JWT_AUDIENCE, JWT_ISSUER, SESSION_TOKEN_EXPIRY_DAYS};
pub use verification_code::{VerificationCode, CODE_LENGTH, EXPIRATION_MINUTES};
