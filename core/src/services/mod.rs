//! Business services containing domain logic and use cases.

pub mod auth;
pub mod password;
pub mod registration;
pub mod session;
pub mod verification;

// Re-export commonly used types
pub use auth::AuthService;
pub use registration::{
    AvatarStoreTrait, EmailServiceTrait, NewSignup, RegistrationService,
    RegistrationServiceConfig,
};
pub use session::{SessionService, SessionServiceConfig};
pub use verification::VerificationService;
