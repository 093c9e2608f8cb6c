//! Value objects shared across domain services

pub mod outcomes;

pub use outcomes::{RegistrationOutcome, SigninOutcome};
