//! Verification service module for the email code workflow
//!
//! Applies the submitted six-digit code to the account it was issued for
//! and persists the unverified-to-verified transition.

mod service;

#[cfg(test)]
mod tests;

pub use service::VerificationService;
