//! Account repository module
//!
//! Provides the repository trait for account persistence and a mock
//! implementation for testing.

#[path = "trait.rs"]
mod trait_;

mod mock;

pub use mock::MockAccountRepository;
pub use trait_::AccountRepository;

#[cfg(test)]
mod tests;
