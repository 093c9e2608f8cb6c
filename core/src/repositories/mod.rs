//! Repository traits for data persistence abstraction

pub mod account;

pub use account::{AccountRepository, MockAccountRepository};
