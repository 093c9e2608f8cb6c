//! Shared handler support for the HTTP layer

pub mod error;
