//! HTTP middleware for the API layer

pub mod cors;
pub mod session_guard;
