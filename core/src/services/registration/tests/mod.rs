//! Tests for the registration service

#[cfg(test)]
mod mocks;
