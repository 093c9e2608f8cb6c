//! Tests for the mock account repository
