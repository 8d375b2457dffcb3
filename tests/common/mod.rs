//! Common test utilities and helpers
//!
//! Shared fixtures for the integration tests.

#![allow(dead_code)]

pub mod test_fixtures;
