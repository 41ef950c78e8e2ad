//! Common test utilities and shared infrastructure.
//!
//! This module provides the shared fixtures used across the test suite:
//! - `fixtures`: error types, sample records and seeded generators

pub mod fixtures;
