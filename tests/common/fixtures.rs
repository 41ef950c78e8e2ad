//! Test fixtures shared by the integration tests.
//!
//! The error types mirror a small hierarchy: `ValidationError` wraps a
//! `RangeError` as its source, so checks that walk the source chain can be
//! exercised against a realistic wrapper.

#![allow(dead_code)]

use serde_json::{json, Value};
use testassure::{config::TEST_RANDOM_SEED, FixtureRng};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("value {value} out of range")]
pub struct RangeError {
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("wrong type: {0}")]
pub struct TypeError(pub String);

#[derive(Debug, thiserror::Error)]
#[error("validation failed")]
pub struct ValidationError {
    #[source]
    pub cause: RangeError,
}

/// Always fails with a `RangeError`.
pub fn throws_range_error() -> Result<(), RangeError> {
    Err(RangeError { value: -1 })
}

/// Always fails with a `TypeError`.
pub fn throws_type_error() -> Result<(), TypeError> {
    Err(TypeError("expected number".into()))
}

/// Never fails.
pub fn does_not_throw() -> Result<(), RangeError> {
    Ok(())
}

/// Deterministic generator used by tests that need reproducible data.
pub fn test_rng() -> FixtureRng {
    FixtureRng::seeded(TEST_RANDOM_SEED)
}

/// A spread of dynamic values covering every truthiness branch.
pub fn sample_values() -> Vec<Value> {
    vec![
        json!(null),
        json!(true),
        json!(false),
        json!(0),
        json!(-3),
        json!(0.0),
        json!(2.5),
        json!(""),
        json!("0"),
        json!("text"),
        json!([]),
        json!([0]),
        json!({}),
        json!({"k": null}),
    ]
}
