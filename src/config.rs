//! Centralized configuration for testassure.
//!
//! This module contains constants and default parameters used throughout the
//! library, plus the environment override for the fixture seed.

use crate::error::DataError;
use once_cell::sync::Lazy;

// --- Assertion Defaults ---

/// Message carried by a failed `assert` when the caller supplies none.
pub const DEFAULT_ASSERTION_MESSAGE: &str = "Assertion failed";

// --- Fixture Generation Parameters ---

/// Environment variable that pins the seed of every environment-driven `FixtureRng`.
/// Set it to the seed logged by a failing run to reproduce its fixtures.
pub const SEED_ENV_VAR: &str = "TESTASSURE_SEED";

/// Length of generated strings when the CLI is not told otherwise.
pub const DEFAULT_STRING_LENGTH: usize = 16;

/// Number of values the CLI generates per invocation by default.
pub const DEFAULT_COUNT: usize = 1;

// --- Test-related Constants ---

/// A fixed random seed used in tests to ensure deterministic behavior.
pub const TEST_RANDOM_SEED: u64 = 42;

static ENV_SEED: Lazy<Result<Option<u64>, DataError>> =
    Lazy::new(|| match std::env::var(SEED_ENV_VAR) {
        Ok(raw) => parse_seed(&raw).map(Some),
        Err(_) => Ok(None),
    });

/// Parse a seed override. Surrounding whitespace is ignored.
pub fn parse_seed(raw: &str) -> Result<u64, DataError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u64>()
        .map_err(|_| DataError::InvalidSeed(trimmed.to_string()))
}

/// Seed pinned through [`SEED_ENV_VAR`], read once per process.
///
/// Returns `Ok(None)` when the variable is unset.
pub fn env_seed() -> Result<Option<u64>, DataError> {
    ENV_SEED.clone()
}
