//! Error types for the testassure library

/// A failed assertion.
///
/// `Display` prints the message and nothing else, so a test returning
/// `Result<(), AssertionError>` reports exactly the text the assertion built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AssertionError {
    /// Caller-supplied or default failure message
    pub message: String,
}

impl AssertionError {
    /// Creates an assertion error carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error types for fixture generation and configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    /// Lower bound above upper bound, or a bound that cannot be sampled
    #[error("Invalid range: [{min}, {max}] contains no values")]
    InvalidRange { min: String, max: String },

    /// Seed override could not be parsed
    #[error("Invalid seed: {0} (expected an unsigned 64-bit integer)")]
    InvalidSeed(String),
}

impl DataError {
    pub(crate) fn invalid_range(min: impl std::fmt::Display, max: impl std::fmt::Display) -> Self {
        Self::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

/// Convenience Result type for assertions
pub type AssertResult = std::result::Result<(), AssertionError>;

/// Convenience Result type for fixture generation
pub type Result<T> = std::result::Result<T, DataError>;
