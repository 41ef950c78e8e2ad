//! testassure: small conveniences for writing Rust tests
//!
//! This library bundles three independent toolkits: assertion helpers that fail
//! with a descriptive error, seeded random generators for test fixtures, and
//! canned behaviors for stand-in dependencies.
//!
//! ## Main Components
//!
//! - [`mod@assert`]: Assertions returning `Result<(), AssertionError>`
//! - [`truthy`]: Explicit truthiness table behind `assert_truthy` / `assert_falsey`
//! - [`type_tag`]: Closed type-tag model behind `assert_type`
//! - [`generate`]: Random fixture values over a seeded `StdRng`
//! - [`mock`]: Stub closures and ready futures for `mockall` expectations
//! - [`config`]: Centralized constants and the seed override
//!
//! ## Error Handling
//!
//! Assertions never panic. Each returns `Result<(), AssertionError>`, so a test
//! that returns the same type fails with the assertion's message when `?`
//! propagates it:
//!
//! - `assert()` and friends return [`AssertResult`]
//! - generators that take a range return `Result<T, DataError>`
//!
//! ## Quick Start
//!
//! ```rust
//! use testassure::{assert_equals, assert_throws, assert_truthy};
//! use testassure::{AssertionError, FixtureRng};
//!
//! fn parse_port(raw: &str) -> Result<u16, std::num::ParseIntError> {
//!     raw.parse()
//! }
//!
//! fn port_checks() -> Result<(), AssertionError> {
//!     let mut rng = FixtureRng::seeded(42);
//!     let port = rng.integer(1024, 65535).unwrap_or(8080);
//!
//!     assert_equals(parse_port(&port.to_string()).ok(), Some(port as u16), None)?;
//!     assert_throws::<std::num::ParseIntError, _, _, _>(|| parse_port("http"), None)?;
//!     assert_truthy(&port, Some("port must be non-zero"))?;
//!     Ok(())
//! }
//!
//! assert!(port_checks().is_ok());
//! ```
//!
//! ### Reproducing generated fixtures
//!
//! Every [`FixtureRng`] logs its seed at `debug` level. Export
//! `TESTASSURE_SEED=<seed>` to make [`FixtureRng::from_env`] and the free
//! `generate_random_*` functions replay the same values.

pub mod assert;
pub mod config;
pub mod error;
pub mod generate;
pub mod mock;
pub mod truthy;
pub mod type_tag;

// Re-export commonly used types and functions for convenience
pub use assert::{
    assert, assert_equals, assert_falsey, assert_instance_of, assert_not_equals, assert_range,
    assert_throws, assert_truthy, assert_type,
};
pub use error::{AssertResult, AssertionError, DataError, Result};
pub use generate::{
    generate_random_array, generate_random_boolean, generate_random_date,
    generate_random_element, generate_random_float, generate_random_integer,
    generate_random_number, generate_random_string, FixtureRng,
};
pub use mock::{
    mock, mock_any, mock_object, mock_rejected, mock_resolved, mock_throw_error,
    mock_with_conditions,
};
pub use truthy::Truthy;
pub use type_tag::{TypeOf, TypeTag, UnknownTypeTag};
