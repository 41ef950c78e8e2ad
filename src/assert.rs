//! Assertion helpers that fail with a descriptive [`AssertionError`].
//!
//! [`assert`] is the only place a failure is produced. Every other assertion
//! computes its predicate, builds a default message when the caller passes
//! `None`, and delegates to it.
//!
//! ```rust
//! use testassure::{assert_equals, assert_range, AssertionError};
//!
//! fn check() -> Result<(), AssertionError> {
//!     assert_range(5, 1, 10, None)?;
//!     assert_equals("abc".len(), 3, Some("length mismatch"))?;
//!     Ok(())
//! }
//! assert!(check().is_ok());
//! ```

use crate::config::DEFAULT_ASSERTION_MESSAGE;
use crate::error::{AssertResult, AssertionError};
use crate::truthy::Truthy;
use crate::type_tag::TypeOf;
use std::any::{type_name, Any};
use std::error::Error;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

/// Fails with `message` (default `"Assertion failed"`) unless `condition` holds.
pub fn assert(condition: bool, message: Option<&str>) -> AssertResult {
    if condition {
        Ok(())
    } else {
        Err(AssertionError::new(message.unwrap_or(DEFAULT_ASSERTION_MESSAGE)))
    }
}

/// Delegates to [`assert`] with the caller's message, or the lazily built default.
/// An empty message counts as no message.
fn assert_with(
    condition: bool,
    message: Option<&str>,
    default: impl FnOnce() -> String,
) -> AssertResult {
    match message.filter(|message| !message.is_empty()) {
        Some(message) => assert(condition, Some(message)),
        None if condition => Ok(()),
        None => assert(false, Some(&default())),
    }
}

/// Fails unless the type tag of `value` is named `expected_type`.
///
/// Names are those of [`TypeTag`](crate::TypeTag): `"boolean"`, `"number"`,
/// `"bigint"`, `"string"`, `"symbol"`, `"function"`, `"object"`, `"undefined"`.
pub fn assert_type<V: TypeOf + ?Sized>(
    value: &V,
    expected_type: &str,
    message: Option<&str>,
) -> AssertResult {
    let actual = value.type_tag();
    assert_with(actual.as_str() == expected_type, message, || {
        format!("Expected {expected_type} but received {actual}")
    })
}

/// Fails unless `min <= value <= max`.
///
/// An inverted range matches nothing and always fails.
pub fn assert_range<T: PartialOrd + Debug>(
    value: T,
    min: T,
    max: T,
    message: Option<&str>,
) -> AssertResult {
    assert_with(value >= min && value <= max, message, || {
        format!("Value {value:?} is not within the range [{min:?}, {max:?}]")
    })
}

/// Fails unless `value` is truthy. See [`Truthy`] for the coercion table.
pub fn assert_truthy<V: Truthy + Debug + ?Sized>(
    value: &V,
    message: Option<&str>,
) -> AssertResult {
    assert_with(value.is_truthy(), message, || {
        format!("Value {value:?} is not truthy")
    })
}

/// Fails unless `value` is falsy.
pub fn assert_falsey<V: Truthy + Debug + ?Sized>(
    value: &V,
    message: Option<&str>,
) -> AssertResult {
    assert_with(!value.is_truthy(), message, || {
        format!("Value {value:?} is not falsy")
    })
}

/// Fails unless `actual == expected`.
pub fn assert_equals<A, E>(actual: A, expected: E, message: Option<&str>) -> AssertResult
where
    A: PartialEq<E> + Debug,
    E: Debug,
{
    assert_with(actual == expected, message, || {
        format!("Expected {expected:?}, but received {actual:?}")
    })
}

/// Fails if `actual == unexpected`.
pub fn assert_not_equals<A, U>(actual: A, unexpected: U, message: Option<&str>) -> AssertResult
where
    A: PartialEq<U> + Debug,
    U: Debug,
{
    assert_with(actual != unexpected, message, || {
        format!("Did not expect {unexpected:?}, but received {actual:?}")
    })
}

/// Fails unless the concrete type behind `value` is `T`.
///
/// Pass the value itself (`&value`) or the contents of a box (`&*boxed`);
/// `&boxed` would check the `Box` type instead.
pub fn assert_instance_of<T: Any>(value: &dyn Any, message: Option<&str>) -> AssertResult {
    assert_with(value.is::<T>(), message, || {
        format!(
            "Expected instance of {}, but received a value of another type",
            type_name::<T>()
        )
    })
}

/// Calls `func` once and fails unless it returns an error that is an `E`.
///
/// The error matches when it, or any error in its `source()` chain, is an `E`,
/// so wrapped errors count as instances of what they wrap. A panic inside
/// `func` is caught and reported as a failure, never as a match.
pub fn assert_throws<E, F, R, X>(func: F, message: Option<&str>) -> AssertResult
where
    E: Error + 'static,
    F: FnOnce() -> Result<R, X>,
    X: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    let expected = type_name::<E>();
    match panic::catch_unwind(AssertUnwindSafe(func)) {
        Err(payload) => assert_with(false, message, || {
            format!(
                "Expected {expected}, but the function panicked: {}",
                panic_message(payload.as_ref())
            )
        }),
        Ok(Ok(_)) => assert_with(false, message, || {
            format!("Expected {expected}, but no error was thrown")
        }),
        Ok(Err(err)) => {
            let err: Box<dyn Error + Send + Sync + 'static> = err.into();
            assert_with(is_error_of::<E>(&*err), message, || {
                format!("Expected {expected}, but received {err}")
            })
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "<non-string panic payload>"
    }
}

fn is_error_of<E: Error + 'static>(err: &(dyn Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(err) = current {
        if err.is::<E>() {
            return true;
        }
        current = err.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_default_message() {
        let err = assert(false, None).unwrap_err();
        assert_eq!(err.message, "Assertion failed");
    }

    #[test]
    fn test_custom_message_overrides_default() {
        let err = assert_range(11, 1, 10, Some("out of bounds")).unwrap_err();
        assert_eq!(err.message, "out of bounds");
    }

    #[test]
    fn test_default_messages_render_values() {
        assert_eq!(
            assert_range(0, 1, 10, None).unwrap_err().message,
            "Value 0 is not within the range [1, 10]"
        );
        assert_eq!(
            assert_type(&1.5f64, "string", None).unwrap_err().message,
            "Expected string but received number"
        );
        assert_eq!(
            assert_equals(4, 3, None).unwrap_err().message,
            "Expected 3, but received 4"
        );
        assert_eq!(
            assert_not_equals("a", "a", None).unwrap_err().message,
            "Did not expect \"a\", but received \"a\""
        );
        assert_eq!(
            assert_truthy(&0, None).unwrap_err().message,
            "Value 0 is not truthy"
        );
        assert_eq!(
            assert_falsey("x", None).unwrap_err().message,
            "Value \"x\" is not falsy"
        );
    }

    #[test]
    fn test_empty_message_falls_back_to_default() {
        assert_eq!(
            assert_truthy(&0, Some("")).unwrap_err().message,
            "Value 0 is not truthy"
        );
        assert_eq!(assert(false, Some("")).unwrap_err().message, "");
    }

    #[test]
    fn test_panic_message_extracts_str_and_string() {
        let literal: Box<dyn Any + Send> = Box::new("static");
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
        let other: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(literal.as_ref()), "static");
        assert_eq!(panic_message(owned.as_ref()), "owned");
        assert_eq!(panic_message(other.as_ref()), "<non-string panic payload>");
    }

    #[test]
    fn test_is_error_of_walks_source_chain() {
        #[derive(Debug, thiserror::Error)]
        #[error("inner")]
        struct Inner;

        #[derive(Debug, thiserror::Error)]
        #[error("outer")]
        struct Outer(#[source] Inner);

        let outer = Outer(Inner);
        assert!(is_error_of::<Inner>(&outer));
        assert!(is_error_of::<Outer>(&outer));
        assert!(!is_error_of::<std::fmt::Error>(&outer));
    }
}
