//! Canned behaviors for stand-in dependencies.
//!
//! These build the closures and futures a stub needs; they plug straight into
//! `mockall` expectations (`.returning(mock(5))` for a method without
//! arguments, `.returning(mock_any(5))` for one taking a single argument) or into code that takes a
//! dependency as `impl Fn`. Call recording and verification stay with `mockall`.
//!
//! ```rust
//! use futures::executor::block_on;
//! use testassure::mock::{mock_rejected, mock_with_conditions};
//!
//! let lookup = mock_with_conditions(vec![("alice", 1), ("bob", 2)]);
//! assert_eq!(lookup(&"bob"), Some(2));
//! assert_eq!(lookup(&"carol"), None);
//!
//! let failed = block_on(mock_rejected::<u32, _>("offline"));
//! assert_eq!(failed, Err("offline"));
//! ```

use futures::future::{self, Ready};
use tracing::trace;

/// A function that ignores its call and returns a clone of `value`.
pub fn mock<T: Clone>(value: T) -> impl Fn() -> T {
    move || {
        trace!("mock called");
        value.clone()
    }
}

/// Like [`mock`], for a method that takes one argument: the argument is ignored.
///
/// Fits `returning(...)` on a mocked method with a single owned parameter.
pub fn mock_any<A, T: Clone>(value: T) -> impl Fn(A) -> T {
    move |_| {
        trace!("mock called");
        value.clone()
    }
}

/// `T::default()` with the fields set by `configure`, standing in for a
/// partially specified object.
pub fn mock_object<T: Default>(configure: impl FnOnce(&mut T)) -> T {
    let mut object = T::default();
    configure(&mut object);
    object
}

/// A future that is already resolved with `value`.
pub fn mock_resolved<T, E>(value: T) -> Ready<Result<T, E>> {
    future::ok(value)
}

/// A future that is already rejected with `error`.
pub fn mock_rejected<T, E>(error: E) -> Ready<Result<T, E>> {
    future::err(error)
}

/// A fallible function that always fails with a clone of `error`.
pub fn mock_throw_error<T, E: Clone>(error: E) -> impl Fn() -> Result<T, E> {
    move || {
        trace!("mock called, returning error");
        Err(error.clone())
    }
}

/// A function answering from `(input, output)` pairs.
///
/// The first pair whose input equals the argument wins; unmatched inputs give `None`.
pub fn mock_with_conditions<I, T>(conditions: Vec<(I, T)>) -> impl Fn(&I) -> Option<T>
where
    I: PartialEq,
    T: Clone,
{
    move |input: &I| {
        let found = conditions
            .iter()
            .find(|(candidate, _)| candidate == input)
            .map(|(_, output)| output.clone());
        trace!(matched = found.is_some(), "conditional mock called");
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_mock_returns_same_value_every_call() {
        let f = mock(String::from("fixed"));
        assert_eq!(f(), "fixed");
        assert_eq!(f(), "fixed");
    }

    #[test]
    fn test_mock_any_ignores_its_argument() {
        let f = mock_any::<u64, _>(9u8);
        assert_eq!(f(1), 9);
        assert_eq!(f(u64::MAX), 9);
    }

    #[test]
    fn test_mock_object_starts_from_default() {
        #[derive(Debug, Default, PartialEq)]
        struct User {
            name: String,
            age: u32,
            admin: bool,
        }

        let user = mock_object(|u: &mut User| u.name = "ada".into());
        assert_eq!(
            user,
            User {
                name: "ada".into(),
                age: 0,
                admin: false
            }
        );
    }

    #[test]
    fn test_futures_are_ready() {
        assert_eq!(block_on(mock_resolved::<_, ()>(7)), Ok(7));
        assert_eq!(block_on(mock_rejected::<(), _>("boom")), Err("boom"));
    }

    #[test]
    fn test_first_matching_condition_wins() {
        let f = mock_with_conditions(vec![(1, "one"), (1, "uno"), (2, "two")]);
        assert_eq!(f(&1), Some("one"));
        assert_eq!(f(&2), Some("two"));
        assert_eq!(f(&3), None);
    }

    #[test]
    fn test_throw_error_every_call() {
        let f = mock_throw_error::<u8, _>(String::from("denied"));
        assert_eq!(f(), Err("denied".to_string()));
        assert_eq!(f(), Err("denied".to_string()));
    }
}
