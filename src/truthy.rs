//! Truthiness coercion used by `assert_truthy` and `assert_falsey`.
//!
//! | type                          | truthy when                 |
//! |-------------------------------|-----------------------------|
//! | `bool`                        | `true`                      |
//! | integers                      | non-zero                    |
//! | `f32`, `f64`                  | non-zero and not NaN        |
//! | `char`                        | always                      |
//! | `str`, `String`               | non-empty                   |
//! | `Option<T>`                   | `Some`                      |
//! | `()`                          | never                       |
//! | `Vec<T>`, slices, maps        | always                      |
//! | `serde_json::Value`           | `Null` never, arrays and objects always, scalars as above |

use num_traits::Zero;
use std::collections::{BTreeMap, HashMap};

/// Coercion of a value to a boolean for conditional purposes.
pub trait Truthy {
    /// Whether the value counts as true.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_integer {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    !self.is_zero()
                }
            }
        )*
    };
}

impl_truthy_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_float {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    !self.is_zero() && !self.is_nan()
                }
            }
        )*
    };
}

impl_truthy_float!(f32, f64);

impl Truthy for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<K, V, S> Truthy for HashMap<K, V, S> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<K, V> Truthy for BTreeMap<K, V> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for serde_json::Value {
    fn is_truthy(&self) -> bool {
        use serde_json::Value;

        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map_or(true, |f| f.is_truthy()),
            Value::String(s) => s.is_truthy(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
