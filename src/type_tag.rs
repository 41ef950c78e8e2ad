//! Closed type-tag model used by `assert_type`.
//!
//! Values report their tag through [`TypeOf`]; tags are compared by name, so an
//! unrecognized expected name is not an error, it just never matches.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// Runtime type tag of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Boolean,
    Number,
    /// Integers wider than 64 bits
    BigInt,
    String,
    Symbol,
    Function,
    Object,
    /// Absent value
    Undefined,
}

impl TypeTag {
    /// Every tag, in declaration order
    pub const ALL: [TypeTag; 8] = [
        TypeTag::Boolean,
        TypeTag::Number,
        TypeTag::BigInt,
        TypeTag::String,
        TypeTag::Symbol,
        TypeTag::Function,
        TypeTag::Object,
        TypeTag::Undefined,
    ];

    /// Lowercase name compared by `assert_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::BigInt => "bigint",
            TypeTag::String => "string",
            TypeTag::Symbol => "symbol",
            TypeTag::Function => "function",
            TypeTag::Object => "object",
            TypeTag::Undefined => "undefined",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name is not one of the [`TypeTag`] names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown type tag: {0}")]
pub struct UnknownTypeTag(pub String);

impl FromStr for TypeTag {
    type Err = UnknownTypeTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownTypeTag(s.to_string()))
    }
}

/// Reports the [`TypeTag`] of a value.
pub trait TypeOf {
    fn type_tag(&self) -> TypeTag;
}

macro_rules! impl_type_of {
    ($tag:expr => $($ty:ty),*) => {
        $(
            impl TypeOf for $ty {
                fn type_tag(&self) -> TypeTag {
                    $tag
                }
            }
        )*
    };
}

impl_type_of!(TypeTag::Boolean => bool);
impl_type_of!(TypeTag::Number => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_type_of!(TypeTag::BigInt => i128, u128);
impl_type_of!(TypeTag::String => str, String, char);
impl_type_of!(TypeTag::Undefined => ());

impl<T: TypeOf> TypeOf for Option<T> {
    fn type_tag(&self) -> TypeTag {
        match self {
            Some(inner) => inner.type_tag(),
            None => TypeTag::Undefined,
        }
    }
}

impl<T> TypeOf for Vec<T> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Object
    }
}

impl<T> TypeOf for [T] {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Object
    }
}

impl<K, V, S> TypeOf for HashMap<K, V, S> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Object
    }
}

impl<K, V> TypeOf for BTreeMap<K, V> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Object
    }
}

macro_rules! impl_type_of_fn {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> TypeOf for fn($($arg),*) -> R {
            fn type_tag(&self) -> TypeTag {
                TypeTag::Function
            }
        }
    };
}

impl_type_of_fn!();
impl_type_of_fn!(A);
impl_type_of_fn!(A, B);
impl_type_of_fn!(A, B, C);

impl TypeOf for serde_json::Value {
    fn type_tag(&self) -> TypeTag {
        use serde_json::Value;

        match self {
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            // null reports as an object, like the typeof operator it mirrors
            Value::Null | Value::Array(_) | Value::Object(_) => TypeTag::Object,
        }
    }
}

impl<T: TypeOf + ?Sized> TypeOf for &T {
    fn type_tag(&self) -> TypeTag {
        (**self).type_tag()
    }
}

impl<T: TypeOf + ?Sized> TypeOf for Box<T> {
    fn type_tag(&self) -> TypeTag {
        (**self).type_tag()
    }
}
