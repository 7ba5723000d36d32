use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Sections keyed by name, in the order they were first seen or inserted.
pub type Config = IndexMap<String, Section>;

/// Key/value pairs of a single section.
pub type Section = IndexMap<String, Value>;

/// The right-hand side of a `key = value` pair.
///
/// A raw value containing a `,` always becomes a [`Value::List`], so a single-element list does not
/// survive a round-trip; it comes back as a [`Value::Scalar`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

/// A single coerced value: a boolean, an integer, a float, or anything else as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Value {
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            Self::List(..) => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            Self::Scalar(..) => None,
            Self::List(items) => Some(items),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => scalar.fmt(f),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    item.fmt(f)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => b.fmt(f),
            Self::Integer(n) => n.fmt(f),
            // Keep a fractional part on integral floats so they read back as floats.
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Float(x) => x.fmt(f),
            Self::String(s) => s.fmt(f),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Integer(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_owned())
    }
}

macro_rules! impl_value_from {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::Scalar(value.into())
            }
        }

        impl From<Vec<$ty>> for Value {
            fn from(value: Vec<$ty>) -> Self {
                Value::List(value.into_iter().map(Into::into).collect())
            }
        }
    )*};
}

impl_value_from!(bool, i64, i32, f64, String, &str, Scalar);
