// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::query_api::definition::Category;
use std::fmt;

/// Scalar produced by evaluating an expression.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScalarValue {
    #[default]
    Null,
    String(String),
    Integer(i32),
    Double(f64),
    Boolean(bool),
}

impl ScalarValue {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    /// Category a literal holding this value reports.
    ///
    /// Integral literals are `Numeric`; `Integer` is reserved for
    /// expressions a signature types as integer, such as `CAST(x AS INTEGER)`.
    pub fn category(&self) -> Category {
        match self {
            ScalarValue::Null => Category::Value,
            ScalarValue::String(_) => Category::String,
            ScalarValue::Integer(_) => Category::Numeric,
            ScalarValue::Double(_) => Category::Numeric,
            ScalarValue::Boolean(_) => Category::Logical,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScalarValue::Integer(i) => Some(*i as f64),
            ScalarValue::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Numeric view including the implicit logical conversion (`true` is 1).
    pub fn to_numeric(&self) -> Option<f64> {
        match self {
            ScalarValue::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            other => other.as_f64(),
        }
    }

    /// Logical view including the implicit numeric conversion (non-zero is true).
    pub fn to_logical(&self) -> Option<bool> {
        match self {
            ScalarValue::Boolean(b) => Some(*b),
            ScalarValue::Integer(i) => Some(*i != 0),
            ScalarValue::Double(d) => Some(*d != 0.0),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => f.write_str("null"),
            ScalarValue::String(s) => f.write_str(s),
            ScalarValue::Integer(i) => write!(f, "{i}"),
            ScalarValue::Double(d) => write!(f, "{d}"),
            ScalarValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::String(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::String(value)
    }
}

impl From<i32> for ScalarValue {
    fn from(value: i32) -> Self {
        ScalarValue::Integer(value)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Double(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Boolean(value)
    }
}

impl<T: Into<ScalarValue>> From<Option<T>> for ScalarValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ScalarValue::Null, Into::into)
    }
}
