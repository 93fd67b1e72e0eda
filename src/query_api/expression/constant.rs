// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::core::value::ScalarValue;
use crate::query_api::definition::Category;
use std::fmt;

/// Literal appearing in an expression.
///
/// Symbols carry their identifier text as a string value but report
/// [`Category::Symbol`], which keeps them apart from quoted strings.
#[derive(Clone, Debug, PartialEq)]
pub struct Literal {
    value: ScalarValue,
    category: Category,
}

impl Literal {
    pub fn new(value: ScalarValue) -> Self {
        let category = value.category();
        Self { value, category }
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Self {
            value: ScalarValue::String(name.into()),
            category: Category::Symbol,
        }
    }

    pub fn null() -> Self {
        Self::new(ScalarValue::Null)
    }

    #[inline]
    pub fn value(&self) -> &ScalarValue {
        &self.value
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Text of a string or symbol literal.
    pub fn text(&self) -> Option<&str> {
        self.value.as_str()
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.value, self.category) {
            (ScalarValue::String(s), Category::Symbol) => f.write_str(s),
            (ScalarValue::String(s), _) => write!(f, "'{}'", s.replace('\'', "''")),
            (ScalarValue::Null, _) => f.write_str("NULL"),
            (value, _) => write!(f, "{value}"),
        }
    }
}
