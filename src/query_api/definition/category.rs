// SPDX-License-Identifier: MIT OR Apache-2.0

//! Argument categories and return types.
//!
//! A [`Category`] is the coarse class the resolver reasons about when it
//! matches an argument vector against a signature. A [`Type`] is the
//! descriptor attached to a resolved call and to every compiled executor.

use serde::Serialize;
use std::fmt;

/// Semantic category of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    String,
    Numeric,
    Integer,
    Logical,
    /// Bare identifier literal, e.g. the type name in `CAST(x AS NUMERIC)`.
    Symbol,
    /// Untyped scalar; the category of the `NULL` literal.
    Value,
}

impl Category {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::String => "String",
            Category::Numeric => "Numeric",
            Category::Integer => "Integer",
            Category::Logical => "Logical",
            Category::Symbol => "Symbol",
            Category::Value => "Value",
        }
    }

    /// Integer is a refinement of Numeric.
    #[inline]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Category::Numeric | Category::Integer)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return type of a resolved call or compiled executor.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Type {
    STRING,
    NUMERIC,
    INTEGER,
    BOOLEAN,
    SYMBOL,
    SCALAR,
}

impl Type {
    pub const fn from_category(category: Category) -> Self {
        match category {
            Category::String => Type::STRING,
            Category::Numeric => Type::NUMERIC,
            Category::Integer => Type::INTEGER,
            Category::Logical => Type::BOOLEAN,
            Category::Symbol => Type::SYMBOL,
            Category::Value => Type::SCALAR,
        }
    }

    pub const fn category(&self) -> Category {
        match self {
            Type::STRING => Category::String,
            Type::NUMERIC => Category::Numeric,
            Type::INTEGER => Category::Integer,
            Type::BOOLEAN => Category::Logical,
            Type::SYMBOL => Category::Symbol,
            Type::SCALAR => Category::Value,
        }
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Type::STRING => "STRING",
            Type::NUMERIC => "NUMERIC",
            Type::INTEGER => "INTEGER",
            Type::BOOLEAN => "BOOLEAN",
            Type::SYMBOL => "SYMBOL",
            Type::SCALAR => "SCALAR",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
