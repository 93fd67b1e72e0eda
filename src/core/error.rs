// SPDX-License-Identifier: MIT OR Apache-2.0

//! MDX Core Error Types
//!
//! Errors raised while resolving, compiling and evaluating expressions.
//! A resolver that simply does not apply to an argument vector does not
//! raise anything; it answers `Ok(None)` and the function table moves on.

use thiserror::Error;

use crate::query_api::definition::{Category, Type};
use crate::query_api::expression::Syntax;

/// Result type for MDX operations
pub type MdxResult<T> = Result<T, MdxError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MdxError {
    #[error("Unknown type '{type_name}'; values are NUMERIC, STRING, BOOLEAN, INTEGER")]
    CastInvalidType { type_name: String },

    #[error("cannot convert value '{value}' to targetType '{target_type}'")]
    CannotConvert { value: String, target_type: Type },

    #[error("No function matches signature '{signature}'")]
    NoFunctionMatches { name: String, signature: String },

    #[error("No {syntax} function named '{name}' is registered")]
    UnknownFunction { name: String, syntax: Syntax },

    #[error("Signature '{signature}' is ambiguous between {candidates} functions")]
    AmbiguousFunction { signature: String, candidates: usize },

    #[error("Unknown parameter '{name}'")]
    UnknownParameter { name: String },

    #[error("NULL is not allowed here: {context}")]
    NullNotAllowed { context: String },

    #[error("Call to '{name}' must be validated before it is compiled")]
    UnresolvedCall { name: String },

    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        config_key: Option<String>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MdxError {
    pub fn cast_invalid_type(type_name: impl Into<String>) -> Self {
        Self::CastInvalidType {
            type_name: type_name.into(),
        }
    }

    /// Conversion failure at a typed entry point.
    pub fn cannot_convert(value: impl ToString, target_type: Type) -> Self {
        Self::CannotConvert {
            value: value.to_string(),
            target_type,
        }
    }

    /// No registered resolver accepted the argument categories.
    pub fn no_function_matches(name: &str, syntax: Syntax, arg_categories: &[Category]) -> Self {
        Self::NoFunctionMatches {
            name: name.to_string(),
            signature: signature(name, syntax, arg_categories),
        }
    }

    pub fn unknown_function(name: impl Into<String>, syntax: Syntax) -> Self {
        Self::UnknownFunction {
            name: name.into(),
            syntax,
        }
    }

    pub fn ambiguous_function(
        name: &str,
        syntax: Syntax,
        arg_categories: &[Category],
        candidates: usize,
    ) -> Self {
        Self::AmbiguousFunction {
            signature: signature(name, syntax, arg_categories),
            candidates,
        }
    }

    pub fn unknown_parameter(name: impl Into<String>) -> Self {
        Self::UnknownParameter { name: name.into() }
    }

    pub fn null_not_allowed(context: impl Into<String>) -> Self {
        Self::NullNotAllowed {
            context: context.into(),
        }
    }

    pub fn unresolved_call(name: impl Into<String>) -> Self {
        Self::UnresolvedCall { name: name.into() }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            config_key: None,
        }
    }

    pub fn configuration_with_key(message: impl Into<String>, config_key: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            config_key: Some(config_key.into()),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Renders `name(Cat, Cat)` style signatures for error messages.
fn signature(name: &str, syntax: Syntax, arg_categories: &[Category]) -> String {
    let args = arg_categories
        .iter()
        .map(Category::as_str)
        .collect::<Vec<_>>();
    match (syntax, args.as_slice()) {
        (Syntax::Infix, [left, right]) => format!("<{left}> {name} <{right}>"),
        (Syntax::Prefix, [operand]) => format!("{name} <{operand}>"),
        _ => format!("{name}({})", args.join(", ")),
    }
}
