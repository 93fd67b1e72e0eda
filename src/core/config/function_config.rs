// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration for the built-in operators.
//!
//! Parsed from a [`FlatConfig`] with the following keys:
//! - `case.numeric-equality` - `normalized` (default) or `strict`
//! - `cast.trim-whitespace` - `true` (default) or `false`

use serde::Serialize;
use std::path::Path;

use super::flat_config::FlatConfig;
use crate::core::error::{MdxError, MdxResult};

pub const NUMERIC_EQUALITY_KEY: &str = "case.numeric-equality";
pub const TRIM_WHITESPACE_KEY: &str = "cast.trim-whitespace";

/// How a matched CASE compares numbers held in different representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericEquality {
    /// `1` equals `1.0`
    #[default]
    Normalized,
    /// Integers only equal integers, doubles only equal doubles
    Strict,
}

impl NumericEquality {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "normalized" => Ok(NumericEquality::Normalized),
            "strict" => Ok(NumericEquality::Strict),
            _ => Err(format!(
                "Invalid numeric equality '{}'. Valid values: 'normalized', 'strict'",
                s
            )),
        }
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            NumericEquality::Normalized => "normalized",
            NumericEquality::Strict => "strict",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FunctionConfig {
    pub numeric_equality: NumericEquality,
    /// Trim surrounding whitespace before CAST parses text as a number.
    pub trim_whitespace: bool,
}

impl FunctionConfig {
    pub fn new() -> Self {
        Self {
            numeric_equality: NumericEquality::Normalized,
            trim_whitespace: true,
        }
    }

    pub fn with_numeric_equality(mut self, numeric_equality: NumericEquality) -> Self {
        self.numeric_equality = numeric_equality;
        self
    }

    pub fn with_trim_whitespace(mut self, trim_whitespace: bool) -> Self {
        self.trim_whitespace = trim_whitespace;
        self
    }

    /// Parse from FlatConfig; absent keys keep their defaults
    pub fn from_flat_config(config: &FlatConfig) -> MdxResult<Self> {
        let mut result = Self::new();

        if let Some(value) = config.get(NUMERIC_EQUALITY_KEY) {
            result.numeric_equality = NumericEquality::from_str(value)
                .map_err(|e| MdxError::configuration_with_key(e, NUMERIC_EQUALITY_KEY))?;
        }

        if let Some(value) = config.get(TRIM_WHITESPACE_KEY) {
            result.trim_whitespace = match value.to_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => {
                    return Err(MdxError::configuration_with_key(
                        format!("Invalid boolean '{value}'. Valid values: 'true', 'false'"),
                        TRIM_WHITESPACE_KEY,
                    ));
                }
            };
        }

        log::debug!(
            "Function configuration: {}",
            serde_json::to_string(&result).unwrap_or_default()
        );
        Ok(result)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> MdxResult<Self> {
        Self::from_flat_config(&FlatConfig::from_toml_file(path)?)
    }
}

impl Default for FunctionConfig {
    fn default() -> Self {
        Self::new()
    }
}
