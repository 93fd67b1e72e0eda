// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Layered Configuration
//!
//! Key-value configuration with source tracking. Settings can come from
//! several places and are merged by precedence:
//!
//! 1. **RustDefault** - Built-in Rust defaults
//! 2. **TomlFile** - An engine TOML file
//! 3. **Session** - Values set programmatically for one engine (highest priority)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use mdx_rust::core::config::{FlatConfig, PropertySource};
//!
//! let mut config = FlatConfig::from_toml_str("[case]\nnumeric-equality = 'strict'\n")?;
//! config.set("cast.trim-whitespace", "false", PropertySource::Session);
//! assert_eq!(config.get("case.numeric-equality").map(String::as_str), Some("strict"));
//! ```

use std::collections::HashMap;
use std::path::Path;

use crate::core::error::{MdxError, MdxResult};

/// Property source identifier with priority ordering
///
/// Higher priority sources override lower priority sources during configuration merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertySource {
    /// Rust code defaults (priority: 0)
    RustDefault,
    /// TOML configuration file (priority: 1)
    TomlFile,
    /// Set on the engine at runtime (priority: 2)
    Session,
}

impl PropertySource {
    /// Get numeric priority for comparison (higher = more important)
    #[inline]
    pub const fn priority(&self) -> u8 {
        match self {
            PropertySource::RustDefault => 0,
            PropertySource::TomlFile => 1,
            PropertySource::Session => 2,
        }
    }

    #[inline]
    pub const fn description(&self) -> &'static str {
        match self {
            PropertySource::RustDefault => "Rust default",
            PropertySource::TomlFile => "TOML file",
            PropertySource::Session => "session",
        }
    }
}

/// Flat key-value configuration with source tracking
///
/// Nested TOML tables are flattened to dotted keys (`[case] numeric-equality`
/// becomes `case.numeric-equality`).
#[derive(Debug, Clone)]
pub struct FlatConfig {
    properties: HashMap<String, String>,
    sources: HashMap<String, PropertySource>,
}

impl FlatConfig {
    #[inline]
    pub fn new() -> Self {
        Self {
            properties: HashMap::new(),
            sources: HashMap::new(),
        }
    }

    /// Parse TOML text; every value is recorded with [`PropertySource::TomlFile`].
    pub fn from_toml_str(text: &str) -> MdxResult<Self> {
        let table: toml::Table = text
            .parse()
            .map_err(|e: toml::de::Error| MdxError::configuration(format!("Invalid TOML: {e}")))?;
        let mut config = Self::new();
        config.insert_table("", &table)?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> MdxResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            MdxError::configuration(format!("Cannot read '{}': {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    fn insert_table(&mut self, prefix: &str, table: &toml::Table) -> MdxResult<()> {
        for (key, value) in table {
            let full_key = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            let text = match value {
                toml::Value::Table(nested) => {
                    self.insert_table(&full_key, nested)?;
                    continue;
                }
                toml::Value::String(s) => s.clone(),
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Datetime(d) => d.to_string(),
                toml::Value::Array(_) => {
                    return Err(MdxError::configuration_with_key(
                        "Arrays are not supported in engine configuration",
                        full_key,
                    ));
                }
            };
            self.set(full_key, text, PropertySource::TomlFile);
        }
        Ok(())
    }

    /// Set a property with source tracking and priority-based override
    ///
    /// Only sets the value if the new source has equal or higher priority than the existing source.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>, source: PropertySource) {
        let key = key.into();

        if let Some(existing_source) = self.sources.get(&key) {
            if existing_source.priority() > source.priority() {
                return;
            }
        }

        self.properties.insert(key.clone(), value.into());
        self.sources.insert(key, source);
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&String> {
        self.properties.get(key)
    }

    #[inline]
    pub fn get_with_source(&self, key: &str) -> Option<(&String, PropertySource)> {
        self.properties
            .get(key)
            .and_then(|value| self.sources.get(key).map(|source| (value, *source)))
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.properties.keys()
    }

    /// Merge another configuration into this one (respects priorities)
    pub fn merge(&mut self, other: &FlatConfig) {
        for (key, value) in &other.properties {
            if let Some(source) = other.sources.get(key) {
                self.set(key.clone(), value.clone(), *source);
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Default for FlatConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
