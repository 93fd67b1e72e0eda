// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod flat_config;
pub mod function_config;

pub use flat_config::{FlatConfig, PropertySource};
pub use function_config::{FunctionConfig, NumericEquality};
