// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

use crate::core::value::ScalarValue;

/// Per-evaluation context.
///
/// Holds the named parameter values an evaluation runs against. Executors
/// only ever borrow it immutably, so one compiled tree can be driven by
/// several evaluators at once.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    parameters: HashMap<String, ScalarValue>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        self.set_parameter(name, value);
        self
    }

    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<ScalarValue>) {
        self.parameters.insert(name.into(), value.into());
    }

    /// Parameter names are matched case-insensitively, as MDX identifiers are.
    pub fn parameter(&self, name: &str) -> Option<&ScalarValue> {
        self.parameters.get(name).or_else(|| {
            self.parameters
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        })
    }
}
