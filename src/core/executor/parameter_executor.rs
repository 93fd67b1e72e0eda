// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::core::error::{MdxError, MdxResult};
use crate::core::evaluator::Evaluator;
use crate::core::executor::expression_executor::ScalarExecutor;
use crate::core::value::ScalarValue;
use crate::query_api::definition::Type;

/// Reads a named value from the evaluator.
#[derive(Debug, Clone)]
pub struct ParameterExecutor {
    name: String,
    return_type: Type,
}

impl ParameterExecutor {
    pub fn new(name: impl Into<String>, return_type: Type) -> Self {
        Self {
            name: name.into(),
            return_type,
        }
    }
}

impl ScalarExecutor for ParameterExecutor {
    fn evaluate(&self, evaluator: &Evaluator) -> MdxResult<ScalarValue> {
        evaluator
            .parameter(&self.name)
            .cloned()
            .ok_or_else(|| MdxError::unknown_parameter(&self.name))
    }

    fn return_type(&self) -> Type {
        self.return_type
    }

    fn calcs(&self) -> Vec<&dyn ScalarExecutor> {
        Vec::new()
    }
}
