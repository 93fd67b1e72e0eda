// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::core::error::MdxResult;
use crate::core::evaluator::Evaluator;
use crate::core::executor::expression_executor::ScalarExecutor;
use crate::core::value::ScalarValue;
use crate::query_api::definition::Type;

#[derive(Debug, Clone)]
pub struct ConstantExecutor {
    value: ScalarValue,
    return_type: Type,
}

impl ConstantExecutor {
    pub fn new(value: ScalarValue, return_type: Type) -> Self {
        Self { value, return_type }
    }

    /// Null that still reports `return_type`, used where an optional
    /// branch was left out.
    pub fn typed_null(return_type: Type) -> Self {
        Self::new(ScalarValue::Null, return_type)
    }

    pub fn value(&self) -> &ScalarValue {
        &self.value
    }
}

impl ScalarExecutor for ConstantExecutor {
    fn evaluate(&self, _evaluator: &Evaluator) -> MdxResult<ScalarValue> {
        Ok(self.value.clone())
    }

    fn return_type(&self) -> Type {
        self.return_type
    }

    fn calcs(&self) -> Vec<&dyn ScalarExecutor> {
        Vec::new()
    }
}
