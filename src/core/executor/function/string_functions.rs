// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::core::error::MdxResult;
use crate::core::evaluator::Evaluator;
use crate::core::executor::expression_executor::ScalarExecutor;
use crate::core::value::ScalarValue;
use crate::query_api::definition::Type;

/// `a || b || ...`. Any null operand makes the whole result null.
#[derive(Debug)]
pub struct ConcatExecutor {
    executors: Vec<Box<dyn ScalarExecutor>>,
}

impl ConcatExecutor {
    pub fn new(executors: Vec<Box<dyn ScalarExecutor>>) -> Self {
        Self { executors }
    }
}

impl ScalarExecutor for ConcatExecutor {
    fn evaluate(&self, evaluator: &Evaluator) -> MdxResult<ScalarValue> {
        let mut result = String::new();
        for e in &self.executors {
            match e.evaluate_string(evaluator)? {
                Some(s) => result.push_str(&s),
                None => return Ok(ScalarValue::Null),
            }
        }
        Ok(ScalarValue::String(result))
    }

    fn return_type(&self) -> Type {
        Type::STRING
    }

    fn calcs(&self) -> Vec<&dyn ScalarExecutor> {
        self.executors.iter().map(|e| e.as_ref()).collect()
    }
}
