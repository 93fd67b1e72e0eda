// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::core::error::MdxResult;
use crate::core::evaluator::Evaluator;
use crate::core::executor::case_executor::WhenClauseExecutor;
use crate::core::executor::expression_executor::ScalarExecutor;
use crate::core::value::ScalarValue;
use crate::query_api::definition::Type;

/// Executor for searched CASE expressions
///
/// `CASE WHEN condition THEN result ... [ELSE default] END`
///
/// - Conditions are read through the boolean entry point
/// - A NULL condition counts as false
/// - Short-circuit evaluation: stops at the first true condition
/// - Typed entries are forwarded to the selected branch
pub struct CaseTestExecutor {
    when_executors: Vec<WhenClauseExecutor>,
    default_executor: Box<dyn ScalarExecutor>,
    return_type: Type,
}

impl CaseTestExecutor {
    pub fn new(
        when_executors: Vec<WhenClauseExecutor>,
        default_executor: Box<dyn ScalarExecutor>,
        return_type: Type,
    ) -> Self {
        Self {
            when_executors,
            default_executor,
            return_type,
        }
    }

    fn select(&self, evaluator: &Evaluator) -> MdxResult<&dyn ScalarExecutor> {
        for when_clause in &self.when_executors {
            if when_clause.match_executor.evaluate_boolean(evaluator)? == Some(true) {
                return Ok(when_clause.result_executor.as_ref());
            }
        }
        Ok(self.default_executor.as_ref())
    }
}

impl ScalarExecutor for CaseTestExecutor {
    fn evaluate(&self, evaluator: &Evaluator) -> MdxResult<ScalarValue> {
        self.select(evaluator)?.evaluate(evaluator)
    }

    fn return_type(&self) -> Type {
        self.return_type
    }

    fn calcs(&self) -> Vec<&dyn ScalarExecutor> {
        let mut calcs: Vec<&dyn ScalarExecutor> = Vec::with_capacity(2 * self.when_executors.len() + 1);
        for when_clause in &self.when_executors {
            calcs.push(when_clause.match_executor.as_ref());
            calcs.push(when_clause.result_executor.as_ref());
        }
        calcs.push(self.default_executor.as_ref());
        calcs
    }

    fn evaluate_string(&self, evaluator: &Evaluator) -> MdxResult<Option<String>> {
        self.select(evaluator)?.evaluate_string(evaluator)
    }

    fn evaluate_integer(&self, evaluator: &Evaluator) -> MdxResult<Option<i32>> {
        self.select(evaluator)?.evaluate_integer(evaluator)
    }

    fn evaluate_double(&self, evaluator: &Evaluator) -> MdxResult<Option<f64>> {
        self.select(evaluator)?.evaluate_double(evaluator)
    }

    fn evaluate_boolean(&self, evaluator: &Evaluator) -> MdxResult<Option<bool>> {
        self.select(evaluator)?.evaluate_boolean(evaluator)
    }

    fn evaluate_number(&self, evaluator: &Evaluator) -> MdxResult<ScalarValue> {
        self.select(evaluator)?.evaluate_number(evaluator)
    }
}

impl std::fmt::Debug for CaseTestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaseTestExecutor")
            .field("num_when_clauses", &self.when_executors.len())
            .field("return_type", &self.return_type)
            .finish()
    }
}
