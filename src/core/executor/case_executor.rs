// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::core::config::NumericEquality;
use crate::core::error::MdxResult;
use crate::core::evaluator::Evaluator;
use crate::core::executor::expression_executor::ScalarExecutor;
use crate::core::value::ScalarValue;
use crate::query_api::definition::{Category, Type};

/// Executor for matched CASE expressions
///
/// `CASE value WHEN match THEN result ... [ELSE default] END`
///
/// - The value is evaluated once
/// - Value and matches are read through the typed entry of the value's
///   category, so a CAST value or match compares by its converted form
/// - Short-circuit evaluation: stops at the first matching WHEN
/// - NULL matches nothing, including NULL
/// - Typed entries are forwarded to the selected branch
/// - The default is always present (a typed null when ELSE was omitted)
#[derive(Debug)]
pub struct CaseMatchExecutor {
    value_executor: Box<dyn ScalarExecutor>,
    when_executors: Vec<WhenClauseExecutor>,
    default_executor: Box<dyn ScalarExecutor>,
    /// Category value and matches are compared in
    value_category: Category,
    numeric_equality: NumericEquality,
    return_type: Type,
}

#[derive(Debug)]
pub struct WhenClauseExecutor {
    pub match_executor: Box<dyn ScalarExecutor>,
    pub result_executor: Box<dyn ScalarExecutor>,
}

impl WhenClauseExecutor {
    pub fn new(
        match_executor: Box<dyn ScalarExecutor>,
        result_executor: Box<dyn ScalarExecutor>,
    ) -> Self {
        Self {
            match_executor,
            result_executor,
        }
    }
}

impl CaseMatchExecutor {
    pub fn new(
        value_executor: Box<dyn ScalarExecutor>,
        when_executors: Vec<WhenClauseExecutor>,
        default_executor: Box<dyn ScalarExecutor>,
        return_type: Type,
        numeric_equality: NumericEquality,
    ) -> Self {
        let value_category = value_executor.return_type().category();
        Self {
            value_executor,
            when_executors,
            default_executor,
            value_category,
            numeric_equality,
            return_type,
        }
    }

    /// Reduces the value or a match to the form it is compared in. `None`
    /// for null, which matches nothing.
    fn match_key(
        &self,
        executor: &dyn ScalarExecutor,
        evaluator: &Evaluator,
    ) -> MdxResult<Option<MatchKey>> {
        let key = match self.value_category {
            Category::Numeric | Category::Integer => {
                let number = executor.evaluate_number(evaluator)?;
                match self.numeric_equality {
                    NumericEquality::Normalized => number.as_f64().map(MatchKey::Number),
                    NumericEquality::Strict => (!number.is_null()).then_some(MatchKey::Exact(number)),
                }
            }
            Category::Logical => executor.evaluate_boolean(evaluator)?.map(MatchKey::Logical),
            Category::String | Category::Symbol => executor.evaluate_string(evaluator)?.map(MatchKey::Text),
            Category::Value => {
                let value = executor.evaluate(evaluator)?;
                match (self.numeric_equality, value.as_f64()) {
                    (NumericEquality::Normalized, Some(n)) => Some(MatchKey::Number(n)),
                    _ if value.is_null() => None,
                    _ => Some(MatchKey::Exact(value)),
                }
            }
        };
        Ok(key)
    }

    /// The branch this evaluation takes.
    fn select(&self, evaluator: &Evaluator) -> MdxResult<&dyn ScalarExecutor> {
        if let Some(value) = self.match_key(self.value_executor.as_ref(), evaluator)? {
            for when_clause in &self.when_executors {
                let candidate = self.match_key(when_clause.match_executor.as_ref(), evaluator)?;
                if candidate.as_ref() == Some(&value) {
                    return Ok(when_clause.result_executor.as_ref());
                }
            }
        }
        Ok(self.default_executor.as_ref())
    }
}

#[derive(Debug, PartialEq)]
enum MatchKey {
    Number(f64),
    Exact(ScalarValue),
    Logical(bool),
    Text(String),
}

impl ScalarExecutor for CaseMatchExecutor {
    fn evaluate(&self, evaluator: &Evaluator) -> MdxResult<ScalarValue> {
        self.select(evaluator)?.evaluate(evaluator)
    }

    fn return_type(&self) -> Type {
        self.return_type
    }

    fn calcs(&self) -> Vec<&dyn ScalarExecutor> {
        let mut calcs: Vec<&dyn ScalarExecutor> = Vec::with_capacity(2 * self.when_executors.len() + 2);
        calcs.push(self.value_executor.as_ref());
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
