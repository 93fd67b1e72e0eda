// SPDX-License-Identifier: MIT OR Apache-2.0

//! The evaluation protocol every compiled expression implements.

use std::fmt::Debug;

use crate::core::error::{MdxError, MdxResult};
use crate::core::evaluator::Evaluator;
use crate::core::value::ScalarValue;
use crate::query_api::definition::Type;

/// Compiled scalar expression.
///
/// `evaluate` is the generic entry point. The typed entry points default to
/// converting its result with the implicit conversions the validator admits;
/// a null result is `Ok(None)` on every typed entry.
///
/// Executors are immutable once built, so one tree can be evaluated
/// repeatedly and from several evaluators at once.
pub trait ScalarExecutor: Debug + Send + Sync {
    fn evaluate(&self, evaluator: &Evaluator) -> MdxResult<ScalarValue>;

    fn return_type(&self) -> Type;

    /// Direct children, in evaluation order.
    fn calcs(&self) -> Vec<&dyn ScalarExecutor>;

    fn evaluate_string(&self, evaluator: &Evaluator) -> MdxResult<Option<String>> {
        Ok(value_to_string(self.evaluate(evaluator)?))
    }

    fn evaluate_integer(&self, evaluator: &Evaluator) -> MdxResult<Option<i32>> {
        value_to_integer(self.evaluate(evaluator)?)
    }

    fn evaluate_double(&self, evaluator: &Evaluator) -> MdxResult<Option<f64>> {
        value_to_double(self.evaluate(evaluator)?)
    }

    fn evaluate_boolean(&self, evaluator: &Evaluator) -> MdxResult<Option<bool>> {
        value_to_boolean(self.evaluate(evaluator)?)
    }

    /// Numeric entry that keeps integers exact: the result is `Integer`,
    /// `Double` or `Null`.
    fn evaluate_number(&self, evaluator: &Evaluator) -> MdxResult<ScalarValue> {
        value_to_number(self.evaluate(evaluator)?)
    }
}

pub fn value_to_string(value: ScalarValue) -> Option<String> {
    match value {
        ScalarValue::Null => None,
        ScalarValue::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Doubles truncate toward zero, saturating at the `i32` bounds.
pub fn value_to_integer(value: ScalarValue) -> MdxResult<Option<i32>> {
    match value {
        ScalarValue::Null => Ok(None),
        ScalarValue::Integer(i) => Ok(Some(i)),
        ScalarValue::Double(d) => Ok(Some(d as i32)),
        ScalarValue::Boolean(b) => Ok(Some(i32::from(b))),
        other => Err(MdxError::cannot_convert(other, Type::INTEGER)),
    }
}

pub fn value_to_double(value: ScalarValue) -> MdxResult<Option<f64>> {
    if value.is_null() {
        return Ok(None);
    }
    value
        .to_numeric()
        .map(Some)
        .ok_or_else(|| MdxError::cannot_convert(value, Type::NUMERIC))
}

/// Logicals read as 1 or 0.
pub fn value_to_number(value: ScalarValue) -> MdxResult<ScalarValue> {
    match value {
        ScalarValue::Null | ScalarValue::Integer(_) | ScalarValue::Double(_) => Ok(value),
        ScalarValue::Boolean(b) => Ok(ScalarValue::Integer(i32::from(b))),
        other => Err(MdxError::cannot_convert(other, Type::NUMERIC)),
    }
}

pub fn value_to_boolean(value: ScalarValue) -> MdxResult<Option<bool>> {
    if value.is_null() {
        return Ok(None);
    }
    value
        .to_logical()
        .map(Some)
        .ok_or_else(|| MdxError::cannot_convert(value, Type::BOOLEAN))
}
