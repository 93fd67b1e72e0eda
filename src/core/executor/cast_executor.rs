// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cast Expression Executor
//!
//! `evaluate` passes the inner value through untouched; the conversion is
//! applied by whichever typed entry point the caller picks:
//! - String: stringify anything with default formatting
//! - Integer: parse text, truncate numbers
//! - Double: parse text, widen numbers
//! - Boolean: parse `true`/`false` text (case-insensitive), pass booleans
//!
//! The number entry goes through the entry of the target category, so a
//! cast operand reads the same under arithmetic as under a typed caller.

use crate::core::error::{MdxError, MdxResult};
use crate::core::evaluator::Evaluator;
use crate::core::executor::expression_executor::{value_to_string, ScalarExecutor};
use crate::core::value::ScalarValue;
use crate::query_api::definition::{Category, Type};

/// Executor for CAST expressions
#[derive(Debug)]
pub struct CastExecutor {
    /// The inner expression to evaluate before casting
    inner_executor: Box<dyn ScalarExecutor>,
    /// The target type to cast to
    target_type: Type,
    /// Trim text before parsing it as a number
    trim_whitespace: bool,
}

impl CastExecutor {
    pub fn new(inner_executor: Box<dyn ScalarExecutor>, target_type: Type, trim_whitespace: bool) -> Self {
        Self {
            inner_executor,
            target_type,
            trim_whitespace,
        }
    }

    fn text<'a>(&self, s: &'a str) -> &'a str {
        if self.trim_whitespace {
            s.trim()
        } else {
            s
        }
    }

    fn cannot_convert(&self, value: &ScalarValue) -> MdxError {
        MdxError::cannot_convert(value, self.target_type)
    }
}

impl ScalarExecutor for CastExecutor {
    fn evaluate(&self, evaluator: &Evaluator) -> MdxResult<ScalarValue> {
        self.inner_executor.evaluate(evaluator)
    }

    fn return_type(&self) -> Type {
        self.target_type
    }

    fn calcs(&self) -> Vec<&dyn ScalarExecutor> {
        vec![self.inner_executor.as_ref()]
    }

    fn evaluate_string(&self, evaluator: &Evaluator) -> MdxResult<Option<String>> {
        Ok(value_to_string(self.evaluate(evaluator)?))
    }

    fn evaluate_integer(&self, evaluator: &Evaluator) -> MdxResult<Option<i32>> {
        match self.evaluate(evaluator)? {
            ScalarValue::Null => Ok(None),
            ScalarValue::String(s) => self
                .text(&s)
                .parse::<i32>()
                .map(Some)
                .map_err(|_| self.cannot_convert(&ScalarValue::String(s.clone()))),
            ScalarValue::Integer(i) => Ok(Some(i)),
            ScalarValue::Double(d) => Ok(Some(d as i32)),
            other => Err(self.cannot_convert(&other)),
        }
    }

    fn evaluate_double(&self, evaluator: &Evaluator) -> MdxResult<Option<f64>> {
        match self.evaluate(evaluator)? {
            ScalarValue::Null => Ok(None),
            ScalarValue::String(s) => self
                .text(&s)
                .parse::<f64>()
                .map(Some)
                .map_err(|_| self.cannot_convert(&ScalarValue::String(s.clone()))),
            ScalarValue::Integer(i) => Ok(Some(f64::from(i))),
            ScalarValue::Double(d) => Ok(Some(d)),
            other => Err(self.cannot_convert(&other)),
        }
    }

    fn evaluate_boolean(&self, evaluator: &Evaluator) -> MdxResult<Option<bool>> {
        match self.evaluate(evaluator)? {
            ScalarValue::Null => Ok(None),
            ScalarValue::Boolean(b) => Ok(Some(b)),
            ScalarValue::String(s) => {
                let text = self.text(&s);
                if text.eq_ignore_ascii_case("true") {
                    Ok(Some(true))
                } else if text.eq_ignore_ascii_case("false") {
                    Ok(Some(false))
                } else {
                    Err(self.cannot_convert(&ScalarValue::String(s)))
                }
            }
            other => Err(self.cannot_convert(&other)),
        }
    }

    fn evaluate_number(&self, evaluator: &Evaluator) -> MdxResult<ScalarValue> {
        match self.target_type.category() {
            Category::Integer => Ok(self.evaluate_integer(evaluator)?.into()),
            Category::Logical => Ok(self.evaluate_boolean(evaluator)?.map(i32::from).into()),
            _ => Ok(self.evaluate_double(evaluator)?.into()),
        }
    }
}
