// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::core::error::MdxResult;
use crate::core::evaluator::Evaluator;
use crate::core::executor::expression_executor::ScalarExecutor;
use crate::core::value::ScalarValue;
use crate::query_api::definition::{Category, Type};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Equal,
    NotEqual,
}

impl CompareOp {
    pub const fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Equal => "=",
            CompareOp::NotEqual => "<>",
        }
    }
}

/// Equality comparison in the category of the chosen overload.
///
/// Numbers compare by value (`1 = 1.0`), logicals after the implicit
/// numeric conversion, strings by text. A null operand yields null.
#[derive(Debug)]
pub struct CompareExecutor {
    op: CompareOp,
    left: Box<dyn ScalarExecutor>,
    right: Box<dyn ScalarExecutor>,
    category: Category,
}

impl CompareExecutor {
    pub fn new(
        op: CompareOp,
        left: Box<dyn ScalarExecutor>,
        right: Box<dyn ScalarExecutor>,
        category: Category,
    ) -> Self {
        Self {
            op,
            left,
            right,
            category,
        }
    }

    fn equal(&self, evaluator: &Evaluator) -> MdxResult<Option<bool>> {
        let equal = match self.category {
            Category::Numeric | Category::Integer => {
                let left = self.left.evaluate_number(evaluator)?;
                let right = self.right.evaluate_number(evaluator)?;
                match (left.as_f64(), right.as_f64()) {
                    (Some(a), Some(b)) => Some(a == b),
                    _ => None,
                }
            }
            Category::Logical => {
                match (self.left.evaluate_boolean(evaluator)?, self.right.evaluate_boolean(evaluator)?) {
                    (Some(a), Some(b)) => Some(a == b),
                    _ => None,
                }
            }
            _ => match (self.left.evaluate_string(evaluator)?, self.right.evaluate_string(evaluator)?) {
                (Some(a), Some(b)) => Some(a == b),
                _ => None,
            },
        };
        Ok(equal)
    }
}

impl ScalarExecutor for CompareExecutor {
    fn evaluate(&self, evaluator: &Evaluator) -> MdxResult<ScalarValue> {
        let equal = self.equal(evaluator)?;
        Ok(equal.map_or(ScalarValue::Null, |equal| {
            ScalarValue::Boolean(match self.op {
                CompareOp::Equal => equal,
                CompareOp::NotEqual => !equal,
            })
        }))
    }

    fn return_type(&self) -> Type {
        Type::BOOLEAN
    }

    fn calcs(&self) -> Vec<&dyn ScalarExecutor> {
        vec![self.left.as_ref(), self.right.as_ref()]
    }
}
