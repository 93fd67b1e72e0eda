// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::core::error::MdxResult;
use crate::core::evaluator::Evaluator;
use crate::core::executor::expression_executor::{value_to_integer, ScalarExecutor};
use crate::core::value::ScalarValue;
use crate::query_api::definition::{Category, Type};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithmeticOp {
    pub const fn symbol(&self) -> &'static str {
        match self {
            ArithmeticOp::Add => "+",
            ArithmeticOp::Subtract => "-",
            ArithmeticOp::Multiply => "*",
            ArithmeticOp::Divide => "/",
        }
    }

    /// `None` on overflow, and always for division.
    fn apply_integer(&self, a: i32, b: i32) -> Option<i32> {
        match self {
            ArithmeticOp::Add => a.checked_add(b),
            ArithmeticOp::Subtract => a.checked_sub(b),
            ArithmeticOp::Multiply => a.checked_mul(b),
            ArithmeticOp::Divide => None,
        }
    }

    fn apply_double(&self, a: f64, b: f64) -> f64 {
        match self {
            ArithmeticOp::Add => a + b,
            ArithmeticOp::Subtract => a - b,
            ArithmeticOp::Multiply => a * b,
            ArithmeticOp::Divide => a / b,
        }
    }

    fn apply(&self, a: i32, b: i32) -> ScalarValue {
        self.apply_integer(a, b).map_or_else(
            || ScalarValue::Double(self.apply_double(f64::from(a), f64::from(b))),
            ScalarValue::Integer,
        )
    }
}

fn negate_integer(i: i32) -> ScalarValue {
    i.checked_neg()
        .map_or_else(|| ScalarValue::Double(-f64::from(i)), ScalarValue::Integer)
}

/// Binary arithmetic over two scalar operands.
///
/// Operands are read through [`ScalarExecutor::evaluate_number`]. The
/// integer overload truncates them to integers first. Two integer operands
/// keep an integer result unless the operation overflows, in which case the
/// result is computed in double precision. Division is always double
/// precision. A null operand yields null.
#[derive(Debug)]
pub struct ArithmeticExecutor {
    op: ArithmeticOp,
    left: Box<dyn ScalarExecutor>,
    right: Box<dyn ScalarExecutor>,
    return_type: Type,
}

impl ArithmeticExecutor {
    pub fn new(
        op: ArithmeticOp,
        left: Box<dyn ScalarExecutor>,
        right: Box<dyn ScalarExecutor>,
        return_type: Type,
    ) -> Self {
        Self {
            op,
            left,
            right,
            return_type,
        }
    }

    pub fn op(&self) -> ArithmeticOp {
        self.op
    }
}

impl ScalarExecutor for ArithmeticExecutor {
    fn evaluate(&self, evaluator: &Evaluator) -> MdxResult<ScalarValue> {
        let left = self.left.evaluate_number(evaluator)?;
        let right = self.right.evaluate_number(evaluator)?;
        if self.return_type.category() == Category::Integer {
            return match (value_to_integer(left)?, value_to_integer(right)?) {
                (Some(a), Some(b)) => Ok(self.op.apply(a, b)),
                _ => Ok(ScalarValue::Null),
            };
        }
        match (left, right) {
            (ScalarValue::Integer(a), ScalarValue::Integer(b)) => Ok(self.op.apply(a, b)),
            (left, right) => match (left.as_f64(), right.as_f64()) {
                (Some(a), Some(b)) => Ok(ScalarValue::Double(self.op.apply_double(a, b))),
                _ => Ok(ScalarValue::Null),
            },
        }
    }

    fn return_type(&self) -> Type {
        self.return_type
    }

    fn calcs(&self) -> Vec<&dyn ScalarExecutor> {
        vec![self.left.as_ref(), self.right.as_ref()]
    }
}

#[derive(Debug)]
pub struct NegateExecutor {
    operand: Box<dyn ScalarExecutor>,
    return_type: Type,
}

impl NegateExecutor {
    pub fn new(operand: Box<dyn ScalarExecutor>, return_type: Type) -> Self {
        Self {
            operand,
            return_type,
        }
    }
}

impl ScalarExecutor for NegateExecutor {
    fn evaluate(&self, evaluator: &Evaluator) -> MdxResult<ScalarValue> {
        let operand = self.operand.evaluate_number(evaluator)?;
        if self.return_type.category() == Category::Integer {
            return Ok(value_to_integer(operand)?.map_or(ScalarValue::Null, negate_integer));
        }
        match operand {
            ScalarValue::Integer(i) => Ok(negate_integer(i)),
            ScalarValue::Double(d) => Ok(ScalarValue::Double(-d)),
            _ => Ok(ScalarValue::Null),
        }
    }

    fn return_type(&self) -> Type {
        self.return_type
    }

    fn calcs(&self) -> Vec<&dyn ScalarExecutor> {
        vec![self.operand.as_ref()]
    }
}
