// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-signature operators: arithmetic, negation, concatenation and
//! equality.
//!
//! Each overload is a [`SimpleResolver`] holding its parameter categories
//! and a builder that turns compiled operands into an executor. Overloads
//! of one operator share a [`FunInfo`]; the function table picks the
//! cheapest.

use std::fmt;
use std::sync::Arc;

use super::fun_def::{FunDef, FunInfo, FunSignature, Resolver};
use crate::core::compiler::ExpCompiler;
use crate::core::error::{MdxError, MdxResult};
use crate::core::executor::{
    ArithmeticExecutor, ArithmeticOp, CompareExecutor, CompareOp, ConcatExecutor, NegateExecutor,
    ScalarExecutor,
};
use crate::core::validation::{ConversionCounter, Validator};
use crate::query_api::definition::{Category, Type};
use crate::query_api::expression::{Expression, ResolvedFunCall, Syntax};

pub type OperatorBuilder =
    fn(&FunSignature, Vec<Box<dyn ScalarExecutor>>) -> MdxResult<Box<dyn ScalarExecutor>>;

pub struct SimpleResolver {
    info: &'static FunInfo,
    return_category: Category,
    parameter_categories: &'static [Category],
    builder: OperatorBuilder,
}

impl SimpleResolver {
    pub const fn new(
        info: &'static FunInfo,
        return_category: Category,
        parameter_categories: &'static [Category],
        builder: OperatorBuilder,
    ) -> Self {
        Self {
            info,
            return_category,
            parameter_categories,
            builder,
        }
    }
}

impl fmt::Debug for SimpleResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleResolver")
            .field("name", &self.info.name)
            .field("return_category", &self.return_category)
            .field("parameter_categories", &self.parameter_categories)
            .finish()
    }
}

impl Resolver for SimpleResolver {
    fn info(&self) -> &'static FunInfo {
        self.info
    }

    fn resolve(
        &self,
        args: &[Expression],
        validator: &dyn Validator,
        counter: &mut ConversionCounter,
    ) -> MdxResult<Option<Arc<dyn FunDef>>> {
        if args.len() != self.parameter_categories.len() {
            return Ok(None);
        }
        for (arg, &category) in args.iter().zip(self.parameter_categories) {
            if !validator.can_convert(arg, category, counter) {
                return Ok(None);
            }
        }
        Ok(Some(Arc::new(SimpleFunDef {
            signature: FunSignature::new(
                self.info,
                self.return_category,
                self.parameter_categories.to_vec(),
            ),
            builder: self.builder,
        })))
    }
}

pub struct SimpleFunDef {
    signature: FunSignature,
    builder: OperatorBuilder,
}

impl fmt::Debug for SimpleFunDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleFunDef")
            .field("signature", &self.signature)
            .finish()
    }
}

impl FunDef for SimpleFunDef {
    fn signature(&self) -> &FunSignature {
        &self.signature
    }

    fn compile_call(
        &self,
        call: &ResolvedFunCall,
        compiler: &ExpCompiler<'_>,
    ) -> MdxResult<Box<dyn ScalarExecutor>> {
        let operands = call
            .args
            .iter()
            .map(|arg| compiler.compile_scalar(arg, true))
            .collect::<MdxResult<Vec<_>>>()?;
        (self.builder)(&self.signature, operands)
    }
}

fn take_two(
    signature: &FunSignature,
    operands: Vec<Box<dyn ScalarExecutor>>,
) -> MdxResult<(Box<dyn ScalarExecutor>, Box<dyn ScalarExecutor>)> {
    let mut operands = operands.into_iter();
    match (operands.next(), operands.next(), operands.next()) {
        (Some(left), Some(right), None) => Ok((left, right)),
        _ => Err(MdxError::internal(format!(
            "'{}' requires two operands",
            signature.info().name
        ))),
    }
}

fn build_arithmetic(
    op: ArithmeticOp,
    signature: &FunSignature,
    operands: Vec<Box<dyn ScalarExecutor>>,
) -> MdxResult<Box<dyn ScalarExecutor>> {
    let (left, right) = take_two(signature, operands)?;
    let return_type = Type::from_category(signature.return_category());
    Ok(Box::new(ArithmeticExecutor::new(op, left, right, return_type)))
}

fn build_add(
    signature: &FunSignature,
    operands: Vec<Box<dyn ScalarExecutor>>,
) -> MdxResult<Box<dyn ScalarExecutor>> {
    build_arithmetic(ArithmeticOp::Add, signature, operands)
}

fn build_subtract(
    signature: &FunSignature,
    operands: Vec<Box<dyn ScalarExecutor>>,
) -> MdxResult<Box<dyn ScalarExecutor>> {
    build_arithmetic(ArithmeticOp::Subtract, signature, operands)
}

fn build_multiply(
    signature: &FunSignature,
    operands: Vec<Box<dyn ScalarExecutor>>,
) -> MdxResult<Box<dyn ScalarExecutor>> {
    build_arithmetic(ArithmeticOp::Multiply, signature, operands)
}

fn build_divide(
    signature: &FunSignature,
    operands: Vec<Box<dyn ScalarExecutor>>,
) -> MdxResult<Box<dyn ScalarExecutor>> {
    build_arithmetic(ArithmeticOp::Divide, signature, operands)
}

fn build_negate(
    signature: &FunSignature,
    operands: Vec<Box<dyn ScalarExecutor>>,
) -> MdxResult<Box<dyn ScalarExecutor>> {
    let mut operands = operands.into_iter();
    let operand = operands
        .next()
        .ok_or_else(|| MdxError::internal("negation requires one operand"))?;
    let return_type = Type::from_category(signature.return_category());
    Ok(Box::new(NegateExecutor::new(operand, return_type)))
}

fn build_concat(
    _signature: &FunSignature,
    operands: Vec<Box<dyn ScalarExecutor>>,
) -> MdxResult<Box<dyn ScalarExecutor>> {
    Ok(Box::new(ConcatExecutor::new(operands)))
}

fn build_compare(
    op: CompareOp,
    signature: &FunSignature,
    operands: Vec<Box<dyn ScalarExecutor>>,
) -> MdxResult<Box<dyn ScalarExecutor>> {
    let category = signature
        .parameter_categories()
        .first()
        .copied()
        .unwrap_or(Category::Value);
    let (left, right) = take_two(signature, operands)?;
    Ok(Box::new(CompareExecutor::new(op, left, right, category)))
}

fn build_equal(
    signature: &FunSignature,
    operands: Vec<Box<dyn ScalarExecutor>>,
) -> MdxResult<Box<dyn ScalarExecutor>> {
    build_compare(CompareOp::Equal, signature, operands)
}

fn build_not_equal(
    signature: &FunSignature,
    operands: Vec<Box<dyn ScalarExecutor>>,
) -> MdxResult<Box<dyn ScalarExecutor>> {
    build_compare(CompareOp::NotEqual, signature, operands)
}

pub static ADD_INFO: FunInfo = FunInfo::new(
    "+",
    "<Numeric Expression> + <Numeric Expression>",
    "Adds two numbers.",
    Syntax::Infix,
);
pub static SUBTRACT_INFO: FunInfo = FunInfo::new(
    "-",
    "<Numeric Expression> - <Numeric Expression>",
    "Subtracts two numbers.",
    Syntax::Infix,
);
pub static MULTIPLY_INFO: FunInfo = FunInfo::new(
    "*",
    "<Numeric Expression> * <Numeric Expression>",
    "Multiplies two numbers.",
    Syntax::Infix,
);
pub static DIVIDE_INFO: FunInfo = FunInfo::new(
    "/",
    "<Numeric Expression> / <Numeric Expression>",
    "Divides two numbers.",
    Syntax::Infix,
);
pub static NEGATE_INFO: FunInfo = FunInfo::new(
    "-",
    "- <Numeric Expression>",
    "Returns the negative of a number.",
    Syntax::Prefix,
);
pub static CONCAT_INFO: FunInfo = FunInfo::new(
    "||",
    "<String> || <String>",
    "Concatenates two strings.",
    Syntax::Infix,
);
pub static EQUAL_INFO: FunInfo = FunInfo::new(
    "=",
    "<Expression> = <Expression>",
    "Returns whether two expressions are equal.",
    Syntax::Infix,
);
pub static NOT_EQUAL_INFO: FunInfo = FunInfo::new(
    "<>",
    "<Expression> <> <Expression>",
    "Returns whether two expressions are not equal.",
    Syntax::Infix,
);

const INTEGERS: &[Category] = &[Category::Integer, Category::Integer];
const NUMERICS: &[Category] = &[Category::Numeric, Category::Numeric];
const STRINGS: &[Category] = &[Category::String, Category::String];
const LOGICALS: &[Category] = &[Category::Logical, Category::Logical];

/// Every fixed-signature operator overload, in registration order.
pub static OPERATORS: &[SimpleResolver] = &[
    SimpleResolver::new(&ADD_INFO, Category::Integer, INTEGERS, build_add),
    SimpleResolver::new(&ADD_INFO, Category::Numeric, NUMERICS, build_add),
    SimpleResolver::new(&SUBTRACT_INFO, Category::Integer, INTEGERS, build_subtract),
    SimpleResolver::new(&SUBTRACT_INFO, Category::Numeric, NUMERICS, build_subtract),
    SimpleResolver::new(&MULTIPLY_INFO, Category::Integer, INTEGERS, build_multiply),
    SimpleResolver::new(&MULTIPLY_INFO, Category::Numeric, NUMERICS, build_multiply),
    SimpleResolver::new(&DIVIDE_INFO, Category::Numeric, NUMERICS, build_divide),
    SimpleResolver::new(&NEGATE_INFO, Category::Integer, &[Category::Integer], build_negate),
    SimpleResolver::new(&NEGATE_INFO, Category::Numeric, &[Category::Numeric], build_negate),
    SimpleResolver::new(&CONCAT_INFO, Category::String, STRINGS, build_concat),
    SimpleResolver::new(&EQUAL_INFO, Category::Logical, NUMERICS, build_equal),
    SimpleResolver::new(&EQUAL_INFO, Category::Logical, STRINGS, build_equal),
    SimpleResolver::new(&EQUAL_INFO, Category::Logical, LOGICALS, build_equal),
    SimpleResolver::new(&NOT_EQUAL_INFO, Category::Logical, NUMERICS, build_not_equal),
    SimpleResolver::new(&NOT_EQUAL_INFO, Category::Logical, STRINGS, build_not_equal),
    SimpleResolver::new(&NOT_EQUAL_INFO, Category::Logical, LOGICALS, build_not_equal),
];
