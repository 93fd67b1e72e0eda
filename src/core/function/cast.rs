// SPDX-License-Identifier: MIT OR Apache-2.0

//! `CAST(expression AS type)`.

use std::sync::Arc;

use super::fun_def::{FunDef, FunInfo, FunSignature, Resolver};
use crate::core::compiler::ExpCompiler;
use crate::core::error::{MdxError, MdxResult};
use crate::core::executor::{CastExecutor, ScalarExecutor};
use crate::core::validation::{ConversionCounter, Validator};
use crate::query_api::definition::Category;
use crate::query_api::expression::cast::CAST;
use crate::query_api::expression::{Expression, ResolvedFunCall, Syntax};

pub static CAST_INFO: FunInfo = FunInfo::new(
    CAST,
    "Cast(<Expression> AS <Type>)",
    "Converts values to another type.",
    Syntax::Cast,
);

pub static CAST_RESOLVER: CastResolver = CastResolver;

/// Category a CAST type name maps to, ignoring case.
pub fn cast_target_category(type_name: &str) -> Option<Category> {
    match type_name.to_ascii_uppercase().as_str() {
        "STRING" => Some(Category::String),
        "NUMERIC" => Some(Category::Numeric),
        "BOOLEAN" => Some(Category::Logical),
        "INTEGER" => Some(Category::Integer),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CastResolver;

impl Resolver for CastResolver {
    fn info(&self) -> &'static FunInfo {
        &CAST_INFO
    }

    fn resolve(
        &self,
        args: &[Expression],
        _validator: &dyn Validator,
        _counter: &mut ConversionCounter,
    ) -> MdxResult<Option<Arc<dyn FunDef>>> {
        let [_, type_arg] = args else {
            return Ok(None);
        };
        let Some(literal) = type_arg.as_literal() else {
            return Ok(None);
        };
        let return_category = match literal.text() {
            Some(type_name) => cast_target_category(type_name)
                .ok_or_else(|| MdxError::cast_invalid_type(type_name))?,
            None => return Err(MdxError::cast_invalid_type(literal.to_string())),
        };
        Ok(Some(Arc::new(CastFunDef {
            signature: FunSignature::from_args(&CAST_INFO, return_category, args),
        })))
    }
}

#[derive(Debug)]
pub struct CastFunDef {
    signature: FunSignature,
}

impl FunDef for CastFunDef {
    fn signature(&self) -> &FunSignature {
        &self.signature
    }

    fn compile_call(
        &self,
        call: &ResolvedFunCall,
        compiler: &ExpCompiler<'_>,
    ) -> MdxResult<Box<dyn ScalarExecutor>> {
        let inner = call
            .arg(0)
            .ok_or_else(|| MdxError::internal("CAST call without an operand"))?;
        let inner_executor = compiler.compile_scalar(inner, false)?;
        Ok(Box::new(CastExecutor::new(
            inner_executor,
            call.return_type,
            compiler.config().trim_whitespace,
        )))
    }
}
