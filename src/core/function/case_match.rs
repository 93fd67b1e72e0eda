// SPDX-License-Identifier: MIT OR Apache-2.0

//! Matched CASE: `CASE value WHEN match THEN result ... [ELSE default] END`.
//!
//! Arguments arrive flat as `[value, m1, r1, ..., mn, rn, default?]`; an
//! even count means the default is present.

use log::debug;
use std::sync::Arc;

use super::fun_def::{FunDef, FunInfo, FunSignature, Resolver};
use crate::core::compiler::ExpCompiler;
use crate::core::error::{MdxError, MdxResult};
use crate::core::executor::{CaseMatchExecutor, ConstantExecutor, ScalarExecutor, WhenClauseExecutor};
use crate::core::validation::{ConversionCounter, Validator};
use crate::query_api::expression::case::CASE_MATCH;
use crate::query_api::expression::{Expression, ResolvedFunCall, Syntax};

pub static CASE_MATCH_INFO: FunInfo = FunInfo::new(
    CASE_MATCH,
    "Case <Expression> When <Expression> Then <Expression> [...] [Else <Expression>] End",
    "Evaluates various expressions, and returns the corresponding expression for the first which matches a particular value.",
    Syntax::Case,
);

pub static CASE_MATCH_RESOLVER: CaseMatchResolver = CaseMatchResolver;

#[derive(Debug, Clone, Copy, Default)]
pub struct CaseMatchResolver;

impl Resolver for CaseMatchResolver {
    fn info(&self) -> &'static FunInfo {
        &CASE_MATCH_INFO
    }

    fn resolve(
        &self,
        args: &[Expression],
        validator: &dyn Validator,
        counter: &mut ConversionCounter,
    ) -> MdxResult<Option<Arc<dyn FunDef>>> {
        if args.len() < 3 {
            return Ok(None);
        }
        let value_category = args[0].category();
        let return_category = args[2].category();

        if !validator.can_convert(&args[0], value_category, counter) {
            return Ok(None);
        }
        let rest = &args[1..];
        let mut pairs = rest.chunks_exact(2);
        for pair in pairs.by_ref() {
            if !validator.can_convert(&pair[0], value_category, counter) {
                debug!("{CASE_MATCH}: '{}' does not convert to {value_category}", pair[0]);
                return Ok(None);
            }
            if !validator.can_convert(&pair[1], return_category, counter) {
                debug!("{CASE_MATCH}: '{}' does not convert to {return_category}", pair[1]);
                return Ok(None);
            }
        }
        if let [default] = pairs.remainder() {
            if !validator.can_convert(default, return_category, counter) {
                debug!("{CASE_MATCH}: default '{default}' does not convert to {return_category}");
                return Ok(None);
            }
        }

        Ok(Some(Arc::new(CaseMatchFunDef {
            signature: FunSignature::from_args(&CASE_MATCH_INFO, return_category, args),
        })))
    }
}

#[derive(Debug)]
pub struct CaseMatchFunDef {
    signature: FunSignature,
}

impl FunDef for CaseMatchFunDef {
    fn signature(&self) -> &FunSignature {
        &self.signature
    }

    fn compile_call(
        &self,
        call: &ResolvedFunCall,
        compiler: &ExpCompiler<'_>,
    ) -> MdxResult<Box<dyn ScalarExecutor>> {
        let (value, rest) = call
            .args
            .split_first()
            .ok_or_else(|| MdxError::internal("CASE call without a value argument"))?;
        let value_executor = compiler.compile_scalar(value, true)?;

        let mut pairs = rest.chunks_exact(2);
        let when_executors = pairs
            .by_ref()
            .map(|pair| {
                Ok(WhenClauseExecutor::new(
                    compiler.compile_scalar(&pair[0], true)?,
                    compiler.compile_scalar(&pair[1], true)?,
                ))
            })
            .collect::<MdxResult<Vec<_>>>()?;

        let default_executor = match pairs.remainder() {
            [default] => compiler.compile_scalar(default, true)?,
            _ => Box::new(ConstantExecutor::typed_null(call.return_type)),
        };

        Ok(Box::new(CaseMatchExecutor::new(
            value_executor,
            when_executors,
            default_executor,
            call.return_type,
            compiler.config().numeric_equality,
        )))
    }
}
