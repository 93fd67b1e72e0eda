// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lowers validated expressions to executor trees.

use log::trace;

use crate::core::config::FunctionConfig;
use crate::core::error::{MdxError, MdxResult};
use crate::core::executor::{ConstantExecutor, ParameterExecutor, ScalarExecutor};
use crate::query_api::definition::Type;
use crate::query_api::expression::Expression;

/// Expression compiler.
///
/// Holds no state of its own beyond the configuration it passes to
/// operator definitions, so every compiled tree is independent of its
/// siblings.
#[derive(Debug, Clone, Copy)]
pub struct ExpCompiler<'a> {
    config: &'a FunctionConfig,
}

impl<'a> ExpCompiler<'a> {
    pub fn new(config: &'a FunctionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a FunctionConfig {
        self.config
    }

    /// Compiles an expression where a bare NULL is acceptable.
    pub fn compile(&self, expr: &Expression) -> MdxResult<Box<dyn ScalarExecutor>> {
        self.compile_scalar(expr, true)
    }

    /// Compiles `expr` to a scalar executor.
    ///
    /// With `nullable == false` a bare `NULL` literal is rejected; nulls
    /// produced at evaluation time still reach the typed entry points.
    pub fn compile_scalar(
        &self,
        expr: &Expression,
        nullable: bool,
    ) -> MdxResult<Box<dyn ScalarExecutor>> {
        match expr {
            Expression::Literal(literal) => {
                if literal.is_null() && !nullable {
                    return Err(MdxError::null_not_allowed(
                        "NULL literal cannot be compiled as a non-nullable scalar",
                    ));
                }
                Ok(Box::new(ConstantExecutor::new(
                    literal.value().clone(),
                    Type::from_category(literal.category()),
                )))
            }
            Expression::Parameter(parameter) => Ok(Box::new(ParameterExecutor::new(
                parameter.name.clone(),
                Type::from_category(parameter.category),
            ))),
            Expression::ResolvedCall(call) => {
                trace!("Compiling {} call {}", call.fun_def.info().syntax, expr);
                call.fun_def.compile_call(call, self)
            }
            Expression::UnresolvedCall(call) => Err(MdxError::unresolved_call(&call.name)),
        }
    }
}
