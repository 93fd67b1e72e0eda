// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{ConversionCounter, TypeValidator, Validator};
use crate::core::error::MdxResult;
use crate::core::function::FunctionTable;
use crate::query_api::definition::Category;
use crate::query_api::expression::{Expression, ResolvedFunCall};

/// Resolves every call in an expression tree against a [`FunctionTable`].
///
/// Arguments are resolved before the call that holds them, so a resolver
/// always sees typed arguments.
#[derive(Debug, Clone, Copy)]
pub struct ExpressionValidator<'a> {
    table: &'a FunctionTable,
    types: TypeValidator,
}

impl<'a> ExpressionValidator<'a> {
    pub fn new(table: &'a FunctionTable) -> Self {
        Self {
            table,
            types: TypeValidator,
        }
    }

    pub fn validate(&self, expr: &Expression) -> MdxResult<Expression> {
        match expr {
            Expression::UnresolvedCall(call) => {
                let args = call
                    .args
                    .iter()
                    .map(|arg| self.validate(arg))
                    .collect::<MdxResult<Vec<_>>>()?;
                let fun_def = self.table.resolve(&call.name, call.syntax, &args, self)?;
                Ok(Expression::ResolvedCall(ResolvedFunCall::new(fun_def, args)))
            }
            Expression::ResolvedCall(_) | Expression::Literal(_) | Expression::Parameter(_) => {
                Ok(expr.clone())
            }
        }
    }
}

impl Validator for ExpressionValidator<'_> {
    fn can_convert(
        &self,
        expr: &Expression,
        target: Category,
        counter: &mut ConversionCounter,
    ) -> bool {
        self.types.can_convert(expr, target, counter)
    }
}
