// SPDX-License-Identifier: MIT OR Apache-2.0

//! Expression tree handed from the parser to the validator and compiler.

use std::fmt;
use std::sync::Arc;

use super::constant::Literal;
use super::syntax::Syntax;
use crate::core::function::FunDef;
use crate::core::value::ScalarValue;
use crate::query_api::definition::{Category, Type};

#[derive(Clone, Debug)]
pub enum Expression {
    Literal(Literal),
    Parameter(Parameter),
    UnresolvedCall(UnresolvedFunCall),
    ResolvedCall(ResolvedFunCall),
}

/// Named value looked up in the evaluator at evaluation time.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub category: Category,
}

/// Call as emitted by the parser, before the validator picks a function.
#[derive(Clone, Debug)]
pub struct UnresolvedFunCall {
    pub name: String,
    pub syntax: Syntax,
    pub args: Vec<Expression>,
}

/// Call bound to a function definition by the validator.
#[derive(Clone)]
pub struct ResolvedFunCall {
    pub fun_def: Arc<dyn FunDef>,
    pub return_type: Type,
    pub args: Vec<Expression>,
}

impl ResolvedFunCall {
    pub fn new(fun_def: Arc<dyn FunDef>, args: Vec<Expression>) -> Self {
        let return_type = fun_def.return_type();
        Self {
            fun_def,
            return_type,
            args,
        }
    }

    #[inline]
    pub fn arg(&self, index: usize) -> Option<&Expression> {
        self.args.get(index)
    }

    pub fn name(&self) -> &str {
        self.fun_def.info().name
    }
}

impl fmt::Debug for ResolvedFunCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedFunCall")
            .field("name", &self.fun_def.info().name)
            .field("syntax", &self.fun_def.info().syntax)
            .field("return_type", &self.return_type)
            .field("args", &self.args)
            .finish()
    }
}

impl Expression {
    pub fn literal(value: impl Into<ScalarValue>) -> Self {
        Expression::Literal(Literal::new(value.into()))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::literal(ScalarValue::String(value.into()))
    }

    pub fn integer(value: i32) -> Self {
        Self::literal(ScalarValue::Integer(value))
    }

    pub fn double(value: f64) -> Self {
        Self::literal(ScalarValue::Double(value))
    }

    pub fn boolean(value: bool) -> Self {
        Self::literal(ScalarValue::Boolean(value))
    }

    pub fn null() -> Self {
        Expression::Literal(Literal::null())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Expression::Literal(Literal::symbol(name))
    }

    pub fn parameter(name: impl Into<String>, category: Category) -> Self {
        Expression::Parameter(Parameter {
            name: name.into(),
            category,
        })
    }

    pub fn call(name: impl Into<String>, syntax: Syntax, args: Vec<Expression>) -> Self {
        Expression::UnresolvedCall(UnresolvedFunCall {
            name: name.into(),
            syntax,
            args,
        })
    }

    pub fn function(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Self::call(name, Syntax::Function, args)
    }

    pub fn infix(op: impl Into<String>, left: Expression, right: Expression) -> Self {
        Self::call(op, Syntax::Infix, vec![left, right])
    }

    pub fn prefix(op: impl Into<String>, operand: Expression) -> Self {
        Self::call(op, Syntax::Prefix, vec![operand])
    }

    /// Category of the expression. Unresolved calls have not been typed yet
    /// and report [`Category::Value`].
    pub fn category(&self) -> Category {
        match self {
            Expression::Literal(literal) => literal.category(),
            Expression::Parameter(parameter) => parameter.category,
            Expression::UnresolvedCall(_) => Category::Value,
            Expression::ResolvedCall(call) => call.return_type.category(),
        }
    }

    pub fn expression_type(&self) -> Type {
        match self {
            Expression::ResolvedCall(call) => call.return_type,
            other => Type::from_category(other.category()),
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Expression::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn is_null_literal(&self) -> bool {
        self.as_literal().is_some_and(Literal::is_null)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(literal) => write!(f, "{literal}"),
            Expression::Parameter(parameter) => f.write_str(&parameter.name),
            Expression::UnresolvedCall(call) => call.syntax.unparse(&call.name, &call.args, f),
            Expression::ResolvedCall(call) => {
                let info = call.fun_def.info();
                info.syntax.unparse(info.name, &call.args, f)
            }
        }
    }
}
