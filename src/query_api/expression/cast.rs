// SPDX-License-Identifier: MIT OR Apache-2.0

//! CAST Expression
//!
//! Represents a type conversion expression: CAST(expr AS type)

use super::expression::Expression;
use super::syntax::Syntax;

/// Name the CAST operator is registered under.
pub const CAST: &str = "Cast";

/// CAST expression for type conversion
///
/// MDX syntax: `CAST(expression AS target_type)`
///
/// The target type travels as a symbol literal so that the resolver can
/// reject unknown names itself. Recognized names are `STRING`, `NUMERIC`,
/// `BOOLEAN` and `INTEGER`, in any case.
#[derive(Clone, Debug)]
pub struct Cast {
    /// The expression to convert
    pub expression: Box<Expression>,
    /// The target type name as written
    pub type_name: String,
}

impl Cast {
    /// Create a new Cast expression
    pub fn new(expression: Expression, type_name: impl Into<String>) -> Self {
        Self {
            expression: Box::new(expression),
            type_name: type_name.into(),
        }
    }

    pub fn into_expression(self) -> Expression {
        Expression::call(
            CAST,
            Syntax::Cast,
            vec![*self.expression, Expression::symbol(self.type_name)],
        )
    }
}

impl From<Cast> for Expression {
    fn from(cast: Cast) -> Self {
        cast.into_expression()
    }
}
