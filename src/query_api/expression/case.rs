// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::query_api::expression::syntax::Syntax;
use crate::query_api::expression::Expression;

/// Name the matched CASE form is registered under.
pub const CASE_MATCH: &str = "_CaseMatch";
/// Name the searched CASE form is registered under.
pub const CASE_TEST: &str = "_CaseTest";

/// CASE expression for conditional logic
/// Supports both Searched CASE (CASE WHEN condition THEN result...)
/// and Matched CASE (CASE operand WHEN value THEN result...)
///
/// Lowered to a single call with [`Syntax::Case`] whose arguments are laid
/// out flat: `[operand?, when1, then1, ..., whenN, thenN, else?]`.
#[derive(Clone, Debug)]
pub struct Case {
    /// Optional operand for matched CASE (CASE expr WHEN val...)
    pub operand: Option<Box<Expression>>,
    /// WHEN clauses: (condition/value, result)
    pub when_clauses: Vec<WhenClause>,
    /// ELSE result; a typed null is used when absent
    pub else_result: Option<Box<Expression>>,
}

/// A single WHEN clause in a CASE expression
#[derive(Clone, Debug)]
pub struct WhenClause {
    pub condition: Box<Expression>,
    pub result: Box<Expression>,
}

impl Case {
    pub fn matched(operand: Expression) -> Self {
        Self {
            operand: Some(Box::new(operand)),
            when_clauses: Vec::new(),
            else_result: None,
        }
    }

    pub fn searched() -> Self {
        Self {
            operand: None,
            when_clauses: Vec::new(),
            else_result: None,
        }
    }

    pub fn when(mut self, condition: Expression, result: Expression) -> Self {
        self.when_clauses.push(WhenClause::new(condition, result));
        self
    }

    pub fn otherwise(mut self, else_result: Expression) -> Self {
        self.else_result = Some(Box::new(else_result));
        self
    }

    pub fn into_expression(self) -> Expression {
        let name = if self.operand.is_some() {
            CASE_MATCH
        } else {
            CASE_TEST
        };
        let mut args = Vec::with_capacity(2 * self.when_clauses.len() + 2);
        if let Some(operand) = self.operand {
            args.push(*operand);
        }
        for clause in self.when_clauses {
            args.push(*clause.condition);
            args.push(*clause.result);
        }
        if let Some(else_result) = self.else_result {
            args.push(*else_result);
        }
        Expression::call(name, Syntax::Case, args)
    }
}

impl From<Case> for Expression {
    fn from(case: Case) -> Self {
        case.into_expression()
    }
}

impl WhenClause {
    pub fn new(condition: Expression, result: Expression) -> Self {
        Self {
            condition: Box::new(condition),
            result: Box::new(result),
        }
    }
}
