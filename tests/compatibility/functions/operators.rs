// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Operator Compatibility Tests

use crate::compatibility::common::ExprRunner;
use mdx_rust::core::error::MdxError;
use mdx_rust::core::mdx_engine::MdxEngine;
use mdx_rust::core::value::ScalarValue;
use mdx_rust::query_api::definition::{Category, Type};
use mdx_rust::query_api::expression::{Case, Cast, Expression};

fn as_integer(expr: Expression) -> Expression {
    Cast::new(expr, "INTEGER").into_expression()
}

fn cast_text(text: &str, type_name: &str) -> Expression {
    Cast::new(Expression::string(text), type_name).into_expression()
}

#[test]
fn arithmetic_on_literals() {
    let cases = [
        ("+", 7, 2, ScalarValue::Integer(9)),
        ("-", 7, 2, ScalarValue::Integer(5)),
        ("*", 7, 2, ScalarValue::Integer(14)),
        ("/", 7, 2, ScalarValue::Double(3.5)),
    ];
    for (op, a, b, expected) in cases {
        let expr = Expression::infix(op, Expression::integer(a), Expression::integer(b));
        let runner = ExprRunner::new(&expr);
        assert_eq!(runner.value().unwrap(), expected, "{expr}");
        assert_eq!(runner.return_type(), Type::NUMERIC);
    }
}

#[test]
fn arithmetic_integer_overload_for_integer_operands() {
    let expr = Expression::infix(
        "+",
        as_integer(Expression::string("40")),
        as_integer(Expression::string("2")),
    );
    let runner = ExprRunner::new(&expr);
    assert_eq!(runner.return_type(), Type::INTEGER);
    assert_eq!(runner.integer().unwrap(), Some(42));
}

#[test]
fn arithmetic_mixed_operands() {
    let expr = Expression::infix("*", Expression::integer(3), Expression::double(0.5));
    assert_eq!(
        ExprRunner::new(&expr).double().unwrap(),
        Some(1.5)
    );
}

#[test]
fn arithmetic_overflow_is_promoted() {
    let expr = Expression::infix(
        "*",
        Expression::integer(i32::MAX),
        Expression::integer(2),
    );
    assert_eq!(
        ExprRunner::new(&expr).value().unwrap(),
        ScalarValue::Double(f64::from(i32::MAX) * 2.0)
    );
}

#[test]
fn arithmetic_null_operand() {
    let expr = Expression::infix(
        "+",
        Expression::parameter("X", Category::Numeric),
        Expression::integer(1),
    );
    let runner = ExprRunner::new(&expr).with_parameter("X", ScalarValue::Null);
    assert_eq!(runner.value().unwrap(), ScalarValue::Null);
}

#[test]
fn arithmetic_rejects_text() {
    let engine = MdxEngine::new();
    let expr = Expression::infix("+", Expression::string("1"), Expression::integer(1));
    let error = engine.validate(&expr).unwrap_err();
    assert_eq!(
        error.to_string(),
        "No function matches signature '<String> + <Numeric>'"
    );
}

#[test]
fn negation() {
    let expr = Expression::prefix("-", Expression::double(2.5));
    assert_eq!(ExprRunner::new(&expr).double().unwrap(), Some(-2.5));

    let expr = Expression::prefix("-", as_integer(Expression::string("4")));
    let runner = ExprRunner::new(&expr);
    assert_eq!(runner.return_type(), Type::INTEGER);
    assert_eq!(runner.value().unwrap(), ScalarValue::Integer(-4));
}

// ============================================================================
// CAST OPERANDS
// ============================================================================

/// CAST('1.5' AS NUMERIC) + 1
#[test]
fn arithmetic_over_numeric_cast() {
    let expr = Expression::infix("+", cast_text("1.5", "NUMERIC"), Expression::integer(1));
    let runner = ExprRunner::new(&expr);
    assert_eq!(runner.value().unwrap(), ScalarValue::Double(2.5));
    assert_eq!(runner.double().unwrap(), Some(2.5));
}

/// CAST('true' AS BOOLEAN) + 1
#[test]
fn arithmetic_over_boolean_cast() {
    let expr = Expression::infix("+", cast_text("true", "BOOLEAN"), Expression::integer(1));
    assert_eq!(ExprRunner::new(&expr).value().unwrap(), ScalarValue::Integer(2));
}

#[test]
fn arithmetic_integer_overload_overflow_is_promoted() {
    let expr = Expression::infix(
        "+",
        cast_text("2147483647", "INTEGER"),
        cast_text("1", "INTEGER"),
    );
    let runner = ExprRunner::new(&expr);
    assert_eq!(runner.return_type(), Type::INTEGER);
    assert_eq!(runner.value().unwrap(), ScalarValue::Double(2147483648.0));
}

#[test]
fn arithmetic_over_unparseable_cast_fails() {
    let expr = Expression::infix("*", cast_text("ten", "NUMERIC"), Expression::integer(2));
    assert!(matches!(
        ExprRunner::new(&expr).value(),
        Err(MdxError::CannotConvert {
            target_type: Type::NUMERIC,
            ..
        })
    ));
}

/// -CAST('2.5' AS NUMERIC)
#[test]
fn negation_of_numeric_cast() {
    let expr = Expression::prefix("-", cast_text("2.5", "NUMERIC"));
    let runner = ExprRunner::new(&expr);
    assert_eq!(runner.return_type(), Type::NUMERIC);
    assert_eq!(runner.value().unwrap(), ScalarValue::Double(-2.5));
}

/// (CASE WHEN true THEN CAST('40' AS INTEGER) END) + 2
#[test]
fn arithmetic_over_case_with_cast_branch() {
    let case = Case::searched()
        .when(Expression::boolean(true), cast_text("40", "INTEGER"))
        .into_expression();
    let expr = Expression::infix("+", case, Expression::integer(2));
    assert_eq!(ExprRunner::new(&expr).value().unwrap(), ScalarValue::Integer(42));
}

#[test]
fn equality_over_cast_operands() {
    let expr = Expression::infix("=", cast_text("7", "INTEGER"), Expression::integer(7));
    assert_eq!(ExprRunner::new(&expr).boolean().unwrap(), Some(true));
}

// ============================================================================
// CONCATENATION
// ============================================================================

#[test]
fn concatenation() {
    let expr = Expression::infix(
        "||",
        Expression::string("Hello, "),
        Expression::infix("||", Expression::string("MDX"), Expression::string("!")),
    );
    assert_eq!(
        ExprRunner::new(&expr).string().unwrap(),
        Some("Hello, MDX!".to_string())
    );
}

#[test]
fn concatenation_with_null() {
    let expr = Expression::infix(
        "||",
        Expression::string("a"),
        Expression::parameter("S", Category::String),
    );
    let runner = ExprRunner::new(&expr).with_parameter("S", ScalarValue::Null);
    assert_eq!(runner.value().unwrap(), ScalarValue::Null);
}

#[test]
fn concatenation_rejects_numbers() {
    let engine = MdxEngine::new();
    let expr = Expression::infix("||", Expression::string("a"), Expression::integer(1));
    assert!(matches!(
        engine.validate(&expr),
        Err(MdxError::NoFunctionMatches { .. })
    ));
}

#[test]
fn equality() {
    let eq = |a: Expression, b: Expression| {
        ExprRunner::new(&Expression::infix("=", a, b))
            .boolean()
            .unwrap()
    };
    assert_eq!(eq(Expression::integer(1), Expression::double(1.0)), Some(true));
    assert_eq!(eq(Expression::string("a"), Expression::string("b")), Some(false));
    assert_eq!(eq(Expression::boolean(true), Expression::boolean(true)), Some(true));

    let ne = Expression::infix("<>", Expression::integer(1), Expression::integer(2));
    assert_eq!(ExprRunner::new(&ne).boolean().unwrap(), Some(true));
}

#[test]
fn equality_with_null_operand() {
    let expr = Expression::infix(
        "=",
        Expression::parameter("X", Category::Numeric),
        Expression::integer(1),
    );
    let runner = ExprRunner::new(&expr).with_parameter("X", ScalarValue::Null);
    assert_eq!(runner.value().unwrap(), ScalarValue::Null);
    assert_eq!(runner.boolean().unwrap(), None);
}
