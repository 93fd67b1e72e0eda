// SPDX-License-Identifier: MIT OR Apache-2.0
//
// CAST Function Compatibility Tests

use crate::compatibility::common::ExprRunner;
use mdx_rust::core::config::FunctionConfig;
use mdx_rust::core::error::MdxError;
use mdx_rust::core::mdx_engine::MdxEngine;
use mdx_rust::core::value::ScalarValue;
use mdx_rust::query_api::definition::{Category, Type};
use mdx_rust::query_api::expression::{Cast, Expression, Syntax};

fn cast(expr: Expression, type_name: &str) -> Expression {
    Cast::new(expr, type_name).into_expression()
}

fn concat(left: &str, right: &str) -> Expression {
    Expression::infix("||", Expression::string(left), Expression::string(right))
}

// ============================================================================
// TYPED ENTRY POINTS
// ============================================================================

/// CAST('12.' || '56' AS NUMERIC)
#[test]
fn cast_concatenated_text_to_numeric() {
    let runner = ExprRunner::new(&cast(concat("12.", "56"), "NUMERIC"));
    assert_eq!(runner.double().unwrap(), Some(12.56));
    assert_eq!(runner.return_type(), Type::NUMERIC);
}

/// CAST('tr' || 'ue' AS BOOLEAN)
#[test]
fn cast_concatenated_text_to_boolean() {
    let runner = ExprRunner::new(&cast(concat("tr", "ue"), "BOOLEAN"));
    assert_eq!(runner.boolean().unwrap(), Some(true));
}

/// CAST(1 + 2 AS STRING)
#[test]
fn cast_sum_to_string() {
    let sum = Expression::infix("+", Expression::integer(1), Expression::integer(2));
    let runner = ExprRunner::new(&cast(sum, "STRING"));
    assert_eq!(runner.string().unwrap(), Some("3".to_string()));
}

/// CAST('foo' AS INTEGER)
#[test]
fn cast_unparseable_text_to_integer_fails() {
    let runner = ExprRunner::new(&cast(Expression::string("foo"), "INTEGER"));
    let error = runner.integer().unwrap_err();
    assert_eq!(
        error,
        MdxError::CannotConvert {
            value: "foo".to_string(),
            target_type: Type::INTEGER,
        }
    );
    assert_eq!(
        error.to_string(),
        "cannot convert value 'foo' to targetType 'INTEGER'"
    );
}

#[test]
fn cast_generic_entry_never_fails() {
    let runner = ExprRunner::new(&cast(Expression::string("foo"), "INTEGER"));
    assert_eq!(runner.value().unwrap(), ScalarValue::from("foo"));
}

#[test]
fn cast_number_to_integer_truncates() {
    let runner = ExprRunner::new(&cast(Expression::double(9.99), "INTEGER"));
    assert_eq!(runner.integer().unwrap(), Some(9));
    let runner = ExprRunner::new(&cast(Expression::double(-9.99), "INTEGER"));
    assert_eq!(runner.integer().unwrap(), Some(-9));
}

#[test]
fn cast_boolean_to_number_fails() {
    let runner = ExprRunner::new(&cast(Expression::boolean(true), "NUMERIC"));
    assert!(matches!(
        runner.double(),
        Err(MdxError::CannotConvert {
            target_type: Type::NUMERIC,
            ..
        })
    ));
}

#[test]
fn cast_number_to_boolean_fails() {
    let runner = ExprRunner::new(&cast(Expression::integer(1), "BOOLEAN"));
    assert!(runner.boolean().is_err());
}

#[test]
fn cast_boolean_to_string() {
    let runner = ExprRunner::new(&cast(Expression::boolean(false), "STRING"));
    assert_eq!(runner.string().unwrap(), Some("false".to_string()));
}

#[test]
fn cast_null_parameter_is_null_everywhere() {
    let expr = cast(Expression::parameter("Missing", Category::String), "INTEGER");
    let runner = ExprRunner::new(&expr).with_parameter("Missing", ScalarValue::Null);
    assert_eq!(runner.string().unwrap(), None);
    assert_eq!(runner.integer().unwrap(), None);
    assert_eq!(runner.double().unwrap(), None);
    assert_eq!(runner.boolean().unwrap(), None);
}

#[test]
fn cast_null_literal_is_rejected_at_compile_time() {
    let engine = MdxEngine::new();
    let result = engine.prepare(&cast(Expression::null(), "STRING"));
    assert!(matches!(result, Err(MdxError::NullNotAllowed { .. })));
}

#[test]
fn cast_trims_whitespace_unless_disabled() {
    let expr = cast(Expression::string(" 42 "), "INTEGER");
    assert_eq!(ExprRunner::new(&expr).integer().unwrap(), Some(42));

    let engine = MdxEngine::with_config(FunctionConfig::new().with_trim_whitespace(false));
    let runner = ExprRunner::with_engine(&engine, &expr);
    assert!(matches!(
        runner.integer(),
        Err(MdxError::CannotConvert { .. })
    ));
}

// ============================================================================
// ROUND TRIPS
// ============================================================================

const ROUND_TRIP_VALUES: &[f64] = &[
    0.0,
    -0.0,
    1.0,
    -3.0,
    0.1,
    12.56,
    1.0 / 3.0,
    123456789.125,
    1e300,
    -2.5e-8,
    5e-324,
    f64::MAX,
    f64::MIN_POSITIVE,
];

/// CAST(CAST(n AS STRING) AS NUMERIC) through the passthrough path
#[test]
fn cast_round_trip_nested() {
    for &n in ROUND_TRIP_VALUES {
        let expr = cast(cast(Expression::double(n), "STRING"), "NUMERIC");
        assert_eq!(ExprRunner::new(&expr).double().unwrap(), Some(n), "n = {n}");
    }
}

/// The string produced by CAST(n AS STRING) parses back to n
#[test]
fn cast_round_trip_through_text() {
    for &n in ROUND_TRIP_VALUES {
        let text = ExprRunner::new(&cast(Expression::double(n), "STRING"))
            .string()
            .unwrap()
            .unwrap();
        let back = cast(Expression::parameter("Text", Category::String), "NUMERIC");
        let runner = ExprRunner::new(&back).with_parameter("Text", text.as_str());
        assert_eq!(runner.double().unwrap(), Some(n), "n = {n}, text = {text}");
    }
}

#[test]
fn cast_integer_round_trip_through_text() {
    for n in [0, 1, -1, 42, i32::MAX, i32::MIN] {
        let text = ExprRunner::new(&cast(Expression::integer(n), "STRING"))
            .string()
            .unwrap()
            .unwrap();
        let back = cast(Expression::parameter("Text", Category::String), "INTEGER");
        let runner = ExprRunner::new(&back).with_parameter("Text", text);
        assert_eq!(runner.integer().unwrap(), Some(n));
    }
}

// ============================================================================
// RESOLUTION
// ============================================================================

#[test]
fn cast_type_names_are_case_insensitive() {
    for (name, expected) in [
        ("string", Type::STRING),
        ("Numeric", Type::NUMERIC),
        ("boolean", Type::BOOLEAN),
        ("INTEGER", Type::INTEGER),
    ] {
        let runner = ExprRunner::new(&cast(Expression::string("1"), name));
        assert_eq!(runner.return_type(), expected);
    }
}

#[test]
fn cast_unknown_type_name_is_invalid() {
    let engine = MdxEngine::new();
    for name in ["Date", "DOUBLE", "Str", ""] {
        let result = engine.validate(&cast(Expression::integer(1), name));
        assert_eq!(result.unwrap_err(), MdxError::cast_invalid_type(name));
    }
}

#[test]
fn cast_type_as_quoted_string_is_accepted() {
    let expr = Expression::call(
        "Cast",
        Syntax::Cast,
        vec![Expression::string("7"), Expression::string("Integer")],
    );
    assert_eq!(ExprRunner::new(&expr).integer().unwrap(), Some(7));
}

#[test]
fn cast_non_literal_type_does_not_match() {
    let engine = MdxEngine::new();
    let expr = Expression::call(
        "Cast",
        Syntax::Cast,
        vec![
            Expression::integer(1),
            Expression::parameter("TypeName", Category::String),
        ],
    );
    assert!(matches!(
        engine.validate(&expr),
        Err(MdxError::NoFunctionMatches { .. })
    ));
}

#[test]
fn cast_unparse() {
    let expr = cast(concat("12.", "56"), "NUMERIC");
    assert_eq!(expr.to_string(), "CAST(('12.' || '56') AS NUMERIC)");
}
