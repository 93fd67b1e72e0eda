// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Function Resolution Compatibility Tests
// Registry dispatch, conversion costs, configuration and the catalog.

use std::io::Write;
use std::sync::Arc;

use crate::compatibility::common::{init_logging, ExprRunner};
use mdx_rust::core::compiler::ExpCompiler;
use mdx_rust::core::config::{FlatConfig, NumericEquality, PropertySource};
use mdx_rust::core::error::{MdxError, MdxResult};
use mdx_rust::core::executor::{ConstantExecutor, ScalarExecutor};
use mdx_rust::core::function::{FunDef, FunInfo, FunSignature, FunctionTable, Resolver};
use mdx_rust::core::mdx_engine::MdxEngine;
use mdx_rust::core::validation::{ConversionCounter, Validator};
use mdx_rust::core::value::ScalarValue;
use mdx_rust::query_api::definition::{Category, Type};
use mdx_rust::query_api::expression::{Case, Expression, ResolvedFunCall, Syntax};

// ============================================================================
// CUSTOM RESOLVER
// ============================================================================

static ANSWER_INFO: FunInfo = FunInfo::new(
    "Answer",
    "Answer()",
    "Returns the answer.",
    Syntax::Function,
);

#[derive(Debug)]
struct AnswerResolver;

static ANSWER_RESOLVER: AnswerResolver = AnswerResolver;

impl Resolver for AnswerResolver {
    fn info(&self) -> &'static FunInfo {
        &ANSWER_INFO
    }

    fn resolve(
        &self,
        args: &[Expression],
        _validator: &dyn Validator,
        _counter: &mut ConversionCounter,
    ) -> MdxResult<Option<Arc<dyn FunDef>>> {
        if !args.is_empty() {
            return Ok(None);
        }
        Ok(Some(Arc::new(AnswerFunDef {
            signature: FunSignature::new(&ANSWER_INFO, Category::Numeric, Vec::new()),
        })))
    }
}

#[derive(Debug)]
struct AnswerFunDef {
    signature: FunSignature,
}

impl FunDef for AnswerFunDef {
    fn signature(&self) -> &FunSignature {
        &self.signature
    }

    fn compile_call(
        &self,
        call: &ResolvedFunCall,
        _compiler: &ExpCompiler<'_>,
    ) -> MdxResult<Box<dyn ScalarExecutor>> {
        Ok(Box::new(ConstantExecutor::new(
            ScalarValue::Integer(42),
            call.return_type,
        )))
    }
}

#[test]
fn resolution_custom_resolver() {
    let mut engine = MdxEngine::new();
    engine.register(&ANSWER_RESOLVER);
    let expr = Expression::infix(
        "+",
        Expression::function("answer", vec![]),
        Expression::integer(1),
    );
    let runner = ExprRunner::with_engine(&engine, &expr);
    assert_eq!(runner.integer().unwrap(), Some(43));
}

#[test]
fn resolution_unknown_function() {
    let engine = MdxEngine::new();
    let result = engine.validate(&Expression::function("Answer", vec![]));
    assert!(matches!(
        result,
        Err(MdxError::UnknownFunction {
            syntax: Syntax::Function,
            ..
        })
    ));
}

#[test]
fn resolution_syntax_is_part_of_the_key() {
    let engine = MdxEngine::new();
    // `Cast` exists only in CAST form
    let result = engine.validate(&Expression::function(
        "Cast",
        vec![Expression::integer(1), Expression::symbol("STRING")],
    ));
    assert!(matches!(result, Err(MdxError::UnknownFunction { .. })));
}

#[test]
fn resolution_prefers_cheaper_overload() {
    let engine = MdxEngine::new();
    let literal_sum = engine
        .validate(&Expression::infix(
            "+",
            Expression::integer(1),
            Expression::integer(2),
        ))
        .unwrap();
    assert_eq!(literal_sum.expression_type(), Type::NUMERIC);

    let integer_sum = engine
        .validate(&Expression::infix(
            "+",
            Expression::parameter("A", Category::Integer),
            Expression::parameter("B", Category::Integer),
        ))
        .unwrap();
    assert_eq!(integer_sum.expression_type(), Type::INTEGER);
}

#[test]
fn resolution_tie_is_ambiguous() {
    let engine = MdxEngine::new();
    let result = engine.validate(&Expression::infix("=", Expression::null(), Expression::null()));
    assert!(matches!(result, Err(MdxError::AmbiguousFunction { .. })));
}

#[test]
fn resolution_validate_then_compile() {
    let engine = MdxEngine::new();
    let expr = Case::matched(Expression::integer(1))
        .when(Expression::integer(1), Expression::string("one"))
        .into_expression();
    assert!(matches!(
        engine.compile(&expr),
        Err(MdxError::UnresolvedCall { .. })
    ));
    let resolved = engine.validate(&expr).unwrap();
    assert_eq!(resolved.to_string(), "CASE 1 WHEN 1 THEN 'one' END");
    let executor = engine.compile(&resolved).unwrap();
    assert_eq!(executor.return_type(), Type::STRING);
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn config_from_toml_file() {
    init_logging();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[case]\nnumeric-equality = \"strict\"\n\n[cast]\ntrim-whitespace = false").unwrap();

    let engine = MdxEngine::from_toml_file(file.path()).unwrap();
    assert_eq!(engine.config().numeric_equality, NumericEquality::Strict);
    assert!(!engine.config().trim_whitespace);

    let expr = Case::matched(Expression::integer(1))
        .when(Expression::double(1.0), Expression::string("one"))
        .otherwise(Expression::string("other"))
        .into_expression();
    assert_eq!(
        ExprRunner::with_engine(&engine, &expr).value().unwrap(),
        ScalarValue::from("other")
    );
}

#[test]
fn config_session_overrides_file() {
    let mut config = FlatConfig::from_toml_str("[case]\nnumeric-equality = \"strict\"\n").unwrap();
    config.set("case.numeric-equality", "normalized", PropertySource::Session);
    config.set("case.numeric-equality", "strict", PropertySource::RustDefault);
    let engine = MdxEngine::from_flat_config(&config).unwrap();
    assert_eq!(engine.config().numeric_equality, NumericEquality::Normalized);
}

#[test]
fn config_invalid_value() {
    let config = FlatConfig::from_toml_str("[cast]\ntrim-whitespace = \"sometimes\"\n").unwrap();
    match MdxEngine::from_flat_config(&config) {
        Err(MdxError::Configuration { config_key, .. }) => {
            assert_eq!(config_key.as_deref(), Some("cast.trim-whitespace"));
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn config_missing_file() {
    let result = MdxEngine::from_toml_file("/nonexistent/mdx-engine.toml");
    assert!(matches!(result, Err(MdxError::Configuration { .. })));
}

// ============================================================================
// CATALOG
// ============================================================================

#[test]
fn catalog_lists_standard_operators() {
    let table = FunctionTable::standard();
    let catalog = table.catalog();
    let names: Vec<&str> = catalog.iter().map(|d| d.name).collect();
    for name in ["_CaseMatch", "_CaseTest", "Cast", "+", "-", "||", "="] {
        assert!(names.contains(&name), "{name} missing from {names:?}");
    }

    let case_match = catalog.iter().find(|d| d.name == "_CaseMatch").unwrap();
    assert_eq!(
        case_match.signature,
        "Case <Expression> When <Expression> Then <Expression> [...] [Else <Expression>] End"
    );
    assert_eq!(case_match.syntax, Syntax::Case);

    let json: serde_json::Value = serde_json::from_str(&table.catalog_json().unwrap()).unwrap();
    let cast = json
        .as_array()
        .unwrap()
        .iter()
        .find(|d| d["name"] == "Cast")
        .unwrap();
    assert_eq!(cast["signature"], "Cast(<Expression> AS <Type>)");
    assert_eq!(cast["syntax"], "Cast");
}
