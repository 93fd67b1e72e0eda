// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entry point tying the function table, validator and compiler together.

use log::debug;
use std::path::Path;

use crate::core::compiler::ExpCompiler;
use crate::core::config::{FlatConfig, FunctionConfig};
use crate::core::error::MdxResult;
use crate::core::evaluator::Evaluator;
use crate::core::executor::ScalarExecutor;
use crate::core::function::{FunctionTable, Resolver};
use crate::core::validation::ExpressionValidator;
use crate::core::value::ScalarValue;
use crate::query_api::expression::Expression;

/// Owns the function table and configuration an expression is resolved
/// and compiled against.
///
/// ```
/// use mdx_rust::core::evaluator::Evaluator;
/// use mdx_rust::core::mdx_engine::MdxEngine;
/// use mdx_rust::query_api::expression::{Cast, Expression};
///
/// let engine = MdxEngine::new();
/// let expr = Cast::new(Expression::string("42"), "INTEGER").into_expression();
/// let executor = engine.prepare(&expr).unwrap();
/// assert_eq!(executor.evaluate_integer(&Evaluator::new()).unwrap(), Some(42));
/// ```
#[derive(Debug)]
pub struct MdxEngine {
    table: FunctionTable,
    config: FunctionConfig,
}

impl MdxEngine {
    /// Engine with the standard function table and default configuration.
    pub fn new() -> Self {
        Self::with_table(FunctionTable::standard(), FunctionConfig::default())
    }

    pub fn with_config(config: FunctionConfig) -> Self {
        Self::with_table(FunctionTable::standard(), config)
    }

    pub fn with_table(table: FunctionTable, config: FunctionConfig) -> Self {
        Self { table, config }
    }

    pub fn from_flat_config(config: &FlatConfig) -> MdxResult<Self> {
        Ok(Self::with_config(FunctionConfig::from_flat_config(config)?))
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> MdxResult<Self> {
        Ok(Self::with_config(FunctionConfig::from_toml_file(path)?))
    }

    /// Adds a resolver; call before any expression is validated.
    pub fn register(&mut self, resolver: &'static dyn Resolver) {
        debug!("Registering resolver for '{}'", resolver.info().name);
        self.table.register(resolver);
    }

    pub fn function_table(&self) -> &FunctionTable {
        &self.table
    }

    pub fn config(&self) -> &FunctionConfig {
        &self.config
    }

    /// Resolves every call in `expr`.
    pub fn validate(&self, expr: &Expression) -> MdxResult<Expression> {
        ExpressionValidator::new(&self.table).validate(expr)
    }

    /// Compiles an already validated expression.
    pub fn compile(&self, expr: &Expression) -> MdxResult<Box<dyn ScalarExecutor>> {
        ExpCompiler::new(&self.config).compile(expr)
    }

    /// Validates then compiles.
    pub fn prepare(&self, expr: &Expression) -> MdxResult<Box<dyn ScalarExecutor>> {
        let resolved = self.validate(expr)?;
        debug!("Resolved expression {}", resolved);
        self.compile(&resolved)
    }

    /// Prepares `expr` and evaluates it once through the generic entry point.
    pub fn evaluate(&self, expr: &Expression, evaluator: &Evaluator) -> MdxResult<ScalarValue> {
        self.prepare(expr)?.evaluate(evaluator)
    }
}

impl Default for MdxEngine {
    fn default() -> Self {
        Self::new()
    }
}
