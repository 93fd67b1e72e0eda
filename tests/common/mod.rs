// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code)]

use mdx_rust::core::error::MdxResult;
use mdx_rust::core::evaluator::Evaluator;
use mdx_rust::core::executor::ScalarExecutor;
use mdx_rust::core::mdx_engine::MdxEngine;
use mdx_rust::core::value::ScalarValue;
use mdx_rust::query_api::definition::Type;
use mdx_rust::query_api::expression::Expression;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Prepares one expression and evaluates it against a fixed evaluator.
pub struct ExprRunner {
    executor: Box<dyn ScalarExecutor>,
    evaluator: Evaluator,
}

impl ExprRunner {
    pub fn new(expr: &Expression) -> Self {
        Self::with_engine(&MdxEngine::new(), expr)
    }

    pub fn with_engine(engine: &MdxEngine, expr: &Expression) -> Self {
        init_logging();
        let executor = engine
            .prepare(expr)
            .unwrap_or_else(|e| panic!("failed to prepare {expr}: {e}"));
        Self {
            executor,
            evaluator: Evaluator::new(),
        }
    }

    pub fn with_parameter(mut self, name: &str, value: impl Into<ScalarValue>) -> Self {
        self.evaluator.set_parameter(name, value);
        self
    }

    pub fn return_type(&self) -> Type {
        self.executor.return_type()
    }

    pub fn executor(&self) -> &dyn ScalarExecutor {
        self.executor.as_ref()
    }

    pub fn value(&self) -> MdxResult<ScalarValue> {
        self.executor.evaluate(&self.evaluator)
    }

    pub fn string(&self) -> MdxResult<Option<String>> {
        self.executor.evaluate_string(&self.evaluator)
    }

    pub fn integer(&self) -> MdxResult<Option<i32>> {
        self.executor.evaluate_integer(&self.evaluator)
    }

    pub fn double(&self) -> MdxResult<Option<f64>> {
        self.executor.evaluate_double(&self.evaluator)
    }

    pub fn boolean(&self) -> MdxResult<Option<bool>> {
        self.executor.evaluate_boolean(&self.evaluator)
    }
}
