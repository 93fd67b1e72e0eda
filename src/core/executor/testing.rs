// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::core::error::MdxResult;
use crate::core::evaluator::Evaluator;
use crate::core::executor::expression_executor::ScalarExecutor;
use crate::core::value::ScalarValue;
use crate::query_api::definition::Type;

/// Wraps an executor and counts how often it is evaluated.
#[derive(Debug)]
pub struct CountingExecutor {
    inner: Box<dyn ScalarExecutor>,
    count: Arc<AtomicUsize>,
}

impl CountingExecutor {
    pub fn new(inner: Box<dyn ScalarExecutor>) -> Self {
        Self {
            inner,
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn count(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.count)
    }
}

impl ScalarExecutor for CountingExecutor {
    fn evaluate(&self, evaluator: &Evaluator) -> MdxResult<ScalarValue> {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.inner.evaluate(evaluator)
    }

    fn return_type(&self) -> Type {
        self.inner.return_type()
    }

    fn calcs(&self) -> Vec<&dyn ScalarExecutor> {
        vec![self.inner.as_ref()]
    }
}
