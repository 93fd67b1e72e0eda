// SPDX-License-Identifier: MIT OR Apache-2.0

//! Function definitions and the resolver protocol.
//!
//! A [`Resolver`] decides whether its operator applies to an argument
//! vector. When it does, it hands back a [`FunDef`] whose [`FunSignature`]
//! records the derived return category and the argument categories; the
//! compiler later asks that definition to lower the resolved call.

use serde::Serialize;
use std::fmt::Debug;
use std::sync::Arc;

use crate::core::compiler::ExpCompiler;
use crate::core::error::MdxResult;
use crate::core::executor::ScalarExecutor;
use crate::core::validation::{ConversionCounter, Validator};
use crate::query_api::definition::{Category, Type};
use crate::query_api::expression::{Expression, ResolvedFunCall, Syntax};

/// Descriptive record of an operator, shared by all of its overloads.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct FunInfo {
    pub name: &'static str,
    pub signature: &'static str,
    pub description: &'static str,
    pub syntax: Syntax,
}

impl FunInfo {
    pub const fn new(
        name: &'static str,
        signature: &'static str,
        description: &'static str,
        syntax: Syntax,
    ) -> Self {
        Self {
            name,
            signature,
            description,
            syntax,
        }
    }
}

/// Concrete signature derived by a resolver for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct FunSignature {
    info: &'static FunInfo,
    return_category: Category,
    parameter_categories: Vec<Category>,
}

impl FunSignature {
    pub fn new(
        info: &'static FunInfo,
        return_category: Category,
        parameter_categories: Vec<Category>,
    ) -> Self {
        Self {
            info,
            return_category,
            parameter_categories,
        }
    }

    /// Signature whose parameter categories are those of `args` as written.
    pub fn from_args(info: &'static FunInfo, return_category: Category, args: &[Expression]) -> Self {
        Self::new(
            info,
            return_category,
            args.iter().map(Expression::category).collect(),
        )
    }

    #[inline]
    pub fn info(&self) -> &'static FunInfo {
        self.info
    }

    #[inline]
    pub fn return_category(&self) -> Category {
        self.return_category
    }

    #[inline]
    pub fn parameter_categories(&self) -> &[Category] {
        &self.parameter_categories
    }
}

/// A resolved operator, able to compile calls to itself.
pub trait FunDef: Debug + Send + Sync {
    fn signature(&self) -> &FunSignature;

    fn info(&self) -> &'static FunInfo {
        self.signature().info()
    }

    fn return_category(&self) -> Category {
        self.signature().return_category()
    }

    fn return_type(&self) -> Type {
        Type::from_category(self.return_category())
    }

    fn parameter_categories(&self) -> &[Category] {
        self.signature().parameter_categories()
    }

    /// Lowers `call` to an executor. `call.fun_def` is this definition.
    fn compile_call(
        &self,
        call: &ResolvedFunCall,
        compiler: &ExpCompiler<'_>,
    ) -> MdxResult<Box<dyn ScalarExecutor>>;
}

/// Matches argument vectors against one operator form.
///
/// `Ok(None)` means the operator does not apply and the table should try
/// other candidates; `Err` aborts resolution. Every implicit conversion the
/// match relies on is charged to `counter`.
pub trait Resolver: Debug + Send + Sync {
    fn info(&self) -> &'static FunInfo;

    fn resolve(
        &self,
        args: &[Expression],
        validator: &dyn Validator,
        counter: &mut ConversionCounter,
    ) -> MdxResult<Option<Arc<dyn FunDef>>>;
}
