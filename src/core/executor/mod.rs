// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compiled expression executors.

pub mod case_executor;
pub mod cast_executor;
pub mod condition;
pub mod constant_executor;
pub mod expression_executor;
pub mod function;
pub mod parameter_executor;

#[cfg(test)]
pub(crate) mod testing;

pub use self::case_executor::{CaseMatchExecutor, WhenClauseExecutor};
pub use self::cast_executor::CastExecutor;
pub use self::condition::{CaseTestExecutor, CompareExecutor, CompareOp};
pub use self::constant_executor::ConstantExecutor;
pub use self::expression_executor::ScalarExecutor;
pub use self::function::{ArithmeticExecutor, ArithmeticOp, ConcatExecutor, NegateExecutor};
pub use self::parameter_executor::ParameterExecutor;
