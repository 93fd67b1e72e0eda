// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod case_expression_executor;
pub mod compare_executor;

pub use self::case_expression_executor::CaseTestExecutor;
pub use self::compare_executor::{CompareExecutor, CompareOp};
