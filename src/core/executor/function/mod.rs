// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod math_functions;
pub mod string_functions;

pub use self::math_functions::{ArithmeticExecutor, ArithmeticOp, NegateExecutor};
pub use self::string_functions::ConcatExecutor;
