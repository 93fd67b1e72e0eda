// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod compiler;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod executor;
pub mod function;
pub mod mdx_engine;
pub mod validation;
pub mod value;

pub use self::compiler::ExpCompiler;
pub use self::error::{MdxError, MdxResult};
pub use self::evaluator::Evaluator;
pub use self::mdx_engine::MdxEngine;
pub use self::value::ScalarValue;
