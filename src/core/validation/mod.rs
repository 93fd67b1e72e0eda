// SPDX-License-Identifier: MIT OR Apache-2.0

//! Expression validation.
//!
//! Provides the conversion oracle resolvers consult while matching an
//! argument vector, and the validator that walks an expression tree and
//! binds every call to a function definition:
//! - [`conversion`] - category conversion costs and the conversion counter
//! - [`expression_validator`] - bottom-up resolution against a function table

pub mod conversion;
pub mod expression_validator;

pub use conversion::{conversion_cost, ConversionCounter, TypeValidator};
pub use expression_validator::ExpressionValidator;

use crate::query_api::definition::Category;
use crate::query_api::expression::Expression;

/// Conversion oracle used during resolution.
pub trait Validator {
    /// Whether `expr` can be implicitly converted to `target`. A successful
    /// check adds the cost of the conversion to `counter`.
    fn can_convert(
        &self,
        expr: &Expression,
        target: Category,
        counter: &mut ConversionCounter,
    ) -> bool;
}
