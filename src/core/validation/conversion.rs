// SPDX-License-Identifier: MIT OR Apache-2.0

//! Implicit conversions between categories and their cost.
//!
//! Costs rank competing signatures for the same call; lower is better.
//!
//! | From \ To | same | Numeric | Integer | Logical | String |
//! |-----------|------|---------|---------|---------|--------|
//! | Integer   | 0    | 1       | -       | 2       | no     |
//! | Numeric   | 0    | -       | 2       | 2       | no     |
//! | Logical   | 0    | 2       | 2       | -       | no     |
//! | String    | 0    | no      | no      | no      | -      |
//! | Symbol    | 0    | no      | no      | no      | 1      |
//! | Value     | 0    | 1       | 1       | 1       | 1      |
//!
//! Every category converts to `Value` for free.

use super::Validator;
use crate::query_api::definition::Category;
use crate::query_api::expression::Expression;

pub const WIDENING_COST: u32 = 1;
pub const NARROWING_COST: u32 = 2;
pub const LOGICAL_COST: u32 = 2;
pub const SYMBOL_COST: u32 = 1;
pub const UNTYPED_COST: u32 = 1;

/// Cost of converting `from` to `to`, or `None` when no implicit
/// conversion exists.
pub const fn conversion_cost(from: Category, to: Category) -> Option<u32> {
    use Category::*;
    match (from, to) {
        (_, Value) => Some(0),
        (Integer, Integer)
        | (Numeric, Numeric)
        | (Logical, Logical)
        | (String, String)
        | (Symbol, Symbol) => Some(0),
        (Integer, Numeric) => Some(WIDENING_COST),
        (Numeric, Integer) => Some(NARROWING_COST),
        (Integer | Numeric, Logical) | (Logical, Integer | Numeric) => Some(LOGICAL_COST),
        (Symbol, String) => Some(SYMBOL_COST),
        (Value, _) => Some(UNTYPED_COST),
        _ => None,
    }
}

/// Accumulated cost of the implicit conversions a resolver needed.
///
/// Only ever grows; the function table compares counters of competing
/// resolvers and keeps the cheapest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ConversionCounter {
    count: u32,
}

impl ConversionCounter {
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    #[inline]
    pub fn add(&mut self, cost: u32) {
        self.count = self.count.saturating_add(cost);
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.count
    }
}

/// Validator deciding convertibility from the categories alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeValidator;

impl Validator for TypeValidator {
    fn can_convert(
        &self,
        expr: &Expression,
        target: Category,
        counter: &mut ConversionCounter,
    ) -> bool {
        match conversion_cost(expr.category(), target) {
            Some(cost) => {
                counter.add(cost);
                true
            }
            None => false,
        }
    }
}
