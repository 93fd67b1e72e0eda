// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod case;
pub mod cast;
pub mod constant;
#[allow(clippy::module_inception)]
pub mod expression;
pub mod syntax;

pub use case::{Case, WhenClause};
pub use cast::Cast;
pub use constant::Literal;
pub use expression::{Expression, Parameter, ResolvedFunCall, UnresolvedFunCall};
pub use syntax::Syntax;
