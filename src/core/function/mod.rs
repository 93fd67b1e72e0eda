// SPDX-License-Identifier: MIT OR Apache-2.0

//! Operator definitions, their resolvers, and the table that dispatches
//! between them.

pub mod case_match;
pub mod cast;
pub mod fun_def;
pub mod operators;
pub mod table;

pub use self::case_match::{CaseMatchResolver, CASE_MATCH_RESOLVER};
pub use self::case_test::{CaseTestResolver, CASE_TEST_RESOLVER};
pub use self::cast::{cast_target_category, CastResolver, CAST_RESOLVER};
pub use self::fun_def::{FunDef, FunInfo, FunSignature, Resolver};
pub use self::operators::{SimpleResolver, OPERATORS};
pub use self::table::{FunctionDescriptor, FunctionTable};
