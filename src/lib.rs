// SPDX-License-Identifier: MIT OR Apache-2.0

//! MDX scalar operator resolution and compilation.
//!
//! `query_api` holds the expression tree handed over by a parser, `core`
//! holds the validator, the function table, the compiler and the
//! executors the compiled calls evaluate through.

pub mod core;
pub mod query_api;
