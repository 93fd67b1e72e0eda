// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Compatibility Tests
// End-to-end checks of operator resolution, compilation and evaluation
// through the public engine API.

#[path = "../common/mod.rs"]
pub mod common;

pub mod functions;
