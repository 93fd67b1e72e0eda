// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Function Compatibility Tests
// Organized into logical modules for better maintainability.

pub mod cast_functions;
pub mod operators;
pub mod resolution;
