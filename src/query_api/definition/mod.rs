// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod category;

pub use category::{Category, Type};
