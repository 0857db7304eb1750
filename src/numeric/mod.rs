// ============================================================================
// Numeric Module
// Exact digit handling for masked monetary amounts
// ============================================================================
//
// This module provides:
// - DigitList: unsigned digit sequence with a decimal point position
// - fixed_literal / parse_fixed_literal: numbers and unmasked text rendered
//   as fixed-point literals
//
// Design principles:
// - Masked strings are built from digits, never from floating-point output
// - Rounding is half away from zero
// - No operation panics or returns an error

mod digits;
mod fixed_literal;

pub use digits::DigitList;
pub use fixed_literal::{decimal_literal, fixed_literal, parse_fixed_literal};
