//! Arbitrary-precision sums rendered as decimal text.
//!
//! ## Purpose
//!
//! This module adds non-negative integers of unbounded magnitude and renders
//! the result in base 10.
//!
//! ## Design notes
//!
//! * **Representation**: Operands are [`BigUint`], so no fixed-width overflow
//!   is possible and negative operands are unrepresentable.
//! * **Rendering**: Output is canonical decimal: no sign, no leading zeros,
//!   and `"0"` for zero.
//!
//! ## Non-goals
//!
//! * This module does not validate decimal text (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use num_bigint::BigUint;

/// Add two big integers and render the sum in base 10.
#[inline]
pub fn sum_to_decimal(a: &BigUint, b: &BigUint) -> String {
    (a + b).to_str_radix(10)
}

/// Parse validated decimal digits into a big integer.
///
/// Returns `None` when `digits` contains anything other than ASCII digits
/// or is empty.
#[inline]
pub fn parse_decimal(digits: &str) -> Option<BigUint> {
    BigUint::parse_bytes(digits.as_bytes(), 10)
}
