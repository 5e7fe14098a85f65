//! Factorials in arbitrary and fixed precision.
//!
//! ## Purpose
//!
//! This module computes `n!` by iterative multiplication from 2 up to `n`,
//! either into an arbitrary-precision [`BigUint`] or into a `u64` with
//! explicit overflow detection.
//!
//! ## Design notes
//!
//! * **Arbitrary precision**: [`factorial_big`] never overflows.
//! * **Fixed width**: [`factorial_u64`] stops at the first multiplication that
//!   leaves the `u64` range; `20!` is the largest value that fits.
//!
//! ## Invariants
//!
//! * `0! == 1! == 1`.

// External dependencies
use num_bigint::BigUint;
use num_traits::One;

/// Largest `n` whose factorial fits in a `u64`.
pub const MAX_U64_FACTORIAL_ARG: u64 = 20;

/// Compute `n!` with an arbitrary-precision accumulator.
pub fn factorial_big(n: u64) -> BigUint {
    let mut result = BigUint::one();
    for i in 2..=n {
        result *= i;
    }
    result
}

/// Compute `n!` in `u64`, returning `None` on overflow.
pub fn factorial_u64(n: u64) -> Option<u64> {
    if n > MAX_U64_FACTORIAL_ARG {
        return None;
    }
    (2..=n).try_fold(1u64, |acc, i| acc.checked_mul(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_width_boundary() {
        assert_eq!(factorial_u64(MAX_U64_FACTORIAL_ARG), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial_u64(MAX_U64_FACTORIAL_ARG + 1), None);
    }

    #[test]
    fn big_agrees_with_fixed_width() {
        for n in 0..=MAX_U64_FACTORIAL_ARG {
            assert_eq!(factorial_big(n), BigUint::from(factorial_u64(n).unwrap()));
        }
    }
}
