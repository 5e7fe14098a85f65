//! Leibniz series partial sums for approximating π.
//!
//! ## Purpose
//!
//! This module computes partial sums of the Leibniz series
//! `π = 4 * (1 - 1/3 + 1/5 - 1/7 + ...)`.
//!
//! ## Design notes
//!
//! * **Term order**: Terms are added one at a time for `k = 0, 1, 2, ...`.
//!   Floating-point rounding therefore depends only on the iteration count.
//! * **Term shape**: Each term is formed as `(sign / (2k + 1)) * 4` before it
//!   is added to the running sum.
//! * **Overflow**: The denominator is built in `u64`, so every `u32`
//!   iteration count is representable.
//!
//! ## Invariants
//!
//! * Zero iterations yield exactly zero.
//! * The result is finite for every iteration count.
//!
//! ## Non-goals
//!
//! * This module does not accelerate convergence (no Euler transform,
//!   no pairwise summation).

// External dependencies
use num_traits::Float;

// ============================================================================
// Leibniz Series
// ============================================================================

/// Partial sum of the first `iterations` terms of the Leibniz series for π.
///
/// # Formula
///
/// ```text
/// pi_n = 4 * sum_{k=0}^{n-1} (-1)^k / (2k + 1)
/// ```
pub fn leibniz_pi<T: Float>(iterations: u32) -> T {
    let four = T::from(4.0).unwrap_or_else(T::one);
    let mut pi = T::zero();
    let mut sign = T::one();

    for k in 0..u64::from(iterations) {
        let denom = T::from(2 * k + 1).unwrap_or_else(T::infinity);
        pi = pi + (sign / denom) * four;
        sign = -sign;
    }

    pi
}
