//! High-level API for the numeric routines.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points. Each routine
//! validates its inputs through the engine layer and then dispatches to the
//! matching math kernel.
//!
//! ## Design notes
//!
//! * **Stateless**: Every routine is a pure function of its arguments and is
//!   safe to call concurrently.
//! * **Validated**: Preconditions are checked before any computation, so no
//!   partial result is ever produced alongside an error.
//! * **Type-Safe**: Float routines are generic over `Float`; integer
//!   routines use `BigUint` where magnitudes are unbounded.
//!
//! ## Key concepts
//!
//! * **Typed failures**: Each precondition maps to one [`DigitsError`] variant.
//! * **Arbitrary precision**: Factorials and sums never overflow.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_bigint::BigUint;
use num_traits::Float;
use tracing::{debug, trace};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::{arithmetic, bigsum, factorial as fact, matrix, series};

// Publicly re-exported types
pub use crate::primitives::errors::DigitsError;
pub use crate::primitives::matrix::{Operand, Shape};

// ============================================================================
// Pi Approximation
// ============================================================================

/// Approximate π with the first `iterations` terms of the Leibniz series.
///
/// Zero iterations return exactly `0.0`. Accuracy improves slowly: the error
/// after `n` terms is roughly `1 / n`.
///
/// ```
/// use digits_calculator::prelude::*;
///
/// assert_eq!(calculate_pi(0), 0.0);
/// assert_eq!(calculate_pi(1), 4.0);
/// assert!((calculate_pi(1_000_000) - std::f64::consts::PI).abs() < 1e-3);
/// ```
pub fn calculate_pi(iterations: u32) -> f64 {
    trace!(iterations, "leibniz series");
    series::leibniz_pi(iterations)
}

// ============================================================================
// Matrix Product
// ============================================================================

/// Multiply two rectangular matrices stored as rows.
///
/// # Errors
///
/// * [`DigitsError::EmptyMatrix`] if either matrix has no rows or an empty row.
/// * [`DigitsError::RaggedMatrix`] if either matrix has rows of unequal length.
/// * [`DigitsError::DimensionMismatch`] if the columns of `a` differ from the
///   rows of `b`.
///
/// ```
/// use digits_calculator::prelude::*;
///
/// let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
/// let b = vec![vec![5.0, 6.0], vec![7.0, 8.0]];
/// let c = matrix_multiply(&a, &b)?;
/// assert_eq!(c, vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
/// # Result::<(), DigitsError>::Ok(())
/// ```
pub fn matrix_multiply<T, RA, RB>(a: &[RA], b: &[RB]) -> Result<Vec<Vec<T>>, DigitsError>
where
    T: Float,
    RA: AsRef<[T]>,
    RB: AsRef<[T]>,
{
    let (left, right) = Validator::validate_product::<T, RA, RB>(a, b)?;
    trace!(%left, %right, "matrix product");
    Ok(matrix::multiply(a, b, left, right))
}

/// Build the `n x n` identity matrix.
///
/// ```
/// use digits_calculator::prelude::*;
///
/// let m = vec![vec![1.5, -2.0, 0.25]];
/// assert_eq!(matrix_multiply(&m, &identity::<f64>(3))?, m);
/// # Result::<(), DigitsError>::Ok(())
/// ```
pub fn identity<T: Float>(n: usize) -> Vec<Vec<T>> {
    matrix::identity(n)
}

// ============================================================================
// Safe Arithmetic
// ============================================================================

/// Divide `a` by `b`, rejecting a zero divisor.
///
/// Any non-zero divisor follows IEEE-754 semantics, including NaN and
/// infinite operands.
///
/// # Errors
///
/// * [`DigitsError::DivisionByZero`] if `b` is `0.0` or `-0.0`.
pub fn divide<T: Float>(a: T, b: T) -> Result<T, DigitsError> {
    Validator::validate_divisor(b)?;
    Ok(arithmetic::quotient(a, b))
}

/// Square root of `x`, rejecting negative values.
///
/// # Errors
///
/// * [`DigitsError::NegativeRadicand`] if `x < 0`.
pub fn safe_sqrt<T: Float>(x: T) -> Result<T, DigitsError> {
    Validator::validate_radicand(x)?;
    Ok(arithmetic::root(x))
}

// ============================================================================
// Factorial
// ============================================================================

/// Compute `n!` exactly, for any non-negative `n`.
///
/// # Errors
///
/// * [`DigitsError::NegativeArgument`] if `n < 0`.
///
/// ```
/// use digits_calculator::prelude::*;
///
/// assert_eq!(factorial(20)?.to_string(), "2432902008176640000");
/// assert_eq!(factorial(25)?.to_string(), "15511210043330985984000000");
/// # Result::<(), DigitsError>::Ok(())
/// ```
pub fn factorial(n: i64) -> Result<BigUint, DigitsError> {
    let n = Validator::validate_factorial_argument(n)?;
    trace!(n, "factorial");
    Ok(fact::factorial_big(n))
}

/// Compute `n!` as a `u64`.
///
/// # Errors
///
/// * [`DigitsError::NegativeArgument`] if `n < 0`.
/// * [`DigitsError::FactorialOverflow`] if `n!` exceeds `u64::MAX` (`n > 20`).
pub fn checked_factorial(n: i64) -> Result<u64, DigitsError> {
    let m = Validator::validate_factorial_argument(n)?;
    fact::factorial_u64(m).ok_or_else(|| {
        debug!(routine = "checked_factorial", value = n, "factorial overflowed u64");
        DigitsError::FactorialOverflow { value: n }
    })
}

// ============================================================================
// Big Sums
// ============================================================================

/// Add two non-negative integers of any size and render the sum in base 10.
///
/// ```
/// use digits_calculator::prelude::*;
///
/// assert_eq!(sum_as_string(999_999_999u32, 1u32), "1000000000");
/// assert_eq!(sum_as_string(u128::MAX, 1u8), "340282366920938463463374607431768211456");
/// ```
pub fn sum_as_string(a: impl Into<BigUint>, b: impl Into<BigUint>) -> String {
    bigsum::sum_to_decimal(&a.into(), &b.into())
}

/// Add two non-negative integers given as decimal text.
///
/// Surrounding ASCII whitespace is ignored and leading zeros are accepted.
///
/// # Errors
///
/// * [`DigitsError::InvalidInteger`] if either operand is empty or contains
///   anything other than ASCII digits (signs included).
pub fn sum_decimal_strings(a: &str, b: &str) -> Result<String, DigitsError> {
    let a = parse_operand(a)?;
    let b = parse_operand(b)?;
    Ok(bigsum::sum_to_decimal(&a, &b))
}

fn parse_operand(text: &str) -> Result<BigUint, DigitsError> {
    let digits = Validator::validate_decimal(text)?;
    bigsum::parse_decimal(digits).ok_or_else(|| DigitsError::InvalidInteger {
        input: text.into(),
    })
}
