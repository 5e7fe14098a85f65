//! Input validation for the numeric routines.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before any kernel in
//! the `math` layer: zero divisors, negative radicands and factorial
//! arguments, malformed matrices, and malformed decimal text.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordering**: Matrix checks run per operand (emptiness, then raggedness)
//!   before the cross-operand dimension check.
//! * **Generics**: Float validation is generic over `Float` types.
//! * **Logging**: Every rejection emits a `debug` event through `tracing`.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free (apart from
//!   tracing events).
//! * A value that passes validation is safe to hand to the matching kernel.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair invalid inputs.
//! * This module does not perform the computations themselves.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::borrow::ToOwned;

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::primitives::errors::DigitsError;
use crate::primitives::matrix::{Operand, Shape};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for routine inputs.
///
/// Provides static methods for validating each routine's preconditions. All
/// methods fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Scalar Validation
    // ========================================================================

    /// Validate that a divisor is not zero (either signed zero).
    pub fn validate_divisor<T: Float>(divisor: T) -> Result<(), DigitsError> {
        if divisor == T::zero() {
            debug!(routine = "divide", "rejected zero divisor");
            return Err(DigitsError::DivisionByZero);
        }
        Ok(())
    }

    /// Validate that a radicand is not negative.
    ///
    /// # Notes
    ///
    /// * `-0.0` and NaN are not less than zero and pass.
    pub fn validate_radicand<T: Float>(x: T) -> Result<(), DigitsError> {
        if x < T::zero() {
            let value = x.to_f64().unwrap_or(f64::NAN);
            debug!(routine = "safe_sqrt", value, "rejected negative radicand");
            return Err(DigitsError::NegativeRadicand { value });
        }
        Ok(())
    }

    /// Validate a factorial argument, returning it as an unsigned count.
    pub fn validate_factorial_argument(n: i64) -> Result<u64, DigitsError> {
        u64::try_from(n).map_err(|_| {
            debug!(routine = "factorial", value = n, "rejected negative argument");
            DigitsError::NegativeArgument { value: n }
        })
    }

    // ========================================================================
    // Matrix Validation
    // ========================================================================

    /// Validate that a matrix is non-empty and rectangular, returning its shape.
    ///
    /// # Checks
    ///
    /// 1. At least one row.
    /// 2. No row without columns.
    /// 3. Every row as long as row 0.
    pub fn validate_matrix<T, R>(matrix: &[R], operand: Operand) -> Result<Shape, DigitsError>
    where
        R: AsRef<[T]>,
    {
        // Check 1: at least one row
        let Some(first) = matrix.first() else {
            debug!(%operand, "rejected matrix without rows");
            return Err(DigitsError::EmptyMatrix { operand });
        };

        // Check 2: no empty rows
        if matrix.iter().any(|row| row.as_ref().is_empty()) {
            debug!(%operand, "rejected matrix with an empty row");
            return Err(DigitsError::EmptyMatrix { operand });
        }

        // Check 3: rectangular
        let cols = first.as_ref().len();
        for (row, values) in matrix.iter().enumerate().skip(1) {
            let got = values.as_ref().len();
            if got != cols {
                debug!(%operand, row, expected = cols, got, "rejected ragged matrix");
                return Err(DigitsError::RaggedMatrix {
                    operand,
                    row,
                    expected: cols,
                    got,
                });
            }
        }

        Ok(Shape::new(matrix.len(), cols))
    }

    /// Validate both operands of a product and their inner dimensions.
    ///
    /// Returns the shapes of `a` and `b` on success.
    pub fn validate_product<T, RA, RB>(a: &[RA], b: &[RB]) -> Result<(Shape, Shape), DigitsError>
    where
        RA: AsRef<[T]>,
        RB: AsRef<[T]>,
    {
        let left = Self::validate_matrix::<T, RA>(a, Operand::Left)?;
        let right = Self::validate_matrix::<T, RB>(b, Operand::Right)?;

        if !left.can_multiply(&right) {
            debug!(%left, %right, "rejected incompatible matrix shapes");
            return Err(DigitsError::DimensionMismatch { left, right });
        }

        Ok((left, right))
    }

    // ========================================================================
    // Text Validation
    // ========================================================================

    /// Validate a non-negative decimal integer literal.
    ///
    /// Surrounding ASCII whitespace is ignored; the remaining text must be a
    /// non-empty run of ASCII digits. Returns the trimmed digits.
    pub fn validate_decimal(input: &str) -> Result<&str, DigitsError> {
        let digits = input.trim_ascii();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            debug!(input, "rejected decimal literal");
            return Err(DigitsError::InvalidInteger {
                input: input.to_owned(),
            });
        }
        Ok(digits)
    }
}
