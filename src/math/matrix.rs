//! Dense matrix product over row-major nested rows.
//!
//! ## Purpose
//!
//! This module multiplies two rectangular matrices stored as sequences of
//! rows, and builds identity matrices.
//!
//! ## Design notes
//!
//! * **Storage**: Any `&[R]` with `R: AsRef<[T]>` is accepted for either
//!   operand, so nested `Vec`s, fixed-size arrays, and borrowed slices all
//!   work unchanged.
//! * **Accumulation order**: Row-major over the output; each inner product is
//!   accumulated from zero in natural `k = 0..inner` order, which keeps
//!   rounding reproducible.
//! * **Preconditions**: Inputs are assumed validated (non-empty, rectangular,
//!   compatible inner dimension). See `engine::validator`.
//!
//! ## Non-goals
//!
//! * This module does not block, tile, or vectorize the product.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::Shape;

// ============================================================================
// Matrix Product
// ============================================================================

/// Compute `a * b` for matrices of the given, already validated, shapes.
///
/// # Formula
///
/// ```text
/// c[i][j] = sum_{k=0}^{inner-1} a[i][k] * b[k][j]
/// ```
pub fn multiply<T, RA, RB>(a: &[RA], b: &[RB], left: Shape, right: Shape) -> Vec<Vec<T>>
where
    T: Float,
    RA: AsRef<[T]>,
    RB: AsRef<[T]>,
{
    let out = left.product(&right);
    let mut result = Vec::with_capacity(out.rows);

    for a_row in a {
        let a_row: &[T] = a_row.as_ref();
        let mut row = Vec::with_capacity(out.cols);
        for j in 0..out.cols {
            let mut sum = T::zero();
            for (&a_ik, b_row) in a_row.iter().zip(b) {
                sum = sum + a_ik * b_row.as_ref()[j];
            }
            row.push(sum);
        }
        result.push(row);
    }

    result
}

/// Build the `n x n` identity matrix.
pub fn identity<T: Float>(n: usize) -> Vec<Vec<T>> {
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| if i == j { T::one() } else { T::zero() })
                .collect()
        })
        .collect()
}
