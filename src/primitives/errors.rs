//! Error types for the numeric routines.
//!
//! ## Purpose
//!
//! This module defines [`DigitsError`], the single error type returned by
//! every fallible routine in the crate. Each variant names one caller-fixable
//! precondition violation.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Routines return the first violation they detect; no
//!   partial results accompany an error.
//! * **Self-describing**: Variants carry the offending value or shape so the
//!   `Display` message is actionable without extra context.
//! * **no_std**: `Display` comes from `core::fmt`; `std::error::Error` is
//!   implemented only with the `std` feature.
//!
//! ## Invariants
//!
//! * Every error is deterministic in its inputs and never transient.
//!
//! ## Non-goals
//!
//! * This module does not perform validation (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt;

// Internal dependencies
use crate::primitives::matrix::{Operand, Shape};

// ============================================================================
// DigitsError
// ============================================================================

/// Errors returned by the numeric routines.
#[derive(Debug, Clone, PartialEq)]
pub enum DigitsError {
    /// The divisor of a division was zero.
    DivisionByZero,

    /// A square root was requested for a negative value.
    NegativeRadicand {
        /// The rejected radicand.
        value: f64,
    },

    /// A factorial was requested for a negative argument.
    NegativeArgument {
        /// The rejected argument.
        value: i64,
    },

    /// A fixed-width factorial does not fit in 64 bits.
    FactorialOverflow {
        /// The argument whose factorial overflowed.
        value: i64,
    },

    /// The inner dimensions of a matrix product disagree.
    DimensionMismatch {
        /// Shape of the left operand.
        left: Shape,
        /// Shape of the right operand.
        right: Shape,
    },

    /// A matrix has no rows, or a row with no columns.
    EmptyMatrix {
        /// Which operand is empty.
        operand: Operand,
    },

    /// The rows of a matrix do not all have the same length.
    RaggedMatrix {
        /// Which operand is ragged.
        operand: Operand,
        /// Index of the first row whose length differs from row 0.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },

    /// A decimal integer literal could not be parsed.
    InvalidInteger {
        /// The rejected text.
        input: String,
    },
}

impl fmt::Display for DigitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::NegativeRadicand { value } => write!(
                f,
                "Cannot calculate square root of negative number: {}",
                value
            ),
            Self::NegativeArgument { value } => write!(
                f,
                "Factorial is not defined for negative numbers: {}",
                value
            ),
            Self::FactorialOverflow { value } => write!(
                f,
                "Factorial result is too large: {}! does not fit in 64 bits",
                value
            ),
            Self::DimensionMismatch { left, right } => write!(
                f,
                "Cannot multiply matrices: A is {}, B is {}. Columns of A ({}) must equal rows of B ({})",
                left, right, left.cols, right.rows
            ),
            Self::EmptyMatrix { operand } => {
                write!(f, "Matrices cannot be empty: matrix {} has no entries", operand)
            }
            Self::RaggedMatrix {
                operand,
                row,
                expected,
                got,
            } => write!(
                f,
                "All rows in matrix {} must have the same number of columns: row {} has {}, expected {}",
                operand, row, got, expected
            ),
            Self::InvalidInteger { input } => {
                write!(f, "Invalid non-negative integer: {:?}", input)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DigitsError {}
