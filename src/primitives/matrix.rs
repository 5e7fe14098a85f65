//! Descriptors for matrix operands.
//!
//! ## Purpose
//!
//! This module defines the small value types used to describe matrices in
//! validation results and error messages: the [`Shape`] of a rectangular
//! matrix and the [`Operand`] position of a matrix in a binary operation.
//!
//! ## Design notes
//!
//! * **Plain data**: Both types are `Copy` and carry no matrix contents.
//! * **Display**: Shapes render as `RxC`, operands as `A` / `B`.

// External dependencies
use core::fmt;

/// Position of a matrix within a binary matrix operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The left-hand matrix (`A` in `A * B`).
    Left,

    /// The right-hand matrix (`B` in `A * B`).
    Right,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "A"),
            Self::Right => write!(f, "B"),
        }
    }
}

/// Dimensions of a rectangular matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns in every row.
    pub cols: usize,
}

impl Shape {
    /// Create a shape from its row and column counts.
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Whether a matrix of this shape can be multiplied on the right by `rhs`.
    #[inline]
    pub const fn can_multiply(&self, rhs: &Shape) -> bool {
        self.cols == rhs.rows
    }

    /// Shape of the product `self * rhs`.
    #[inline]
    pub const fn product(&self, rhs: &Shape) -> Shape {
        Shape::new(self.rows, rhs.cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
