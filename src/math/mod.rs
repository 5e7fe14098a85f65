//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numeric kernels behind the public API:
//! - Leibniz series partial sums
//! - Dense matrix products
//! - Division and square root
//! - Factorials
//! - Arbitrary-precision sums
//!
//! Kernels assume validated input and never fail on their own, with the
//! single exception of the fixed-width factorial, which reports overflow.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Leibniz series for π.
pub mod series;

/// Matrix product and identity construction.
pub mod matrix;

/// Division and square root kernels.
pub mod arithmetic;

/// Arbitrary-precision and fixed-width factorials.
pub mod factorial;

/// Big-integer sums rendered as decimal text.
pub mod bigsum;
