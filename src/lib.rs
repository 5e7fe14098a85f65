//! # digits-calculator — Small, checked numeric routines for Rust
//!
//! A compact library of stateless numeric routines with typed failures:
//!
//! - **π approximation** by partial sums of the Leibniz series
//! - **Matrix multiplication** with emptiness, shape, and dimension checks
//! - **Safe division** that rejects a zero divisor
//! - **Safe square root** that rejects negative input
//! - **Factorial** in arbitrary precision, plus a checked `u64` variant
//! - **Big sums** of unbounded non-negative integers, rendered as decimal text
//!
//! Every routine is a pure function of its arguments. There is no shared
//! state, so all of them may be called concurrently without coordination.
//!
//! ## Quick Start
//!
//! ```rust
//! use digits_calculator::prelude::*;
//!
//! let pi = calculate_pi(1_000_000);
//! assert!((pi - std::f64::consts::PI).abs() < 1e-3);
//!
//! let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
//! let b = vec![vec![5.0, 6.0], vec![7.0, 8.0]];
//! assert_eq!(matrix_multiply(&a, &b)?, vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
//!
//! assert_eq!(divide(10.0, -2.0)?, -5.0);
//! assert_eq!(safe_sqrt(16.0)?, 4.0);
//! assert_eq!(factorial(10)?.to_string(), "3628800");
//! assert_eq!(sum_as_string(999_999_999u64, 1u64), "1000000000");
//! # Result::<(), DigitsError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Fallible routines return `Result<_, DigitsError>`. Each precondition maps to
//! exactly one variant, so callers can handle failures distinctly:
//!
//! | Routine | Failure |
//! |---------|---------|
//! | [`matrix_multiply`](prelude::matrix_multiply) | `EmptyMatrix`, `RaggedMatrix`, `DimensionMismatch` |
//! | [`divide`](prelude::divide) | `DivisionByZero` |
//! | [`safe_sqrt`](prelude::safe_sqrt) | `NegativeRadicand` |
//! | [`factorial`](prelude::factorial) | `NegativeArgument` |
//! | [`checked_factorial`](prelude::checked_factorial) | `NegativeArgument`, `FactorialOverflow` |
//! | [`sum_decimal_strings`](prelude::sum_decimal_strings) | `InvalidInteger` |
//!
//! ```rust
//! use digits_calculator::prelude::*;
//!
//! match divide(1.0, 0.0) {
//!     Ok(q) => println!("quotient: {}", q),
//!     Err(DigitsError::DivisionByZero) => eprintln!("refusing to divide by zero"),
//!     Err(e) => eprintln!("unexpected: {}", e),
//! }
//! ```
//!
//! ## Precision
//!
//! - Float routines are generic over [`num_traits::Float`], so `f32` and `f64`
//!   both work.
//! - The Leibniz series is summed term by term in increasing order, so results
//!   are reproducible bit for bit.
//! - Matrix inner products are accumulated in natural index order.
//! - Factorials and sums use [`num_bigint::BigUint`] and never overflow.
//!
//! ## Logging
//!
//! Rejected inputs emit `debug` events and accepted computations emit `trace`
//! events through [`tracing`]. The crate installs no subscriber; events cost
//! nothing unless the host application enables one.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency
//! (`alloc` is still required for result matrices and big integers):
//!
//! ```toml
//! [dependencies]
//! digits-calculator = { version = "0.1", default-features = false }
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data types shared by every layer.
//
// Contains the crate-wide error type (`DigitsError`) and matrix descriptors
// (`Shape`, `Operand`).
mod primitives;

// Layer 2: Math - pure numeric kernels.
//
// Contains the Leibniz series, matrix product, division and square root,
// factorials, and big-integer sums. Kernels assume validated input.
mod math;

// Layer 3: Engine - input validation.
//
// Contains the `Validator` run by every public routine before a kernel.
mod engine;

// Layer 4: API - public routines.
//
// Validates inputs and dispatches to the math kernels.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to every routine and type:
///
/// ```
/// use digits_calculator::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        DigitsError, Operand, Shape, calculate_pi, checked_factorial, divide, factorial,
        identity, matrix_multiply, safe_sqrt, sum_as_string, sum_decimal_strings,
    };
    pub use num_bigint::BigUint;
}

pub use prelude::*;

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math kernels.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal validation engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
