//! Division and square root kernels.
//!
//! Both kernels assume their operand has been checked by the validator:
//! a non-zero divisor for [`quotient`], a non-negative radicand for [`root`].

// External dependencies
use num_traits::Float;

/// IEEE-754 quotient `a / b`.
#[inline]
pub fn quotient<T: Float>(a: T, b: T) -> T {
    a / b
}

/// Principal square root of `x`.
#[inline]
pub fn root<T: Float>(x: T) -> T {
    x.sqrt()
}
