//! Tests for safe division and safe square root.
//!
//! ## Test Organization
//!
//! 1. **Division** - Ordinary quotients and zero divisors
//! 2. **Square Root** - Ordinary roots, zero, and negative radicands

use approx::assert_relative_eq;

use digits_calculator::prelude::*;

// ============================================================================
// Division Tests
// ============================================================================

/// 10 / 2 == 5.
#[test]
fn test_divide_basic() {
    assert_relative_eq!(divide(10.0, 2.0).unwrap(), 5.0);
}

/// Non-integral quotients.
#[test]
fn test_divide_float_result() {
    assert_relative_eq!(divide(7.0, 2.0).unwrap(), 3.5);
}

/// Negative operands follow ordinary sign rules.
#[test]
fn test_divide_negative_numbers() {
    assert_relative_eq!(divide(-10.0, 2.0).unwrap(), -5.0);
    assert_relative_eq!(divide(10.0, -2.0).unwrap(), -5.0);
    assert_relative_eq!(divide(-10.0, -2.0).unwrap(), 5.0);
}

/// Zero divisors fail regardless of the dividend's sign.
#[test]
fn test_divide_by_zero() {
    for a in [10.0, -10.0, 0.0, f64::INFINITY] {
        assert_eq!(divide(a, 0.0), Err(DigitsError::DivisionByZero));
    }
}

/// Negative zero is still zero.
#[test]
fn test_divide_by_negative_zero() {
    assert_eq!(divide(1.0, -0.0), Err(DigitsError::DivisionByZero));
}

/// The message names the failure.
#[test]
fn test_divide_by_zero_message() {
    let err = divide(1.0, 0.0).unwrap_err();
    assert!(err.to_string().contains("Division by zero"));
}

/// Tiny divisors are not zero and overflow to infinity.
#[test]
fn test_divide_tiny_divisor() {
    let q = divide(f64::MAX, f64::MIN_POSITIVE).unwrap();
    assert!(q.is_infinite());
}

/// Single precision is supported.
#[test]
fn test_divide_f32() {
    assert_relative_eq!(divide(1.0_f32, 4.0).unwrap(), 0.25);
}

// ============================================================================
// Square Root Tests
// ============================================================================

/// sqrt(16) == 4.
#[test]
fn test_safe_sqrt_basic() {
    assert_relative_eq!(safe_sqrt(16.0).unwrap(), 4.0);
}

/// Irrational roots.
#[test]
fn test_safe_sqrt_irrational() {
    assert_relative_eq!(safe_sqrt(2.0).unwrap(), std::f64::consts::SQRT_2);
}

/// sqrt(0) is exactly 0.
#[test]
fn test_safe_sqrt_zero() {
    assert_eq!(safe_sqrt(0.0).unwrap(), 0.0);
}

/// Negative radicands fail with the rejected value.
#[test]
fn test_safe_sqrt_negative() {
    assert_eq!(
        safe_sqrt(-9.0),
        Err(DigitsError::NegativeRadicand { value: -9.0 })
    );
    assert!(matches!(
        safe_sqrt(-f64::MIN_POSITIVE),
        Err(DigitsError::NegativeRadicand { .. })
    ));
    assert!(matches!(
        safe_sqrt(f64::NEG_INFINITY),
        Err(DigitsError::NegativeRadicand { .. })
    ));
}

/// The message mentions negativity.
#[test]
fn test_safe_sqrt_negative_message() {
    let err = safe_sqrt(-1.0).unwrap_err();
    assert!(err.to_string().contains("negative"));
}
