#![cfg(feature = "dev")]
//! Tests for value clamping.
//!
//! ## Test Organization
//!
//! 1. **Scalar Clamp** - Inside, below, above, NaN
//! 2. **Bounds** - Construction and validation
//! 3. **Properties** - Idempotence

use corhuber::internals::math::winsorize::{WinsorBounds, winsorize};
use corhuber::internals::primitives::errors::CorHuberError;

// ============================================================================
// Scalar Clamp Tests
// ============================================================================

/// Test values inside, below and above the bounds.
#[test]
fn test_winsorize_scalar() {
    assert_eq!(winsorize(0.5f64, -2.0, 2.0), 0.5);
    assert_eq!(winsorize(-3.0f64, -2.0, 2.0), -2.0);
    assert_eq!(winsorize(3.0f64, -2.0, 2.0), 2.0);
    assert_eq!(winsorize(2.0f64, -2.0, 2.0), 2.0);
}

/// Test asymmetric bounds.
#[test]
fn test_winsorize_asymmetric() {
    assert_eq!(winsorize(-1.0f64, -0.5, 3.0), -0.5);
    assert_eq!(winsorize(2.5f64, -0.5, 3.0), 2.5);
}

/// Test that NaN passes through unchanged.
#[test]
fn test_winsorize_nan_passthrough() {
    assert!(winsorize(f64::NAN, -2.0, 2.0).is_nan());
}

// ============================================================================
// Bounds Tests
// ============================================================================

/// Test symmetric bounds.
#[test]
fn test_bounds_symmetric() {
    let bounds = WinsorBounds::symmetric(2.0f64);

    assert_eq!(bounds.lower(), -2.0);
    assert_eq!(bounds.upper(), 2.0);
    assert_eq!(
        bounds.clamp_all(&[-3.0, -1.0, 0.0, 1.0, 3.0]),
        vec![-2.0, -1.0, 0.0, 1.0, 2.0]
    );
}

/// Test that a negative constant is mirrored.
#[test]
fn test_bounds_symmetric_negative_constant() {
    let bounds = WinsorBounds::symmetric(-1.5f64);

    assert!(bounds.lower() <= bounds.upper());
    assert_eq!(bounds.upper(), 1.5);
}

/// Test that inverted bounds are rejected.
#[test]
fn test_bounds_rejects_inverted() {
    let res = WinsorBounds::new(1.0f64, -1.0);

    assert!(matches!(
        res,
        Err(CorHuberError::InvalidBounds { lower, upper }) if lower == 1.0 && upper == -1.0
    ));
}

/// Test that NaN bounds are rejected.
#[test]
fn test_bounds_rejects_nan() {
    assert!(WinsorBounds::new(f64::NAN, 1.0).is_err());
    assert!(WinsorBounds::new(-1.0, f64::NAN).is_err());
}

/// Test degenerate (equal) bounds.
#[test]
fn test_bounds_degenerate_interval() {
    let bounds = WinsorBounds::new(0.0f64, 0.0).unwrap();

    assert_eq!(bounds.clamp_all(&[-1.0, 0.0, 5.0]), vec![0.0, 0.0, 0.0]);
}

// ============================================================================
// Property Tests
// ============================================================================

/// Test that clamping twice equals clamping once.
#[test]
fn test_winsorize_idempotent() {
    let bounds = WinsorBounds::new(-1.3f64, 0.7).unwrap();
    let values = vec![-4.0, -1.3, -0.2, 0.0, 0.69, 0.7, 12.0];

    let once = bounds.clamp_all(&values);
    let twice = bounds.clamp_all(&once);

    assert_eq!(once, twice);
}

/// Test that the input is not modified.
#[test]
fn test_winsorize_does_not_mutate_input() {
    let values = vec![-5.0f64, 5.0];
    let _ = WinsorBounds::symmetric(1.0).clamp_all(&values);

    assert_eq!(values, vec![-5.0, 5.0]);
}
