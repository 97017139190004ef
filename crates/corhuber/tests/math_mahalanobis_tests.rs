#![cfg(feature = "dev")]
//! Tests for squared Mahalanobis distances.

use approx::assert_relative_eq;

use corhuber::internals::math::mahalanobis::{InverseCorrelation, InverseCorrelation2};

// ============================================================================
// 2 x 2 Tests
// ============================================================================

/// Test the closed-form 2 x 2 inverse.
#[test]
fn test_inverse_2x2_entries() {
    // [[1, 0.5], [0.5, 1]]^-1 = [[4/3, -2/3], [-2/3, 4/3]]
    let inv = InverseCorrelation2::new(0.5f64);

    assert_relative_eq!(inv.diag(), 4.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(inv.off_diag(), -2.0 / 3.0, epsilon = 1e-12);
}

/// Test that zero correlation gives the Euclidean norm.
#[test]
fn test_distance_2x2_uncorrelated() {
    let inv = InverseCorrelation2::new(0.0f64);

    assert_relative_eq!(inv.squared_distance(3.0, 4.0), 25.0, epsilon = 1e-12);
}

/// Test distances along and across the correlation axis.
#[test]
fn test_distance_2x2_correlated() {
    let inv = InverseCorrelation2::new(0.5f64);

    // (x^2 + y^2 - 2 r x y) / (1 - r^2)
    assert_relative_eq!(inv.squared_distance(1.0, 1.0), 4.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(inv.squared_distance(1.0, -1.0), 4.0, epsilon = 1e-12);
}

/// Test that the distance is symmetric in x and y.
#[test]
fn test_distance_2x2_symmetric() {
    let inv = InverseCorrelation2::new(0.37f64);

    assert_eq!(inv.squared_distance(1.3, -0.2), inv.squared_distance(-0.2, 1.3));
}

// ============================================================================
// p x p Tests
// ============================================================================

/// Test that the identity gives the squared Euclidean norm.
#[test]
fn test_inverse_identity() {
    let identity = vec![1.0f64, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    let inv = InverseCorrelation::new(&identity, 3).unwrap();

    assert_eq!(inv.dim(), 3);
    assert_relative_eq!(inv.squared_distance(&[1.0, 2.0, 2.0]), 9.0, epsilon = 1e-12);
}

/// Test agreement with the closed-form 2 x 2 inverse.
#[test]
fn test_inverse_matches_closed_form() {
    let r = 0.6f64;
    let inv = InverseCorrelation::new(&[1.0, r, r, 1.0], 2).unwrap();
    let closed = InverseCorrelation2::new(r);

    assert_relative_eq!(inv.get(0, 0), closed.diag(), epsilon = 1e-12);
    assert_relative_eq!(inv.get(0, 1), closed.off_diag(), epsilon = 1e-12);
    assert_relative_eq!(
        inv.squared_distance(&[0.4, -1.1]),
        closed.squared_distance(0.4, -1.1),
        epsilon = 1e-12
    );
}

/// Test that a singular matrix falls back to the pseudo-inverse.
#[test]
fn test_inverse_singular_uses_pseudo_inverse() {
    // [[1, 1], [1, 1]]^+ = [[1/4, 1/4], [1/4, 1/4]]
    let inv = InverseCorrelation::new(&[1.0f64, 1.0, 1.0, 1.0], 2).unwrap();

    assert_relative_eq!(inv.get(0, 0), 0.25, epsilon = 1e-10);
    assert_relative_eq!(inv.get(1, 0), 0.25, epsilon = 1e-10);
}

/// Test that non-finite entries are rejected.
#[test]
fn test_inverse_rejects_nan() {
    assert!(InverseCorrelation::new(&[1.0f64, f64::NAN, f64::NAN, 1.0], 2).is_none());
}

/// Test that a shape mismatch is rejected.
#[test]
fn test_inverse_rejects_bad_shape() {
    assert!(InverseCorrelation::new(&[1.0f64, 0.0, 0.0], 2).is_none());
}
