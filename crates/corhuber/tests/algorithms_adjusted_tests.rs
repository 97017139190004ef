#![cfg(feature = "dev")]
//! Tests for Huber correlation based on adjusted univariate winsorization.
//!
//! ## Test Organization
//!
//! 1. **Constants** - Major/minor quadrant selection and tie-break
//! 2. **Clamping** - Per-observation bounds
//! 3. **Correlation** - Reference values and degenerate cases

use approx::assert_relative_eq;

use corhuber::internals::algorithms::adjusted::{
    AdjustedConstants, cor_huber_adj, winsorize_adjusted,
};
use corhuber::internals::primitives::quadrant::{Quadrant, SignPartition};

// ============================================================================
// Constant Selection Tests
// ============================================================================

/// Test that 1st/3rd quadrants are major when they dominate.
#[test]
fn test_constants_concordant_major() {
    // signs: +1 x6, 0, -1 -> n1 = 7, n2 = 2
    let x = vec![-1.2f64, -0.4, 0.1, 0.5, 0.9, 8.0, -0.7, 1.4];
    let y = vec![-1.0f64, -0.5, 0.0, 0.6, 1.1, 0.3, -0.9, -6.0];
    let partition = SignPartition::from_pairs(&x, &y);
    let constants = AdjustedConstants::from_partition(&partition, 2.0);

    // n2 := n - n1 = 1, c2 = c * sqrt(1 / 7)
    assert_eq!(constants.c1, 2.0);
    assert_relative_eq!(constants.c2, 2.0 * (1.0f64 / 7.0).sqrt(), epsilon = 1e-12);
    assert_eq!(constants.c, 2.0);
}

/// Test that 2nd/4th quadrants are major when they dominate.
#[test]
fn test_constants_discordant_major() {
    // signs: -1, -1, -1, +1, 0 -> n1 = 2, n2 = 4
    let x = vec![1.0f64, 2.0, -1.0, 3.0, 0.0];
    let y = vec![-1.0f64, -2.0, 3.0, 4.0, 5.0];
    let partition = SignPartition::from_pairs(&x, &y);
    let constants = AdjustedConstants::from_partition(&partition, 2.0);

    // n1 := n - n2 = 1, c1 = c * sqrt(1 / 4)
    assert_eq!(constants.c2, 2.0);
    assert_relative_eq!(constants.c1, 1.0, epsilon = 1e-12);
}

/// Test that equal counts make the 1st/3rd quadrants major.
#[test]
fn test_constants_tie_prefers_concordant() {
    // signs: +1, -1, 0 -> n1 = 2, n2 = 2
    let x = vec![1.0f64, 2.0, 0.0];
    let y = vec![1.0f64, -2.0, 5.0];
    let partition = SignPartition::from_pairs(&x, &y);
    assert_eq!(partition.n1, partition.n2);

    let constants = AdjustedConstants::from_partition(&partition, 2.0);

    // n2 := n - n1 = 1, c2 = c * sqrt(1 / 2)
    assert_eq!(constants.c1, 2.0);
    assert_relative_eq!(constants.c2, 2.0f64.sqrt(), epsilon = 1e-12);
}

/// Test that an empty partition produces NaN constants instead of panicking.
#[test]
fn test_constants_zero_counts_are_nan() {
    let x: Vec<f64> = vec![];
    let partition = SignPartition::from_pairs(&x, &x);
    let constants = AdjustedConstants::from_partition(&partition, 2.0f64);

    assert_eq!(constants.c1, 2.0);
    assert!(constants.c2.is_nan());
}

/// Test the bounds selected for each class.
#[test]
fn test_bounds_for_each_class() {
    let constants = AdjustedConstants {
        c1: 2.0f64,
        c2: 0.5,
        c: 1.5,
    };

    assert_eq!(constants.bounds_for(Quadrant::Concordant).upper(), 2.0);
    assert_eq!(constants.bounds_for(Quadrant::Discordant).upper(), 0.5);
    assert_eq!(constants.bounds_for(Quadrant::Boundary).upper(), 1.5);
    assert_eq!(constants.bounds_for(Quadrant::Discordant).lower(), -0.5);
}

// ============================================================================
// Clamping Tests
// ============================================================================

/// Test per-observation clamping with quadrant-specific constants.
#[test]
fn test_winsorize_adjusted_values() {
    // signs: +1, -1, 0 -> c1 = 2, c2 = sqrt(2), axis uses c = 2
    let x = vec![3.0f64, 2.0, 0.0];
    let y = vec![1.0f64, -2.0, 5.0];
    let (wx, wy) = winsorize_adjusted(&x, &y, 2.0);

    let s2 = 2.0f64.sqrt();
    assert_eq!(wx, vec![2.0, s2, 0.0]);
    assert_eq!(wy, vec![1.0, -s2, 2.0]);
}

// ============================================================================
// Correlation Tests
// ============================================================================

/// Test a reference value on contaminated data.
#[test]
fn test_adj_known_value() {
    let x = vec![-1.2f64, -0.4, 0.1, 0.5, 0.9, 8.0, -0.7, 1.4];
    let y = vec![-1.0f64, -0.5, 0.0, 0.6, 1.1, 0.3, -0.9, -6.0];

    assert_relative_eq!(cor_huber_adj(&x, &y, 2.0), 0.663_899_348_274_272_1, epsilon = 1e-10);
}

/// Test the tie-break data set end to end.
#[test]
fn test_adj_tie_known_value() {
    let x = vec![1.0f64, 2.0, 0.0];
    let y = vec![1.0f64, -2.0, 5.0];

    assert_relative_eq!(cor_huber_adj(&x, &y, 2.0), -0.891_805_812_445_612_2, epsilon = 1e-10);
}

/// Test symmetry in the arguments.
#[test]
fn test_adj_symmetric() {
    let x = vec![0.3f64, -1.2, 2.2, 0.4, -0.8, 3.1];
    let y = vec![1.1f64, 0.2, -0.4, 0.9, 0.0, -2.5];

    assert_eq!(cor_huber_adj(&x, &y, 1.5), cor_huber_adj(&y, &x, 1.5));
}
