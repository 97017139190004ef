#![cfg(feature = "dev")]
//! Tests for estimator dispatch and tuning constants.

use approx::assert_relative_eq;

use corhuber::internals::algorithms::method::{CorrelationMethod, TuningConstants};
use corhuber::internals::primitives::errors::CorHuberError;

/// Test the default constants.
#[test]
fn test_default_constants() {
    let constants = TuningConstants::<f64>::default();

    assert_eq!(constants.c, 2.0);
    assert_eq!(constants.prob, 0.95);
    assert_relative_eq!(constants.tol, f64::EPSILON.sqrt(), epsilon = 1e-20);
}

/// Test that the default method is bivariate.
#[test]
fn test_default_method() {
    assert_eq!(CorrelationMethod::default(), CorrelationMethod::Bivariate);
}

/// Test dispatch to each estimator.
#[test]
fn test_dispatch_reference_values() {
    let x = vec![-1.2f64, -0.4, 0.1, 0.5, 0.9, 8.0, -0.7, 1.4];
    let y = vec![-1.0f64, -0.5, 0.0, 0.6, 1.1, 0.3, -0.9, -6.0];
    let constants = TuningConstants::new(2.0, 0.95, 1.49e-8);

    let cases = [
        (CorrelationMethod::Pearson, 0.092_275_939_960_201_11),
        (CorrelationMethod::Univariate, 0.249_643_682_199_548_83),
        (CorrelationMethod::Adjusted, 0.663_899_348_274_272_1),
        (CorrelationMethod::Bivariate, 0.546_050_120_797_705_8),
    ];

    for (method, expected) in cases {
        assert_relative_eq!(method.correlate(&x, &y, &constants).unwrap(), expected, epsilon = 1e-10);
    }
}

/// Test that dispatch rejects mismatched lengths for every estimator.
#[test]
fn test_dispatch_rejects_length_mismatch() {
    let x = vec![1.0f64, 2.0, 3.0, 4.0];
    let y = vec![1.0f64, 2.0, 3.0];
    let constants = TuningConstants::default();

    for method in [
        CorrelationMethod::Pearson,
        CorrelationMethod::Univariate,
        CorrelationMethod::Adjusted,
        CorrelationMethod::Bivariate,
    ] {
        assert!(matches!(
            method.correlate(&x, &y, &constants),
            Err(CorHuberError::MismatchedInputs { x_len: 4, y_len: 3 })
        ));
    }
}

/// Test that dispatch rejects invalid tuning constants.
#[test]
fn test_dispatch_rejects_invalid_constants() {
    let x = vec![-1.0f64, 0.5, 0.0, 1.5];
    let constants = TuningConstants::new(2.0, 1.5, 1e-8);

    assert!(matches!(
        CorrelationMethod::Bivariate.correlate(&x, &x, &constants),
        Err(CorHuberError::InvalidProbability(_))
    ));
}
