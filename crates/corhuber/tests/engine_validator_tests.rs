#![cfg(feature = "dev")]
//! Tests for input validation utilities.
//!
//! These tests verify the fail-fast precondition checks:
//! - Input vector validation (emptiness, length, minimum size)
//! - Matrix shape validation
//! - Tuning constant validation
//!
//! ## Test Organization
//!
//! 1. **Input Validation** - Vector and matrix checks
//! 2. **Parameter Validation** - c, prob, tol
//! 3. **Error Messages** - Proper error reporting

use corhuber::internals::algorithms::method::TuningConstants;
use corhuber::internals::engine::validator::Validator;
use corhuber::internals::primitives::errors::CorHuberError;
use corhuber::internals::primitives::matrix::DataMatrix;

// ============================================================================
// Input Validation Tests
// ============================================================================

/// Test validation accepts well-formed input.
#[test]
fn test_validate_valid_inputs() {
    let x = vec![0.0f64, 1.0, 2.0];
    let y = vec![1.0f64, 2.0, 3.0];

    assert!(Validator::validate_inputs(&x, &y).is_ok());
}

/// Test validation rejects empty input.
#[test]
fn test_validate_empty_input() {
    let x: Vec<f64> = vec![];
    let y: Vec<f64> = vec![];

    assert!(matches!(
        Validator::validate_inputs(&x, &y),
        Err(CorHuberError::EmptyInput)
    ));
}

/// Test validation rejects length mismatch instead of truncating.
#[test]
fn test_validate_length_mismatch() {
    let x = vec![0.0f64, 1.0];
    let y = vec![1.0f64];

    assert!(matches!(
        Validator::validate_inputs(&x, &y),
        Err(CorHuberError::MismatchedInputs { x_len: 2, y_len: 1 })
    ));
}

/// Test validation rejects a single observation.
#[test]
fn test_validate_too_few_points() {
    let x = vec![1.0f64];

    assert!(matches!(
        Validator::validate_inputs(&x, &x),
        Err(CorHuberError::TooFewPoints { got: 1, min: 2 })
    ));
}

/// Test that non-finite data values are not rejected.
#[test]
fn test_validate_allows_nan_data() {
    let x = vec![f64::NAN, 1.0];
    let y = vec![1.0f64, 2.0];

    assert!(Validator::validate_inputs(&x, &y).is_ok());
}

/// Test matrix shape validation.
#[test]
fn test_validate_matrix() {
    let values = vec![0.0f64; 6];

    let ok = DataMatrix::from_column_major(&values, 3, 2).unwrap();
    assert!(Validator::validate_matrix(&ok).is_ok());

    let no_cols = DataMatrix::from_column_major(&values[..0], 3, 0).unwrap();
    assert!(matches!(
        Validator::validate_matrix(&no_cols),
        Err(CorHuberError::EmptyInput)
    ));

    let one_row = DataMatrix::from_column_major(&values, 1, 6).unwrap();
    assert!(matches!(
        Validator::validate_matrix(&one_row),
        Err(CorHuberError::TooFewPoints { got: 1, min: 2 })
    ));
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test winsorization constant validation.
#[test]
fn test_validate_constant() {
    assert!(Validator::validate_constant(2.0f64).is_ok());
    assert!(matches!(
        Validator::validate_constant(0.0f64),
        Err(CorHuberError::InvalidConstant(_))
    ));
    assert!(Validator::validate_constant(-1.0f64).is_err());
    assert!(Validator::validate_constant(f64::INFINITY).is_err());
    assert!(Validator::validate_constant(f64::NAN).is_err());
}

/// Test probability validation.
#[test]
fn test_validate_probability() {
    assert!(Validator::validate_probability(0.95f64).is_ok());
    assert!(matches!(
        Validator::validate_probability(1.0f64),
        Err(CorHuberError::InvalidProbability(_))
    ));
    assert!(Validator::validate_probability(0.0f64).is_err());
    assert!(Validator::validate_probability(f64::NAN).is_err());
}

/// Test tolerance validation.
#[test]
fn test_validate_tolerance() {
    assert!(Validator::validate_tolerance(1e-8f64).is_ok());
    assert!(matches!(
        Validator::validate_tolerance(0.0f64),
        Err(CorHuberError::InvalidTolerance(_))
    ));
    assert!(Validator::validate_tolerance(f64::INFINITY).is_err());
}

/// Test that combined validation reports the first violation.
#[test]
fn test_validate_constants_fail_fast() {
    let constants = TuningConstants::new(-1.0f64, 2.0, -3.0);

    assert!(matches!(
        Validator::validate_constants(&constants),
        Err(CorHuberError::InvalidConstant(c)) if c == -1.0
    ));
}

/// Test duplicate parameter validation.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert!(matches!(
        Validator::validate_no_duplicates(Some("constant")),
        Err(CorHuberError::DuplicateParameter {
            parameter: "constant"
        })
    ));
}

// ============================================================================
// Error Message Tests
// ============================================================================

/// Test that error messages include context.
#[test]
fn test_error_messages() {
    let mismatch = CorHuberError::MismatchedInputs { x_len: 5, y_len: 3 };
    assert_eq!(mismatch.to_string(), "Length mismatch: x has 5 values, y has 3");

    let prob = CorHuberError::InvalidProbability(1.5);
    assert!(prob.to_string().contains("1.5"));

    let dims = CorHuberError::InvalidDimensions {
        len: 5,
        n_rows: 2,
        n_cols: 3,
    };
    assert!(dims.to_string().contains("2 x 3"));
}
