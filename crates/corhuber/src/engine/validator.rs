//! Input validation for robust correlation configuration and data.
//!
//! ## Purpose
//!
//! This module provides the fail-fast precondition checks for the public
//! entry points: input lengths, matrix shape, and the tuning constants.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Caller misuse vs. data edge cases**: Mismatched lengths or a negative
//!   constant are rejected here. Constant or degenerate data are not: they
//!   yield a NaN correlation downstream.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check data values for finiteness; NaN inputs
//!   propagate to NaN results.
//! * This module does not standardize or otherwise transform input data.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::method::TuningConstants;
use crate::primitives::errors::CorHuberError;
use crate::primitives::matrix::DataMatrix;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for correlation inputs and tuning constants.
///
/// All methods return `Result<(), CorHuberError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    /// Minimum number of observations for a correlation.
    pub const MIN_POINTS: usize = 2;

    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a pair of input vectors.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), CorHuberError> {
        // Check 1: Non-empty vectors
        if x.is_empty() || y.is_empty() {
            return Err(CorHuberError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(CorHuberError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: Sufficient observations
        if n < Self::MIN_POINTS {
            return Err(CorHuberError::TooFewPoints {
                got: n,
                min: Self::MIN_POINTS,
            });
        }

        Ok(())
    }

    /// Validate the shape of a data matrix.
    pub fn validate_matrix<T>(data: &DataMatrix<'_, T>) -> Result<(), CorHuberError> {
        if data.n_cols() == 0 || data.n_rows() == 0 {
            return Err(CorHuberError::EmptyInput);
        }

        if data.n_rows() < Self::MIN_POINTS {
            return Err(CorHuberError::TooFewPoints {
                got: data.n_rows(),
                min: Self::MIN_POINTS,
            });
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the winsorization constant.
    pub fn validate_constant<T: Float>(c: T) -> Result<(), CorHuberError> {
        if !c.is_finite() || c <= T::zero() {
            return Err(CorHuberError::InvalidConstant(
                c.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the tolerance ellipse coverage probability.
    pub fn validate_probability<T: Float>(prob: T) -> Result<(), CorHuberError> {
        if !prob.is_finite() || prob <= T::zero() || prob >= T::one() {
            return Err(CorHuberError::InvalidProbability(
                prob.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the singularity tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), CorHuberError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(CorHuberError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate all tuning constants at once.
    pub fn validate_constants<T: Float>(
        constants: &TuningConstants<T>,
    ) -> Result<(), CorHuberError> {
        Self::validate_constant(constants.c)?;
        Self::validate_probability(constants.prob)?;
        Self::validate_tolerance(constants.tol)
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), CorHuberError> {
        if let Some(param) = duplicate_param {
            return Err(CorHuberError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
