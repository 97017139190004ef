//! Error types for robust correlation operations.
//!
//! ## Purpose
//!
//! This module defines the precondition violations that can occur when
//! computing Huber-type correlations: malformed inputs, invalid tuning
//! constants, and builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Deferred**: Builder errors are recorded during configuration and reported by `build()`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty vectors, mismatched lengths, malformed matrices.
//! 2. **Parameter validation**: Winsorization constant, probability, tolerance.
//! 3. **Numeric results are not errors**: an undefined correlation (NaN) is a
//!    valid return value and never surfaces here.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors are reported as `f64`.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for robust correlation operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CorHuberError {
    /// Input vectors are empty.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// `x` and `y` must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` vector.
        x_len: usize,
        /// Number of elements in the `y` vector.
        y_len: usize,
    },

    /// Number of observations is below the minimum requirement.
    TooFewPoints {
        /// Number of observations provided.
        got: usize,
        /// Minimum required observations.
        min: usize,
    },

    /// Winsorization constant must be positive and finite.
    InvalidConstant(f64),

    /// Probability must be strictly between 0 and 1.
    InvalidProbability(f64),

    /// Singularity tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// Lower clamp bound exceeds the upper one.
    InvalidBounds {
        /// Lower bound provided.
        lower: f64,
        /// Upper bound provided.
        upper: f64,
    },

    /// Flat storage does not match the declared matrix shape.
    InvalidDimensions {
        /// Number of stored values.
        len: usize,
        /// Declared number of rows (observations).
        n_rows: usize,
        /// Declared number of columns (variables).
        n_cols: usize,
    },

    /// The robust correlation matrix could not be inverted.
    SingularMatrix,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for CorHuberError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input vectors are empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} values, y has {y_len}")
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few observations: got {got}, need at least {min}")
            }
            Self::InvalidConstant(c) => {
                write!(f, "Invalid winsorization constant: {c} (must be > 0 and finite)")
            }
            Self::InvalidProbability(prob) => {
                write!(f, "Invalid probability: {prob} (must be > 0 and < 1)")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::InvalidBounds { lower, upper } => {
                write!(
                    f,
                    "Invalid winsorization bounds: lower {lower} exceeds upper {upper}"
                )
            }
            Self::InvalidDimensions {
                len,
                n_rows,
                n_cols,
            } => {
                write!(
                    f,
                    "Invalid dimensions: {len} values cannot form a {n_rows} x {n_cols} matrix"
                )
            }
            Self::SingularMatrix => write!(f, "Correlation matrix is singular"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for CorHuberError {}
