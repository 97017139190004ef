//! Input abstractions for robust correlation.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for correlation inputs,
//! allowing the model methods to process slices, vectors, and `ndarray`
//! containers through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Contiguous vectors and Fortran-ordered
//!   matrices are borrowed directly.
//! * **Layout conversion**: Row-major or strided matrices are copied into
//!   column-major storage once, so every variable is a contiguous slice.
//!
//! ## Key concepts
//!
//! * **CorInput Trait**: One variable, as a contiguous slice.
//! * **MatrixInput Trait**: Observations in rows, variables in columns.
//!
//! ## Invariants
//!
//! * Returned storage represents all elements of the input container.
//! * Matrix storage is column-major with `n_rows * n_cols` elements.
//!
//! ## Non-goals
//!
//! * This module does not perform data cleaning or imputation.
//! * This module does not standardize variables.

// External dependencies
use ndarray::{Array2, ArrayBase, Data, Ix1, Ix2};
use num_traits::Float;
use std::borrow::Cow;

// Export dependencies from corhuber crate
use corhuber::internals::engine::output::CorrelationMatrix;
use corhuber::internals::primitives::errors::CorHuberError;
use corhuber::internals::primitives::matrix::DataMatrix;

// ============================================================================
// Vector Input
// ============================================================================

/// Trait for types that can be used as a single variable.
pub trait CorInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_cor_slice(&self) -> Result<&[T], CorHuberError>;
}

impl<T: Float> CorInput<T> for [T] {
    fn as_cor_slice(&self) -> Result<&[T], CorHuberError> {
        Ok(self)
    }
}

impl<T: Float> CorInput<T> for Vec<T> {
    fn as_cor_slice(&self) -> Result<&[T], CorHuberError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> CorInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_cor_slice(&self) -> Result<&[T], CorHuberError> {
        self.as_slice().ok_or_else(|| {
            CorHuberError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}

// ============================================================================
// Matrix Input
// ============================================================================

/// Trait for `n x p` data matrices (observations in rows).
pub trait MatrixInput<T: Float> {
    /// `(n_rows, n_cols)`.
    fn shape(&self) -> (usize, usize);

    /// Column-major storage, borrowed when the layout already matches.
    fn to_column_major(&self) -> Cow<'_, [T]>;
}

impl<T: Float, S> MatrixInput<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
{
    fn shape(&self) -> (usize, usize) {
        self.dim()
    }

    fn to_column_major(&self) -> Cow<'_, [T]> {
        // Fortran-ordered arrays are column-major already
        if self.t().is_standard_layout() {
            if let Some(values) = self.as_slice_memory_order() {
                return Cow::Borrowed(values);
            }
        }
        Cow::Owned(self.t().iter().copied().collect())
    }
}

impl<T: Float> MatrixInput<T> for DataMatrix<'_, T> {
    fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }

    fn to_column_major(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self.as_slice())
    }
}

// ============================================================================
// Output Conversion
// ============================================================================

/// Convert a correlation matrix into a `p x p` `ndarray`.
pub fn to_array2<T: Float>(matrix: CorrelationMatrix<T>) -> Result<Array2<T>, CorHuberError> {
    let dim = matrix.dim();
    Array2::from_shape_vec((dim, dim), matrix.into_vec())
        .map_err(|e| CorHuberError::InvalidInput(format!("correlation matrix shape: {e}")))
}

/// Convert column-major storage back into an `n x p` `ndarray`.
pub fn column_major_to_array2<T: Float>(
    values: Vec<T>,
    n_rows: usize,
    n_cols: usize,
) -> Result<Array2<T>, CorHuberError> {
    use ndarray::ShapeBuilder;

    let len = values.len();
    Array2::from_shape_vec((n_rows, n_cols).f(), values).map_err(|_| {
        CorHuberError::InvalidDimensions {
            len,
            n_rows,
            n_cols,
        }
    })
}
