//! Output types for correlation matrix operations.
//!
//! ## Purpose
//!
//! This module defines `CorrelationMatrix`, the symmetric `p x p` result of
//! pairwise correlation over the columns of a data matrix.
//!
//! ## Design notes
//!
//! * **Storage**: Row-major `Vec<T>`; symmetric, so it is column-major too.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * The diagonal is exactly 1.
//! * `get(i, j) == get(j, i)` bit-for-bit (NaN entries included).
//!
//! ## Non-goals
//!
//! * This module does not compute correlations; it only stores them.

// External dependencies
use num_traits::Float;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Result Structure
// ============================================================================

/// Symmetric correlation matrix with unit diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix<T> {
    values: Vec<T>,
    dim: usize,
}

impl<T: Float> CorrelationMatrix<T> {
    /// Identity matrix of dimension `dim`.
    pub fn identity(dim: usize) -> Self {
        let mut values = vec![T::zero(); dim * dim];
        for i in 0..dim {
            values[i * dim + i] = T::one();
        }
        Self { values, dim }
    }

    /// Set the off-diagonal pair `(i, j)` and `(j, i)` to `r`.
    ///
    /// Diagonal positions are left untouched.
    #[inline]
    pub fn set_pair(&mut self, i: usize, j: usize, r: T) {
        if i == j {
            return;
        }
        self.values[i * self.dim + j] = r;
        self.values[j * self.dim + i] = r;
    }

    /// Entry at row `i`, column `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.values[i * self.dim + j]
    }

    /// Number of variables `p`.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Row-major storage.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Consume the matrix, returning its row-major storage.
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[T] {
        &self.values[i * self.dim..(i + 1) * self.dim]
    }

    /// Copy into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.dim).map(|i| self.row(i).to_vec()).collect()
    }

    /// Whether any off-diagonal entry is NaN.
    pub fn has_undefined(&self) -> bool {
        self.values.iter().any(|v| v.is_nan())
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for CorrelationMatrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Correlation matrix ({} x {}):", self.dim, self.dim)?;
        for i in 0..self.dim {
            write!(f, " ")?;
            for v in self.row(i) {
                write!(f, " {:>9.5}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
