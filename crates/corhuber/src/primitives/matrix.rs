//! Borrowed column-major matrix view.
//!
//! ## Purpose
//!
//! Correlation matrices are computed over the columns (variables) of an
//! `n x p` data matrix. This module provides a zero-copy view over flat,
//! column-major storage so every column is a contiguous slice.
//!
//! ## Invariants
//!
//! * `values.len() == n_rows * n_cols`.
//! * Column `j` occupies `values[j * n_rows..(j + 1) * n_rows]`.
//!
//! ## Non-goals
//!
//! * This module does not copy, reorder, or modify the underlying data.

// Internal dependencies
use crate::primitives::errors::CorHuberError;

/// Read-only `n_rows x n_cols` matrix view over column-major storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataMatrix<'a, T> {
    values: &'a [T],
    n_rows: usize,
    n_cols: usize,
}

impl<'a, T> DataMatrix<'a, T> {
    /// Wrap column-major storage, checking that the shape matches its length.
    pub fn from_column_major(
        values: &'a [T],
        n_rows: usize,
        n_cols: usize,
    ) -> Result<Self, CorHuberError> {
        let expected = n_rows.checked_mul(n_cols);
        if expected != Some(values.len()) {
            return Err(CorHuberError::InvalidDimensions {
                len: values.len(),
                n_rows,
                n_cols,
            });
        }
        Ok(Self {
            values,
            n_rows,
            n_cols,
        })
    }

    /// Number of observations.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of variables.
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Contiguous slice of column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `j >= n_cols`.
    #[inline]
    pub fn column(&self, j: usize) -> &'a [T] {
        let start = j * self.n_rows;
        &self.values[start..start + self.n_rows]
    }

    /// Iterate over the columns in order.
    pub fn columns(&self) -> impl Iterator<Item = &'a [T]> + '_ {
        (0..self.n_cols).map(move |j| self.column(j))
    }

    /// Underlying column-major storage.
    pub fn as_slice(&self) -> &'a [T] {
        self.values
    }
}

impl<T: Copy> DataMatrix<'_, T> {
    /// Value at row `i`, column `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.values[j * self.n_rows + i]
    }
}
