//! Squared Mahalanobis distances under a correlation model.
//!
//! ## Purpose
//!
//! Bivariate and multivariate winsorization measure how far an observation
//! lies from the origin relative to a correlation matrix `R`, using the
//! quadratic form `x R^-1 x'`.
//!
//! ## Design notes
//!
//! * **2 x 2**: Inverted in closed form; callers guard against `|r| -> 1`.
//! * **p x p**: Inverted with `nalgebra` (LU, pseudo-inverse fallback) in
//!   `f64` precision, then converted back.
//!
//! ## Invariants
//!
//! * Distances are non-negative whenever `R` is positive definite.

// External dependencies
use nalgebra::DMatrix;
use num_traits::Float;

// ============================================================================
// 2 x 2 Correlation Model
// ============================================================================

/// Inverse of the 2 x 2 correlation matrix `[[1, r], [r, 1]]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseCorrelation2<T> {
    diag: T,
    off_diag: T,
}

impl<T: Float> InverseCorrelation2<T> {
    /// Invert `[[1, r], [r, 1]]`.
    ///
    /// Produces non-finite entries when `|r| == 1`.
    pub fn new(r: T) -> Self {
        let det = T::one() - r * r;
        Self {
            diag: T::one() / det,
            off_diag: -r / det,
        }
    }

    /// Diagonal entry of the inverse.
    pub fn diag(&self) -> T {
        self.diag
    }

    /// Off-diagonal entry of the inverse.
    pub fn off_diag(&self) -> T {
        self.off_diag
    }

    /// Squared distance `[x, y] R^-1 [x, y]'`.
    #[inline]
    pub fn squared_distance(&self, x: T, y: T) -> T {
        let two = T::one() + T::one();
        self.diag * (x * x + y * y) + two * self.off_diag * (x * y)
    }
}

// ============================================================================
// p x p Correlation Model
// ============================================================================

/// Inverse of a general `p x p` correlation matrix, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct InverseCorrelation<T> {
    values: Vec<T>,
    dim: usize,
}

impl<T: Float> InverseCorrelation<T> {
    /// Invert a row-major `dim x dim` matrix.
    ///
    /// Returns `None` when neither the inverse nor the pseudo-inverse exists
    /// or when the input contains non-finite values.
    pub fn new(values: &[T], dim: usize) -> Option<Self> {
        if values.len() != dim * dim || values.iter().any(|v| !v.is_finite()) {
            return None;
        }

        let entries: Vec<f64> = values
            .iter()
            .map(|v| v.to_f64().unwrap_or(f64::NAN))
            .collect();
        let matrix = DMatrix::from_row_slice(dim, dim, &entries);

        let inverse = match matrix.clone().try_inverse() {
            Some(inv) => inv,
            None => matrix.pseudo_inverse(f64::EPSILON * 100.0).ok()?,
        };

        // nalgebra stores column-major.
        let values = inverse
            .transpose()
            .as_slice()
            .iter()
            .map(|&v| T::from(v).unwrap_or(T::nan()))
            .collect();

        Some(Self { values, dim })
    }

    /// Dimension of the matrix.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry `(i, j)` of the inverse.
    pub fn get(&self, i: usize, j: usize) -> T {
        self.values[i * self.dim + j]
    }

    /// Squared distance `row R^-1 row'` for one observation.
    pub fn squared_distance(&self, row: &[T]) -> T {
        debug_assert_eq!(row.len(), self.dim);
        let mut total = T::zero();
        for (i, &ri) in row.iter().enumerate() {
            let mut acc = T::zero();
            for (j, &rj) in row.iter().enumerate() {
                acc = acc + self.values[i * self.dim + j] * rj;
            }
            total = total + ri * acc;
        }
        total
    }
}
