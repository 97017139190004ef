//! Execution engine for pairwise correlation.
//!
//! ## Purpose
//!
//! This module runs a configured estimator on a pair of vectors or across
//! all column pairs of a data matrix, assembling the symmetric result.
//!
//! ## Design notes
//!
//! * **Sequential by default**: The pair loop runs on the calling thread.
//! * **Pluggable**: Extension crates can inject a `MatrixPassFn` (e.g. a
//!   parallel pass); the executor falls back to the sequential pass otherwise.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Pair independence**: Entry `(i, j)` depends only on columns `i`, `j`
//!   and the shared read-only constants.
//! * **Scratch merge**: Passes return `(i, j, r)` triples that are written
//!   to disjoint cells of the output afterwards.
//!
//! ## Invariants
//!
//! * Inputs are never modified.
//! * The output is symmetric with unit diagonal.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::method::{CorrelationMethod, TuningConstants};
use crate::engine::output::CorrelationMatrix;
use crate::primitives::matrix::DataMatrix;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for custom matrix pass functions.
///
/// Returns one `(i, j, r)` triple per column pair with `i < j`.
#[doc(hidden)]
pub type MatrixPassFn<T> = fn(
    &DataMatrix<'_, T>,  // data
    CorrelationMethod,   // pairwise estimator
    &TuningConstants<T>, // c, prob, tol
) -> Vec<(usize, usize, T)>;

// ============================================================================
// Pair Helpers
// ============================================================================

/// All column pairs `(i, j)` with `i < j`, in row-major order.
pub fn upper_triangle_pairs(p: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(p * p.saturating_sub(1) / 2);
    for i in 0..p {
        for j in (i + 1)..p {
            pairs.push((i, j));
        }
    }
    pairs
}

/// Correlation of columns `i` and `j`.
#[inline]
pub fn correlate_pair<T: Float>(
    data: &DataMatrix<'_, T>,
    i: usize,
    j: usize,
    method: CorrelationMethod,
    constants: &TuningConstants<T>,
) -> T {
    method.correlate_columns(data.column(i), data.column(j), constants)
}

/// Sequential matrix pass over every column pair.
pub fn matrix_pass_sequential<T: Float>(
    data: &DataMatrix<'_, T>,
    method: CorrelationMethod,
    constants: &TuningConstants<T>,
) -> Vec<(usize, usize, T)> {
    upper_triangle_pairs(data.n_cols())
        .into_iter()
        .map(|(i, j)| (i, j, correlate_pair(data, i, j, method, constants)))
        .collect()
}

/// Merge pairwise results into a symmetric matrix with unit diagonal.
pub fn assemble<T: Float>(dim: usize, entries: Vec<(usize, usize, T)>) -> CorrelationMatrix<T> {
    let mut matrix = CorrelationMatrix::identity(dim);
    for (i, j, r) in entries {
        matrix.set_pair(i, j, r);
    }
    matrix
}

// ============================================================================
// Executor
// ============================================================================

/// Runs a configured estimator on vectors or matrices.
#[derive(Debug, Clone)]
pub struct CorrelationExecutor<T> {
    /// Pairwise estimator.
    pub method: CorrelationMethod,

    /// Tuning constants.
    pub constants: TuningConstants<T>,

    /// Custom matrix pass (e.g. parallel).
    #[doc(hidden)]
    pub custom_matrix_pass: Option<MatrixPassFn<T>>,
}

impl<T: Float> CorrelationExecutor<T> {
    /// Create an executor using the sequential matrix pass.
    pub fn new(method: CorrelationMethod, constants: TuningConstants<T>) -> Self {
        Self {
            method,
            constants,
            custom_matrix_pass: None,
        }
    }

    /// Set a custom matrix pass function.
    #[doc(hidden)]
    pub fn custom_matrix_pass(mut self, pass: Option<MatrixPassFn<T>>) -> Self {
        self.custom_matrix_pass = pass;
        self
    }

    /// Correlation of a single pair of vectors.
    ///
    /// `x` and `y` must have equal length; callers validate.
    pub fn correlate(&self, x: &[T], y: &[T]) -> T {
        self.method.correlate_columns(x, y, &self.constants)
    }

    /// Correlation matrix over all columns of `data`.
    pub fn correlation_matrix(&self, data: &DataMatrix<'_, T>) -> CorrelationMatrix<T> {
        let p = data.n_cols();
        debug!(
            n_rows = data.n_rows(),
            n_cols = p,
            method = ?self.method,
            custom_pass = self.custom_matrix_pass.is_some(),
            "assembling correlation matrix"
        );

        let pass = self.custom_matrix_pass.unwrap_or(matrix_pass_sequential);
        let entries = pass(data, self.method, &self.constants);

        assemble(p, entries)
    }
}
