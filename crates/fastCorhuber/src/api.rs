//! High-level API for robust correlation with parallel execution support.
//!
//! ## Purpose
//!
//! This module extends the `corhuber` builder with parallel matrix assembly
//! and `ndarray` inputs and outputs.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `corhuber` builder and its validation.
//! * **Parallel-First**: Matrix assembly runs on all cores unless `.parallel(false)`.
//! * **Feature-Gated**: Parallelism is configurable via the `cpu` crate feature.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelCorHuberBuilder`] via `CorHuber::new()`.
//! 2. Chain configuration methods (`.method()`, `.constant()`, etc.).
//! 3. Call `.build()` to obtain a [`ParallelCorHuberModel`].

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::matrix_pass_parallel;

// External dependencies
use ndarray::{Array1, Array2};
use num_traits::Float;

// Internal dependencies
use crate::input::{CorInput, MatrixInput, column_major_to_array2, to_array2};

// Publicly re-exported types
pub use corhuber::internals::algorithms::method::{CorrelationMethod, TuningConstants};
pub use corhuber::internals::api::{CorHuberBuilder, CorHuberModel};
pub use corhuber::internals::engine::output::CorrelationMatrix;
pub use corhuber::internals::primitives::errors::CorHuberError;
pub use corhuber::internals::primitives::matrix::DataMatrix;

// ============================================================================
// Extended Builder
// ============================================================================

/// Builder for robust correlation models with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelCorHuberBuilder<T: Float> {
    /// Base builder from the corhuber crate
    pub base: CorHuberBuilder<T>,

    /// Parallel matrix assembly (default: true).
    pub parallel: Option<bool>,
}

impl<T: Float> Default for ParallelCorHuberBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelCorHuberBuilder<T> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from corhuber `CorHuberBuilder`
    /// * parallel: true (fastCorhuber extension)
    pub fn new() -> Self {
        Self {
            base: CorHuberBuilder::new(),
            parallel: None,
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.base.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the pairwise estimator.
    pub fn method(mut self, method: CorrelationMethod) -> Self {
        self.base = self.base.method(method);
        self
    }

    /// Set the winsorization constant.
    pub fn constant(mut self, c: T) -> Self {
        self.base = self.base.constant(c);
        self
    }

    /// Set the tolerance ellipse coverage probability.
    pub fn probability(mut self, prob: T) -> Self {
        self.base = self.base.probability(prob);
        self
    }

    /// Set the near-singularity tolerance.
    pub fn tolerance(mut self, tol: T) -> Self {
        self.base = self.base.tolerance(tol);
        self
    }
}

impl<T: Float + Send + Sync> ParallelCorHuberBuilder<T> {
    /// Validate the configuration and build a model.
    pub fn build(self) -> Result<ParallelCorHuberModel<T>, CorHuberError> {
        let parallel = self.parallel.unwrap_or(true);

        #[allow(unused_mut)]
        let mut base = self.base;

        #[cfg(feature = "cpu")]
        if parallel {
            base = base.custom_matrix_pass(matrix_pass_parallel::<T>);
        }

        Ok(ParallelCorHuberModel {
            base: base.build()?,
            parallel,
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// Winsorized data as `ndarray` containers.
#[derive(Debug, Clone, PartialEq)]
pub struct WinsorizedArray<T> {
    /// Cleaned `n x p` data.
    pub data: Array2<T>,

    /// Per-observation shrink factor.
    pub weights: Array1<T>,

    /// Robust `p x p` correlation matrix of the input.
    pub correlation: Array2<T>,
}

/// A configured robust correlation estimator with parallel matrix assembly.
#[derive(Debug, Clone)]
pub struct ParallelCorHuberModel<T> {
    base: CorHuberModel<T>,
    parallel: bool,
}

impl<T: Float> ParallelCorHuberModel<T> {
    /// Whether matrix assembly was configured to run in parallel.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Pairwise estimator in use.
    pub fn method(&self) -> CorrelationMethod {
        self.base.method()
    }

    /// Tuning constants in use.
    pub fn constants(&self) -> TuningConstants<T> {
        self.base.constants()
    }

    /// Correlation of `x` and `y`.
    pub fn correlate<X, Y>(&self, x: &X, y: &Y) -> Result<T, CorHuberError>
    where
        X: CorInput<T> + ?Sized,
        Y: CorInput<T> + ?Sized,
    {
        self.base.correlate(x.as_cor_slice()?, y.as_cor_slice()?)
    }

    /// Correlation matrix over the columns of `data`.
    pub fn correlation_matrix<M>(&self, data: &M) -> Result<CorrelationMatrix<T>, CorHuberError>
    where
        M: MatrixInput<T> + ?Sized,
    {
        let (n_rows, n_cols) = data.shape();
        let values = data.to_column_major();
        let view = DataMatrix::from_column_major(&values, n_rows, n_cols)?;
        self.base.correlation_matrix(&view)
    }

    /// Correlation matrix over the columns of `data` as a `p x p` array.
    pub fn correlation_array<M>(&self, data: &M) -> Result<Array2<T>, CorHuberError>
    where
        M: MatrixInput<T> + ?Sized,
    {
        to_array2(self.correlation_matrix(data)?)
    }

    /// Winsorize every observation of a standardized data matrix.
    pub fn winsorize<M>(&self, data: &M) -> Result<WinsorizedArray<T>, CorHuberError>
    where
        M: MatrixInput<T> + ?Sized,
    {
        let (n_rows, n_cols) = data.shape();
        let values = data.to_column_major();
        let view = DataMatrix::from_column_major(&values, n_rows, n_cols)?;
        let cleaned = self.base.winsorize(&view)?;

        Ok(WinsorizedArray {
            data: column_major_to_array2(cleaned.data, cleaned.n_rows, cleaned.n_cols)?,
            weights: Array1::from_vec(cleaned.weights),
            correlation: to_array2(cleaned.correlation)?,
        })
    }
}
