//! High-level API for robust Huber-type correlation.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: validated free
//! functions for the individual estimators, and a fluent builder that
//! configures an estimator once and applies it to vectors, matrices, or
//! whole data sets.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Preconditions are checked when `.build()` is called and
//!   on every input; undefined correlations are returned as NaN.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Defaults**: `c = 2`, `prob = 0.95`, `tol = sqrt(f64::EPSILON)`,
//!   bivariate winsorization.
//! * **Standardized inputs**: Callers robustly standardize data (e.g. with
//!   median and MAD) before calling, so `c` is in standardized units.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`CorHuberBuilder`] via `CorHuber::new()`.
//! 2. Chain configuration methods (`.method()`, `.constant()`, etc.).
//! 3. Call `.build()` to obtain a validated [`CorHuberModel`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::{adjusted, bivariate, univariate};
use crate::engine::cleaning::winsorize_data;
use crate::engine::executor::{CorrelationExecutor, MatrixPassFn};
use crate::engine::validator::Validator;
use crate::math::pearson;

// Publicly re-exported types
pub use crate::algorithms::method::{CorrelationMethod, TuningConstants};
pub use crate::engine::cleaning::WinsorizedData;
pub use crate::engine::output::CorrelationMatrix;
pub use crate::math::winsorize::{WinsorBounds, winsorize};
pub use crate::primitives::errors::CorHuberError;
pub use crate::primitives::matrix::DataMatrix;

// ============================================================================
// Free Functions
// ============================================================================

/// Sample Pearson correlation of `x` and `y`.
///
/// Returns `Ok(NaN)` when either vector has zero variance.
pub fn cor_pearson<T: Float>(x: &[T], y: &[T]) -> Result<T, CorHuberError> {
    Validator::validate_inputs(x, y)?;
    Ok(pearson::cor_pearson(x, y))
}

/// Huber correlation based on univariate winsorization with constant `c`.
pub fn cor_huber_uni<T: Float>(x: &[T], y: &[T], c: T) -> Result<T, CorHuberError> {
    Validator::validate_inputs(x, y)?;
    Validator::validate_constant(c)?;
    Ok(univariate::cor_huber_uni(x, y, c))
}

/// Huber correlation based on adjusted univariate winsorization.
pub fn cor_huber_adj<T: Float>(x: &[T], y: &[T], c: T) -> Result<T, CorHuberError> {
    Validator::validate_inputs(x, y)?;
    Validator::validate_constant(c)?;
    Ok(adjusted::cor_huber_adj(x, y, c))
}

/// Huber correlation based on bivariate winsorization.
///
/// `prob` is the coverage of the tolerance ellipse and `tol` the guard
/// below which `1 - |r0|` skips the bivariate step.
pub fn cor_huber_bi<T: Float>(
    x: &[T],
    y: &[T],
    c: T,
    prob: T,
    tol: T,
) -> Result<T, CorHuberError> {
    Validator::validate_inputs(x, y)?;
    Validator::validate_constants(&TuningConstants::new(c, prob, tol))?;
    Ok(bivariate::cor_huber_bi(x, y, c, prob, tol))
}

/// Robust correlation matrix based on bivariate winsorization.
pub fn cor_mat_huber<T: Float>(
    data: &DataMatrix<'_, T>,
    c: T,
    prob: T,
    tol: T,
) -> Result<CorrelationMatrix<T>, CorHuberError> {
    CorHuberBuilder::new()
        .constant(c)
        .probability(prob)
        .tolerance(tol)
        .build()?
        .correlation_matrix(data)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring robust correlation estimators.
#[derive(Debug, Clone)]
pub struct CorHuberBuilder<T> {
    /// Pairwise estimator.
    pub method: Option<CorrelationMethod>,

    /// Winsorization constant `c`.
    pub constant: Option<T>,

    /// Tolerance ellipse coverage probability.
    pub probability: Option<T>,

    /// Singularity guard for the pilot correlation.
    pub tolerance: Option<T>,

    // ======================================
    // DEV
    // ======================================
    /// Custom matrix pass function.
    #[doc(hidden)]
    pub custom_matrix_pass: Option<MatrixPassFn<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for CorHuberBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> CorHuberBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            method: None,
            constant: None,
            probability: None,
            tolerance: None,
            custom_matrix_pass: None,
            duplicate_param: None,
        }
    }

    /// Set the pairwise estimator.
    pub fn method(mut self, method: CorrelationMethod) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set the winsorization constant (in standardized units).
    pub fn constant(mut self, c: T) -> Self {
        if self.constant.is_some() {
            self.duplicate_param = Some("constant");
        }
        self.constant = Some(c);
        self
    }

    /// Set the coverage probability of the bivariate tolerance ellipse.
    pub fn probability(mut self, prob: T) -> Self {
        if self.probability.is_some() {
            self.duplicate_param = Some("probability");
        }
        self.probability = Some(prob);
        self
    }

    /// Set the tolerance of the near-singularity guard.
    pub fn tolerance(mut self, tol: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tol);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom matrix pass function for execution (only for dev)
    #[doc(hidden)]
    pub fn custom_matrix_pass(mut self, pass: MatrixPassFn<T>) -> Self {
        self.custom_matrix_pass = Some(pass);
        self
    }

    // ==========================
    // Build
    // ==========================

    /// Validate the configuration and build a model.
    pub fn build(self) -> Result<CorHuberModel<T>, CorHuberError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = TuningConstants::default();
        let constants = TuningConstants::new(
            self.constant.unwrap_or(defaults.c),
            self.probability.unwrap_or(defaults.prob),
            self.tolerance.unwrap_or(defaults.tol),
        );
        Validator::validate_constants(&constants)?;

        let executor = CorrelationExecutor::new(self.method.unwrap_or_default(), constants)
            .custom_matrix_pass(self.custom_matrix_pass);

        Ok(CorHuberModel { executor })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A configured, validated robust correlation estimator.
#[derive(Debug, Clone)]
pub struct CorHuberModel<T> {
    executor: CorrelationExecutor<T>,
}

impl<T: Float> CorHuberModel<T> {
    /// Pairwise estimator in use.
    pub fn method(&self) -> CorrelationMethod {
        self.executor.method
    }

    /// Tuning constants in use.
    pub fn constants(&self) -> TuningConstants<T> {
        self.executor.constants
    }

    /// Correlation of `x` and `y`.
    pub fn correlate(&self, x: &[T], y: &[T]) -> Result<T, CorHuberError> {
        Validator::validate_inputs(x, y)?;
        Ok(self.executor.correlate(x, y))
    }

    /// Correlation matrix over the columns of `data`.
    pub fn correlation_matrix(
        &self,
        data: &DataMatrix<'_, T>,
    ) -> Result<CorrelationMatrix<T>, CorHuberError> {
        Validator::validate_matrix(data)?;
        Ok(self.executor.correlation_matrix(data))
    }

    /// Winsorize every observation of a standardized data matrix.
    pub fn winsorize(&self, data: &DataMatrix<'_, T>) -> Result<WinsorizedData<T>, CorHuberError> {
        Validator::validate_matrix(data)?;
        winsorize_data(data, &self.executor)
    }
}
