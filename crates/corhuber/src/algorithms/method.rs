//! Selection of the pairwise correlation estimator.
//!
//! ## Purpose
//!
//! Correlation matrices and the fluent API can be built on any of the
//! estimators in this layer. This module names them and bundles the tuning
//! constants they share.
//!
//! ## Key concepts
//!
//! * **Tuning constants**: `c` (clamp radius), `prob` (ellipse coverage),
//!   `tol` (singularity guard). Estimators ignore constants they don't use.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::adjusted::cor_huber_adj;
use crate::algorithms::bivariate::cor_huber_bi;
use crate::algorithms::univariate::cor_huber_uni;
use crate::engine::validator::Validator;
use crate::math::pearson::cor_pearson;
use crate::primitives::errors::CorHuberError;

/// Pairwise correlation estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorrelationMethod {
    /// Plain Pearson correlation, no winsorization.
    Pearson,

    /// Symmetric clamping of each variable to `[-c, c]`.
    Univariate,

    /// Quadrant-adjusted clamping.
    Adjusted,

    /// Ellipsoidal shrinkage with an adjusted pilot (default).
    #[default]
    Bivariate,
}

/// Tuning constants shared by the estimators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TuningConstants<T> {
    /// Winsorization constant in standardized units.
    pub c: T,

    /// Coverage probability of the bivariate tolerance ellipse.
    pub prob: T,

    /// Singularity guard for the pilot correlation.
    pub tol: T,
}

impl<T: Float> TuningConstants<T> {
    /// Default winsorization constant.
    pub const DEFAULT_C: f64 = 2.0;

    /// Default ellipse coverage probability.
    pub const DEFAULT_PROB: f64 = 0.95;

    /// Default singularity tolerance, `sqrt(f64::EPSILON)`.
    pub const DEFAULT_TOL: f64 = 1.490_116_119_384_765_6e-8;

    /// Bundle explicit constants.
    pub fn new(c: T, prob: T, tol: T) -> Self {
        Self { c, prob, tol }
    }
}

impl<T: Float> Default for TuningConstants<T> {
    fn default() -> Self {
        Self {
            c: T::from(Self::DEFAULT_C).unwrap_or(T::one() + T::one()),
            prob: T::from(Self::DEFAULT_PROB).unwrap_or(T::one()),
            tol: T::from(Self::DEFAULT_TOL).unwrap_or(T::epsilon().sqrt()),
        }
    }
}

impl CorrelationMethod {
    /// Compute the correlation of `x` and `y` with this estimator.
    ///
    /// Inputs and constants are validated first; mismatched lengths are an
    /// error, never truncated.
    pub fn correlate<T: Float>(
        &self,
        x: &[T],
        y: &[T],
        constants: &TuningConstants<T>,
    ) -> Result<T, CorHuberError> {
        Validator::validate_inputs(x, y)?;
        Validator::validate_constants(constants)?;
        Ok(self.correlate_columns(x, y, constants))
    }

    /// Unchecked dispatch for columns of an already validated matrix.
    #[inline]
    pub(crate) fn correlate_columns<T: Float>(
        &self,
        x: &[T],
        y: &[T],
        constants: &TuningConstants<T>,
    ) -> T {
        match self {
            Self::Pearson => cor_pearson(x, y),
            Self::Univariate => cor_huber_uni(x, y, constants.c),
            Self::Adjusted => cor_huber_adj(x, y, constants.c),
            Self::Bivariate => cor_huber_bi(x, y, constants.c, constants.prob, constants.tol),
        }
    }
}
