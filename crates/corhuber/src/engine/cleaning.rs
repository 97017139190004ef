//! Multivariate winsorization of standardized data.
//!
//! ## Purpose
//!
//! This module cleans a whole data matrix with the robust correlation
//! matrix: each observation (row) whose squared Mahalanobis distance exceeds
//! the `prob` quantile of the chi-squared distribution with `p` degrees of
//! freedom is shrunk toward the origin onto the tolerance ellipsoid.
//!
//! ## Design notes
//!
//! * **Correlation model**: Built by the executor, so a custom (parallel)
//!   matrix pass is honored here too.
//! * **Single variable**: With `p == 1` there is no correlation structure;
//!   values are clamped to `[-c, c]`.
//!
//! ## Invariants
//!
//! * Shrink weights lie in `(0, 1]`; rows inside the ellipsoid keep weight 1.
//! * Observations with a non-finite value or distance get weight 1.
//! * The output has the same shape and layout as the input.
//!
//! ## Non-goals
//!
//! * This module does not standardize the data; inputs are expected to be
//!   robustly centered and scaled already.

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::engine::executor::CorrelationExecutor;
use crate::engine::output::CorrelationMatrix;
use crate::math::chisq::chi_squared_quantile;
use crate::math::mahalanobis::InverseCorrelation;
use crate::math::winsorize::WinsorBounds;
use crate::primitives::errors::CorHuberError;
use crate::primitives::matrix::DataMatrix;

// ============================================================================
// Result Structure
// ============================================================================

/// Winsorized data together with the model used to clean it.
#[derive(Debug, Clone, PartialEq)]
pub struct WinsorizedData<T> {
    /// Cleaned values, column-major, same shape as the input.
    pub data: Vec<T>,

    /// Number of observations.
    pub n_rows: usize,

    /// Number of variables.
    pub n_cols: usize,

    /// Per-observation shrink factor applied to the row.
    pub weights: Vec<T>,

    /// Robust correlation matrix of the input.
    pub correlation: CorrelationMatrix<T>,
}

impl<T: Float> WinsorizedData<T> {
    /// Borrow the cleaned values as a matrix view.
    pub fn as_matrix(&self) -> Result<DataMatrix<'_, T>, CorHuberError> {
        DataMatrix::from_column_major(&self.data, self.n_rows, self.n_cols)
    }

    /// Number of observations that were shrunk.
    pub fn n_shrunk(&self) -> usize {
        self.weights.iter().filter(|&&w| w < T::one()).count()
    }
}

// ============================================================================
// Cleaning
// ============================================================================

/// Winsorize every observation of `data` with the executor's estimator.
pub fn winsorize_data<T: Float>(
    data: &DataMatrix<'_, T>,
    executor: &CorrelationExecutor<T>,
) -> Result<WinsorizedData<T>, CorHuberError> {
    let (n, p) = (data.n_rows(), data.n_cols());
    debug!(n_rows = n, n_cols = p, "winsorizing data matrix");

    if p == 1 {
        return Ok(winsorize_single(data, executor.constants.c));
    }

    // Step 1: Robust correlation model
    let correlation = executor.correlation_matrix(data);
    let inverse = InverseCorrelation::new(correlation.as_slice(), p)
        .ok_or(CorHuberError::SingularMatrix)?;

    // Step 2: Distance threshold
    let d = chi_squared_quantile(executor.constants.prob, p)?;

    // Step 3: Shrink weights per row
    let mut row = vec![T::zero(); p];
    let mut weights = Vec::with_capacity(n);
    for i in 0..n {
        for (j, v) in row.iter_mut().enumerate() {
            *v = data.get(i, j);
        }
        let md = inverse.squared_distance(&row);
        let w = if md.is_finite() && md > d {
            (d / md).sqrt()
        } else {
            T::one()
        };
        weights.push(w);
    }

    // Step 4: Apply weights column by column
    let mut cleaned = Vec::with_capacity(n * p);
    for column in data.columns() {
        cleaned.extend(column.iter().zip(weights.iter()).map(|(&v, &w)| v * w));
    }

    debug!(
        shrunk = weights.iter().filter(|&&w| w < T::one()).count(),
        "data matrix winsorized"
    );

    Ok(WinsorizedData {
        data: cleaned,
        n_rows: n,
        n_cols: p,
        weights,
        correlation,
    })
}

// Univariate fallback: plain clamping to [-c, c].
fn winsorize_single<T: Float>(data: &DataMatrix<'_, T>, c: T) -> WinsorizedData<T> {
    let bounds = WinsorBounds::symmetric(c);
    let column = data.column(0);
    let cleaned = bounds.clamp_all(column);

    let weights = column
        .iter()
        .zip(cleaned.iter())
        .map(|(&v, &w)| {
            if !v.is_finite() || v == w || v == T::zero() {
                T::one()
            } else {
                (w / v).abs()
            }
        })
        .collect();

    WinsorizedData {
        data: cleaned,
        n_rows: data.n_rows(),
        n_cols: 1,
        weights,
        correlation: CorrelationMatrix::identity(1),
    }
}
