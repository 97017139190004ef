//! Sample Pearson correlation.
//!
//! ## Purpose
//!
//! This module provides the leaf estimator every Huber-type correlation
//! reduces to once the data have been winsorized.
//!
//! ## Design notes
//!
//! * **Two-pass**: Means first, then centered cross-products, which is
//!   numerically more stable than the single-pass sum-of-products form.
//! * **Scaling**: Covariance and variances share the same `(n - 1)` factor,
//!   so it cancels and is never applied.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * The result lies in `[-1, 1]` (up to rounding) whenever both inputs have
//!   non-zero variance.
//! * Zero variance in either input yields NaN, never an error.
//!
//! ## Non-goals
//!
//! * This module does not validate input lengths (done by the validator).

// External dependencies
use num_traits::Float;

/// Sample Pearson correlation of `x` and `y`.
///
/// Returns NaN when either vector has zero variance or is empty.
pub fn cor_pearson<T: Float>(x: &[T], y: &[T]) -> T {
    debug_assert_eq!(x.len(), y.len(), "x and y must have equal length");

    let n = T::from(x.len()).unwrap_or(T::nan());

    // Step 1: Means
    let mut sum_x = T::zero();
    let mut sum_y = T::zero();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        sum_x = sum_x + xi;
        sum_y = sum_y + yi;
    }
    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    // Step 2: Centered cross-products, up to the (n - 1) factor
    let mut cov_xy = T::zero();
    let mut var_x = T::zero();
    let mut var_y = T::zero();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov_xy = cov_xy + dx * dy;
        var_x = var_x + dx * dx;
        var_y = var_y + dy * dy;
    }

    cov_xy / (var_x.sqrt() * var_y.sqrt())
}
