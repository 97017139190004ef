//! Huber correlation based on bivariate winsorization.
//!
//! ## Purpose
//!
//! Univariate clamping misses points that are outlying jointly but not on
//! either axis. Bivariate winsorization shrinks every observation whose
//! squared Mahalanobis distance (under a pilot correlation) exceeds a
//! chi-squared quantile back onto the tolerance ellipse.
//!
//! ## Design notes
//!
//! * **Pilot**: Adjusted univariate winsorization (see `adjusted`).
//! * **Threshold**: `d = F^-1(prob)` of the chi-squared distribution with 2
//!   degrees of freedom, i.e. the distance exceeded with probability
//!   `1 - prob` by bivariate normal data.
//! * **Shrinkage**: Rows beyond the threshold are scaled by `sqrt(d / md)`,
//!   which keeps their direction.
//!
//! ## Invariants
//!
//! * A NaN pilot, or one with `1 - |r0| < tol`, is returned unchanged.
//! * Rows within the ellipse are left untouched.

// External dependencies
use num_traits::Float;
use tracing::trace;

// Internal dependencies
use crate::algorithms::adjusted::cor_huber_adj;
use crate::math::chisq::chi_squared_2_quantile;
use crate::math::mahalanobis::InverseCorrelation2;
use crate::math::pearson::cor_pearson;

/// Whether a pilot correlation is unusable for bivariate shrinkage.
///
/// True for NaN/infinite pilots and for pilots so close to `±1` that the
/// 2 x 2 correlation matrix is numerically singular.
#[inline]
pub fn is_degenerate_pilot<T: Float>(r0: T, tol: T) -> bool {
    !r0.is_finite() || T::one() - r0.abs() < tol
}

/// Shrink observations onto the `prob` tolerance ellipse of `[[1, r0], [r0, 1]]`.
pub fn winsorize_bivariate<T: Float>(x: &[T], y: &[T], r0: T, prob: T) -> (Vec<T>, Vec<T>) {
    let inverse = InverseCorrelation2::new(r0);
    let d = chi_squared_2_quantile(prob);

    let mut wx = Vec::with_capacity(x.len());
    let mut wy = Vec::with_capacity(y.len());
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let md = inverse.squared_distance(xi, yi);
        if md > d {
            let scale = (d / md).sqrt();
            wx.push(xi * scale);
            wy.push(yi * scale);
        } else {
            wx.push(xi);
            wy.push(yi);
        }
    }

    (wx, wy)
}

/// Robust correlation based on bivariate winsorization.
pub fn cor_huber_bi<T: Float>(x: &[T], y: &[T], c: T, prob: T, tol: T) -> T {
    let r0 = cor_huber_adj(x, y, c);

    if is_degenerate_pilot(r0, tol) {
        trace!(
            r0 = r0.to_f64().unwrap_or(f64::NAN),
            "degenerate pilot correlation, skipping bivariate shrinkage"
        );
        return r0;
    }

    let (wx, wy) = winsorize_bivariate(x, y, r0, prob);
    cor_pearson(&wx, &wy)
}
