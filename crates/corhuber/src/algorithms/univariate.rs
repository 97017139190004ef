//! Huber correlation based on univariate winsorization.
//!
//! Both variables are clamped independently to `[-c, c]` and the Pearson
//! correlation of the clamped data is returned. Inputs are assumed to be
//! robustly standardized so `c` is meaningful in standardized units.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::pearson::cor_pearson;
use crate::math::winsorize::WinsorBounds;

/// Clamp `x` and `y` to `[-c, c]` into freshly allocated vectors.
pub fn winsorize_univariate<T: Float>(x: &[T], y: &[T], c: T) -> (Vec<T>, Vec<T>) {
    let bounds = WinsorBounds::symmetric(c);
    (bounds.clamp_all(x), bounds.clamp_all(y))
}

/// Robust correlation based on univariate winsorization.
pub fn cor_huber_uni<T: Float>(x: &[T], y: &[T], c: T) -> T {
    let (wx, wy) = winsorize_univariate(x, y, c);
    cor_pearson(&wx, &wy)
}
