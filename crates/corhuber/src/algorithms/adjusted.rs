//! Huber correlation based on adjusted univariate winsorization.
//!
//! ## Purpose
//!
//! Symmetric clamping wastes information when most observations sit in one
//! pair of opposite quadrants. Adjusted winsorization keeps the constant `c`
//! for the majority ("major") quadrant pair and shrinks the constant of the
//! minority pair by the square root of the relative count.
//!
//! ## Key concepts
//!
//! * **n1**: Observations with `x * y >= 0` (1st/3rd quadrants plus axes).
//! * **n2**: Observations with `x * y <= 0` (2nd/4th quadrants plus axes).
//! * **Major pair**: 2nd/4th if `n1 < n2`, otherwise 1st/3rd. Ties go to
//!   1st/3rd.
//! * **Axes**: Observations with `x * y == 0` are clamped with plain `c`.
//!
//! ## Invariants
//!
//! * The major pair always uses exactly `c`; the minor constant is `<= c`.
//! * The minor constant is 0 when no observation lies strictly inside the
//!   minor pair.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::pearson::cor_pearson;
use crate::math::winsorize::WinsorBounds;
use crate::primitives::quadrant::{Quadrant, SignPartition};

/// Winsorization constants for each quadrant class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustedConstants<T> {
    /// Constant for the 1st/3rd quadrants.
    pub c1: T,

    /// Constant for the 2nd/4th quadrants.
    pub c2: T,

    /// Unadjusted constant, used on the axes.
    pub c: T,
}

impl<T: Float> AdjustedConstants<T> {
    /// Derive the per-quadrant constants from a sign partition.
    pub fn from_partition(partition: &SignPartition, c: T) -> Self {
        let n = partition.len();
        let (n1, n2) = (partition.n1, partition.n2);

        let ratio = |num: usize, den: usize| -> T {
            let num = T::from(num).unwrap_or(T::nan());
            let den = T::from(den).unwrap_or(T::nan());
            (num / den).sqrt()
        };

        if n1 < n2 {
            // 2nd/4th quadrants are major; axes are removed from the minor count
            let n1 = n - n2;
            let c2 = c;
            Self {
                c1: ratio(n1, n2) * c2,
                c2,
                c,
            }
        } else {
            // 1st/3rd quadrants are major, including ties
            let n2 = n - n1;
            let c1 = c;
            Self {
                c1,
                c2: ratio(n2, n1) * c1,
                c,
            }
        }
    }

    /// Clamp bounds for an observation of the given class.
    #[inline]
    pub fn bounds_for(&self, quadrant: Quadrant) -> WinsorBounds<T> {
        match quadrant {
            Quadrant::Concordant => WinsorBounds::symmetric(self.c1),
            Quadrant::Discordant => WinsorBounds::symmetric(self.c2),
            Quadrant::Boundary => WinsorBounds::symmetric(self.c),
        }
    }
}

/// Clamp `x` and `y` observation-wise with quadrant-specific constants.
pub fn winsorize_adjusted<T: Float>(x: &[T], y: &[T], c: T) -> (Vec<T>, Vec<T>) {
    let partition = SignPartition::from_pairs(x, y);
    let constants = AdjustedConstants::from_partition(&partition, c);

    let mut wx = Vec::with_capacity(x.len());
    let mut wy = Vec::with_capacity(y.len());
    for ((&xi, &yi), &label) in x.iter().zip(y.iter()).zip(partition.labels.iter()) {
        let bounds = constants.bounds_for(label);
        wx.push(bounds.clamp(xi));
        wy.push(bounds.clamp(yi));
    }

    (wx, wy)
}

/// Robust correlation based on adjusted univariate winsorization.
pub fn cor_huber_adj<T: Float>(x: &[T], y: &[T], c: T) -> T {
    let (wx, wy) = winsorize_adjusted(x, y, c);
    cor_pearson(&wx, &wy)
}
