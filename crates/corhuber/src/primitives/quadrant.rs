//! Quadrant classification of paired observations.
//!
//! ## Purpose
//!
//! Adjusted winsorization treats observations differently depending on the
//! quadrant of the `(x, y)` plane they fall in. This module provides the
//! transient sign partition used for that, based on the sign of `x * y`.
//!
//! ## Key concepts
//!
//! * **Concordant**: `x * y > 0` (1st and 3rd quadrants).
//! * **Discordant**: `x * y < 0` (2nd and 4th quadrants).
//! * **Boundary**: `x * y == 0` (on an axis); counted on both sides.
//!
//! ## Invariants
//!
//! * `concordant + boundary == n1` and `discordant + boundary == n2`.
//! * A NaN product is classified as `Boundary`, like any product that is
//!   neither positive nor negative.

// External dependencies
use num_traits::Float;

/// Sign class of a single observation pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// 1st or 3rd quadrant, `sign(x * y) = +1`.
    Concordant,

    /// 2nd or 4th quadrant, `sign(x * y) = -1`.
    Discordant,

    /// On an axis, `sign(x * y) = 0`.
    Boundary,
}

impl Quadrant {
    /// Classify a single observation pair.
    #[inline]
    pub fn classify<T: Float>(x: T, y: T) -> Self {
        let xy = x * y;
        if xy > T::zero() {
            Self::Concordant
        } else if xy < T::zero() {
            Self::Discordant
        } else {
            Self::Boundary
        }
    }

    /// Numeric sign of the class (`+1`, `-1` or `0`).
    pub fn sign(&self) -> i8 {
        match self {
            Self::Concordant => 1,
            Self::Discordant => -1,
            Self::Boundary => 0,
        }
    }
}

/// Per-observation sign partition together with its quadrant counts.
#[derive(Debug, Clone, PartialEq)]
pub struct SignPartition {
    /// Class of every observation, in input order.
    pub labels: Vec<Quadrant>,

    /// Observations in the 1st/3rd quadrants, boundaries included.
    pub n1: usize,

    /// Observations in the 2nd/4th quadrants, boundaries included.
    pub n2: usize,
}

impl SignPartition {
    /// Classify every pair `(x[i], y[i])`.
    ///
    /// `x` and `y` must have equal length.
    pub fn from_pairs<T: Float>(x: &[T], y: &[T]) -> Self {
        let mut labels = Vec::with_capacity(x.len());
        let mut n1 = 0;
        let mut n2 = 0;

        for (&xi, &yi) in x.iter().zip(y.iter()) {
            let label = Quadrant::classify(xi, yi);
            match label {
                Quadrant::Concordant => n1 += 1,
                Quadrant::Discordant => n2 += 1,
                Quadrant::Boundary => {
                    n1 += 1;
                    n2 += 1;
                }
            }
            labels.push(label);
        }

        Self { labels, n1, n2 }
    }

    /// Number of classified observations.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no observation was classified.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
