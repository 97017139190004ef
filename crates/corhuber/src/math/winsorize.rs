//! Winsorization (clamping) of individual values.
//!
//! ## Purpose
//!
//! Winsorization replaces values outside an interval by the nearest bound
//! instead of discarding them. Every Huber-type estimator in this crate is
//! built on this clamp.
//!
//! ## Invariants
//!
//! * `lower <= upper` for every constructed [`WinsorBounds`].
//! * Clamping is idempotent: clamping a clamped value returns it unchanged.
//! * NaN values pass through unchanged.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CorHuberError;

/// Clamp `x` to `[cm, cp]`.
///
/// `cm` is the constant for negative values, `cp` the one for positive values.
#[inline]
pub fn winsorize<T: Float>(x: T, cm: T, cp: T) -> T {
    if x < cm {
        cm
    } else if x > cp {
        cp
    } else {
        x
    }
}

/// A validated pair of winsorization constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinsorBounds<T> {
    lower: T,
    upper: T,
}

impl<T: Float> WinsorBounds<T> {
    /// Create bounds `[lower, upper]`, rejecting `lower > upper` and NaN.
    pub fn new(lower: T, upper: T) -> Result<Self, CorHuberError> {
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return Err(CorHuberError::InvalidBounds {
                lower: lower.to_f64().unwrap_or(f64::NAN),
                upper: upper.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { lower, upper })
    }

    /// Symmetric bounds `[-c, c]`.
    ///
    /// A negative `c` is mirrored so the ordering invariant holds.
    #[inline]
    pub fn symmetric(c: T) -> Self {
        let c = c.abs();
        Self {
            lower: -c,
            upper: c,
        }
    }

    /// Lower clamp bound.
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Upper clamp bound.
    pub fn upper(&self) -> T {
        self.upper
    }

    /// Clamp a single value.
    #[inline]
    pub fn clamp(&self, x: T) -> T {
        winsorize(x, self.lower, self.upper)
    }

    /// Clamp every value into a freshly allocated vector.
    pub fn clamp_all(&self, values: &[T]) -> Vec<T> {
        values.iter().map(|&v| self.clamp(v)).collect()
    }
}
