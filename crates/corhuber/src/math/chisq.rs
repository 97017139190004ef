//! Chi-squared quantiles for distance thresholds.
//!
//! ## Purpose
//!
//! Squared Mahalanobis distances of standardized data are compared against
//! chi-squared quantiles to decide which observations get shrunk.
//!
//! ## Design notes
//!
//! * **Two degrees of freedom**: The chi-squared distribution with 2 degrees
//!   of freedom is exponential with rate 1/2, so its quantile has the exact
//!   closed form `-2 ln(1 - p)`. This is the hot path (one call per pair).
//! * **General case**: Other degrees of freedom start from the `statrs`
//!   inverse CDF and are polished with Newton steps on its CDF and density.
//!
//! ## Invariants
//!
//! * Quantiles are non-decreasing in `p`.
//! * `p` is expected in `(0, 1)`; callers validate it.

// External dependencies
use num_traits::Float;
use statrs::distribution::{ChiSquared, Continuous, ContinuousCDF};

// Internal dependencies
use crate::primitives::errors::CorHuberError;

/// Newton refinement steps applied to the general quantile.
const NEWTON_STEPS: usize = 8;

/// Lower-tail quantile `F^-1(p)` of the chi-squared distribution with 2
/// degrees of freedom.
#[inline]
pub fn chi_squared_2_quantile<T: Float>(p: T) -> T {
    let two = T::one() + T::one();
    -two * (-p).ln_1p()
}

/// Lower-tail quantile `F^-1(p)` of the chi-squared distribution with `df`
/// degrees of freedom.
pub fn chi_squared_quantile<T: Float>(p: T, df: usize) -> Result<T, CorHuberError> {
    if df == 2 {
        return Ok(chi_squared_2_quantile(p));
    }

    let p = p.to_f64().unwrap_or(f64::NAN);
    let dist = ChiSquared::new(df as f64).map_err(|e| {
        CorHuberError::InvalidInput(format!("chi-squared with {df} degrees of freedom: {e}"))
    })?;

    let mut q = dist.inverse_cdf(p);
    for _ in 0..NEWTON_STEPS {
        let density = dist.pdf(q);
        if !density.is_finite() || density <= 0.0 {
            break;
        }
        let step = (dist.cdf(q) - p) / density;
        let next = q - step;
        if !next.is_finite() || next <= 0.0 {
            break;
        }
        q = next;
        if step.abs() <= f64::EPSILON * q.max(1.0) {
            break;
        }
    }

    Ok(T::from(q).unwrap_or(T::nan()))
}
