//! # corhuber — Robust Huber-type correlation by winsorization
//!
//! Correlation estimates that are resistant to outliers. Instead of
//! discarding extreme observations, they are winsorized (shrunk onto a
//! boundary) before an ordinary Pearson correlation is computed.
//!
//! ## Estimators
//!
//! | Estimator  | Shrinkage                                                  |
//! |------------|------------------------------------------------------------|
//! | Univariate | Clamp each variable to `[-c, c]`                           |
//! | Adjusted   | Clamp with separate constants for the major/minor quadrants |
//! | Bivariate  | Shrink onto a Mahalanobis tolerance ellipse (default)      |
//!
//! Each estimator assumes **robustly standardized** inputs (e.g. centered by
//! the median and scaled by the MAD); the crate does not standardize.
//!
//! ## Quick Start
//!
//! ```rust
//! use corhuber::prelude::*;
//!
//! let x = vec![-3.0f64, -1.0, 0.0, 1.0, 3.0];
//! let y = vec![-3.0f64, -1.0, 0.0, 1.0, 3.0];
//!
//! // Both vectors are clamped to [-2, -1, 0, 1, 2]
//! let r = cor_huber_uni(&x, &y, 2.0)?;
//! assert!((r - 1.0).abs() < 1e-12);
//! # Result::<(), CorHuberError>::Ok(())
//! ```
//!
//! ### Correlation Matrix
//!
//! ```rust
//! use corhuber::prelude::*;
//!
//! // 6 observations of 3 variables, column-major
//! let values = vec![
//!     -1.2, -0.4, 0.1, 0.5, 0.9, 8.0, // variable 1 (one outlier)
//!     -1.0, -0.5, 0.0, 0.6, 1.1, 0.3, // variable 2
//!     0.7, -0.2, 0.4, -1.3, 0.2, 0.1, // variable 3
//! ];
//! let data = DataMatrix::from_column_major(&values, 6, 3)?;
//!
//! let model = CorHuber::new()
//!     .method(Bivariate)   // Ellipsoidal winsorization
//!     .constant(2.0)       // Clamp radius in standardized units
//!     .probability(0.95)   // Tolerance ellipse coverage
//!     .build()?;
//!
//! let r = model.correlation_matrix(&data)?;
//! assert_eq!(r.dim(), 3);
//! assert_eq!(r.get(0, 1), r.get(1, 0));
//! println!("{}", r);
//! # Result::<(), CorHuberError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Precondition violations (mismatched lengths, `c <= 0`, `prob` outside
//! `(0, 1)`, ...) are reported as [`CorHuberError`](prelude::CorHuberError).
//! A correlation that is undefined for the given data (e.g. a constant
//! variable) is **not** an error: it is returned as NaN.
//!
//! ```rust
//! use corhuber::prelude::*;
//!
//! let x: Vec<f64> = vec![0.0, 0.0, 0.0, 0.0];
//! let y: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0];
//! assert!(cor_pearson(&x, &y)?.is_nan());
//!
//! assert!(matches!(
//!     cor_pearson(&x, &y[..3]),
//!     Err(CorHuberError::MismatchedInputs { x_len: 4, y_len: 3 })
//! ));
//! # Result::<(), CorHuberError>::Ok(())
//! ```
//!
//! ## References
//!
//! - Khan, J. A., Van Aelst, S. and Zamar, R. H. (2007). "Robust linear model
//!   selection based on least angle regression". JASA 102(480).
//! - Alfons, A., Croux, C. and Gelper, S. (2013). "Sparse least trimmed
//!   squares regression for analyzing high-dimensional large data sets".
//!   Annals of Applied Statistics 7(1).
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - Huber-type correlation estimators.
mod algorithms;

// Layer 4: Engine - orchestration, validation and matrix assembly.
mod engine;

// High-level fluent API for robust correlation.
mod api;

// Standard corhuber prelude.
pub mod prelude {
    pub use crate::api::{
        CorHuberBuilder as CorHuber, CorHuberError, CorHuberModel, CorrelationMatrix,
        CorrelationMethod,
        CorrelationMethod::{Adjusted, Bivariate, Pearson, Univariate},
        DataMatrix, TuningConstants, WinsorBounds, WinsorizedData, cor_huber_adj, cor_huber_bi,
        cor_huber_uni, cor_mat_huber, cor_pearson, winsorize,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
