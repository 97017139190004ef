//! # fastCorhuber — Parallel robust Huber correlation for Rust
//!
//! Extends [`corhuber`](https://docs.rs/corhuber) with multi-threaded
//! correlation matrix assembly (via `rayon`) and native `ndarray` support.
//! Every pair of columns is estimated independently, so wide data sets
//! scale with the number of cores. Results are identical to the sequential
//! `corhuber` implementation.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastCorhuber::prelude::*;
//! use ndarray::array;
//!
//! // 6 observations (rows) of 3 robustly standardized variables (columns)
//! let data = array![
//!     [-1.2, -1.0, 0.7],
//!     [-0.4, -0.5, -0.2],
//!     [0.1, 0.0, 0.4],
//!     [0.5, 0.6, -1.3],
//!     [0.9, 1.1, 0.2],
//!     [8.0, 0.3, 0.1],
//! ];
//!
//! let model = CorHuber::new()
//!     .method(Bivariate)   // Ellipsoidal winsorization (default)
//!     .constant(2.0)       // Clamp radius in standardized units
//!     .parallel(true)      // Parallel pair evaluation (default)
//!     .build()?;
//!
//! let r = model.correlation_array(&data)?;
//! assert_eq!(r.dim(), (3, 3));
//! assert_eq!(r[[0, 1]], r[[1, 0]]);
//! # Result::<(), CorHuberError>::Ok(())
//! ```
//!
//! ### Vectors
//!
//! ```rust
//! use fastCorhuber::prelude::*;
//! use ndarray::Array1;
//!
//! let x: Array1<f64> = Array1::from_vec(vec![-3.0, -1.0, 0.0, 1.0, 3.0]);
//! let y: Vec<f64> = vec![-3.0, -1.0, 0.0, 1.0, 3.0];
//!
//! let model = CorHuber::new().method(Univariate).build()?;
//!
//! // correlate() accepts &Array1<f64>, &[f64], or &Vec<f64>
//! let r = model.correlate(&x, &y)?;
//! assert!((r - 1.0).abs() < 1e-12);
//! # Result::<(), CorHuberError>::Ok(())
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![allow(non_snake_case)]

// Layer 4: Engine - parallel execution passes.
mod engine;

// High-level fluent API with parallel execution.
mod api;

// Input data handling.
mod input;

// Standard fastCorhuber prelude.
pub mod prelude {
    pub use crate::api::{
        CorHuberError, CorrelationMatrix, CorrelationMethod,
        CorrelationMethod::{Adjusted, Bivariate, Pearson, Univariate},
        DataMatrix, ParallelCorHuberBuilder as CorHuber, ParallelCorHuberModel, TuningConstants,
        WinsorizedArray,
    };
    pub use crate::input::{CorInput, MatrixInput};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
