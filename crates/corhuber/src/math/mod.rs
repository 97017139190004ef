//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the estimators:
//! - Pearson correlation
//! - Winsorization (clamping)
//! - Chi-squared quantiles
//! - Mahalanobis distances under a correlation model
//!
//! These are reusable building blocks with no estimator-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sample Pearson correlation.
pub mod pearson;

/// Clamping of values to winsorization bounds.
pub mod winsorize;

/// Chi-squared quantiles.
pub mod chisq;

/// Squared Mahalanobis distances.
pub mod mahalanobis;
