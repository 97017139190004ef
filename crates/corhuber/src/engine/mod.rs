//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the estimators: it validates inputs, runs the
//! pairwise pass over matrix columns, assembles the symmetric result, and
//! cleans whole data matrices.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pairwise execution and matrix assembly.
pub mod executor;

/// Correlation matrix output type.
pub mod output;

/// Input and parameter validation.
pub mod validator;

/// Multivariate winsorization of data matrices.
pub mod cleaning;
