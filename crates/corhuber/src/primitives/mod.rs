//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions and data structures used
//! throughout the crate. It has zero internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Quadrant sign partition of paired observations.
pub mod quadrant;

/// Column-major matrix view.
pub mod matrix;
