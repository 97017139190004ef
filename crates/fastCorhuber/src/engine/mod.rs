//! Layer 4: Engine
//!
//! Parallel execution passes that plug into the `corhuber` executor.

/// Parallel matrix pass.
pub mod executor;
