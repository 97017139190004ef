//! Parallel execution engine for correlation matrix assembly.
//!
//! ## Purpose
//!
//! This module provides the parallel matrix pass that is injected into the
//! `corhuber` crate's executor. Every column pair is an independent task, so
//! large matrices spread across all available CPU cores.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential matrix pass.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across pairs.
//! * **Scratch merge**: Each task returns its `(i, j, r)` triple; the core
//!   executor writes them to disjoint cells afterwards, so no task ever
//!   touches the output matrix.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Results are identical to the sequential pass, pair for pair.
//! * Columns and tuning constants are shared read-only.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not assemble the output matrix (handled by `corhuber::executor`).

// Feature-gated imports
#[cfg(feature = "cpu")]
use num_traits::Float;
#[cfg(feature = "cpu")]
use rayon::prelude::*;
#[cfg(feature = "cpu")]
use tracing::debug;

// Export dependencies from corhuber crate
#[cfg(feature = "cpu")]
use corhuber::internals::algorithms::method::{CorrelationMethod, TuningConstants};
#[cfg(feature = "cpu")]
use corhuber::internals::engine::executor::{correlate_pair, upper_triangle_pairs};
#[cfg(feature = "cpu")]
use corhuber::internals::primitives::matrix::DataMatrix;

// ============================================================================
// Parallel Matrix Pass
// ============================================================================

/// Compute every off-diagonal pair of the correlation matrix in parallel.
#[cfg(feature = "cpu")]
pub fn matrix_pass_parallel<T>(
    data: &DataMatrix<'_, T>,
    method: CorrelationMethod,
    constants: &TuningConstants<T>,
) -> Vec<(usize, usize, T)>
where
    T: Float + Send + Sync,
{
    let pairs = upper_triangle_pairs(data.n_cols());
    debug!(
        pairs = pairs.len(),
        threads = rayon::current_num_threads(),
        "parallel matrix pass"
    );

    pairs
        .into_par_iter()
        .map(|(i, j)| (i, j, correlate_pair(data, i, j, method, constants)))
        .collect()
}
