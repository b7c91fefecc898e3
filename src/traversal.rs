//! Breadth-first flood fill of a single cluster
//!
//! Cells are marked accounted-for when they are enqueued, not when they are
//! expanded, so no coordinate enters the frontier twice. The frontier length
//! is checked after each dequeued cell's neighbors have been pushed; past the
//! ceiling the traversal stops where it is and marks already applied stay.

use crate::accounting::CellAccounting;
use crate::config::CounterConfig;
use crate::error::TraversalError;
use crate::grid::GridDims;
use serde::Serialize;
use std::collections::VecDeque;

/// What one traversal discovered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    /// Cells marked, seed included
    pub cells: usize,

    /// Longest frontier observed at a ceiling check
    pub peak_frontier: usize,
}

/// Mark every cell of the cluster containing `seed`.
///
/// `seed` must be active and unaccounted, and `dims` the validated grid shape.
pub fn traverse<A: CellAccounting + ?Sized>(
    accounting: &mut A,
    seed: (usize, usize),
    dims: GridDims,
    config: &CounterConfig,
) -> Result<TraversalStats, TraversalError> {
    let (seed_row, seed_col) = seed;
    accounting.mark_accounted(seed_row, seed_col);

    let mut frontier = VecDeque::new();
    frontier.push_back(seed);

    let mut stats = TraversalStats {
        cells: 1,
        peak_frontier: 1,
    };

    while let Some((row, col)) = frontier.pop_front() {
        for &offset in &config.neighbors {
            let Some((next_row, next_col)) = dims.step(row, col, offset) else {
                continue;
            };
            if accounting.is_active_and_unaccounted(next_row, next_col) {
                accounting.mark_accounted(next_row, next_col);
                frontier.push_back((next_row, next_col));
                stats.cells += 1;
            }
        }

        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        if frontier.len() > config.max_frontier {
            tracing::warn!(
                seed_row,
                seed_col,
                frontier = frontier.len(),
                limit = config.max_frontier,
                "frontier ceiling exceeded, aborting traversal"
            );
            return Err(TraversalError::QueueSizeExceeded {
                limit: config.max_frontier,
                row: seed_row,
                col: seed_col,
            });
        }
    }

    tracing::trace!(
        seed_row,
        seed_col,
        cells = stats.cells,
        peak_frontier = stats.peak_frontier,
        "cluster traversed"
    );
    Ok(stats)
}
