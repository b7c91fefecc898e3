//! Row-major scan driver

use super::CountSummary;
use crate::accounting::CellAccounting;
use crate::config::CounterConfig;
use crate::error::TraversalError;
use crate::grid::GridDims;
use crate::traversal::traverse;

/// Walk every cell top-to-bottom, left-to-right, starting one traversal per
/// active cell no earlier traversal has accounted for.
pub fn scan<A: CellAccounting + ?Sized>(
    accounting: &mut A,
    dims: GridDims,
    config: &CounterConfig,
) -> Result<CountSummary, TraversalError> {
    let mut summary = CountSummary {
        rows: dims.rows,
        cols: dims.cols,
        ..CountSummary::default()
    };

    for row in 0..dims.rows {
        for col in 0..dims.cols {
            if !accounting.is_active_and_unaccounted(row, col) {
                continue;
            }
            let stats = traverse(accounting, (row, col), dims, config)?;
            summary.clusters += 1;
            summary.active_cells += stats.cells;
            summary.largest_cluster = summary.largest_cluster.max(stats.cells);
            summary.peak_frontier = summary.peak_frontier.max(stats.peak_frontier);
        }
    }

    tracing::debug!(
        clusters = summary.clusters,
        active_cells = summary.active_cells,
        largest_cluster = summary.largest_cluster,
        "scan complete"
    );
    Ok(summary)
}
