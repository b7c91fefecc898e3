//! Cluster counting entry points
//!
//! Both modes validate once, then hand the scan driver a different
//! [`CellAccounting`](crate::accounting::CellAccounting) binding:
//!
//! - `count` / [`count_clusters`]: read-only, tracks visits in a private record
//! - `count_mutating` / [`count_clusters_mutating`]: clears each cluster in place
//!
//! On `QueueSizeExceeded` the mutating mode leaves the grid partially cleared.
//! That partial state is undefined and is not rolled back.

mod scan;

use crate::accounting::{ClearingAccounting, VisitedAccounting};
use crate::config::CounterConfig;
use crate::error::{ClusterError, Result};
use crate::grid::{Grid, GridMut};
use crate::validate::validate;
use serde::Serialize;

pub use scan::scan;

/// Counts 4-connected clusters of active cells
///
/// # Example
/// ```
/// use cluster_count::ClusterCounter;
///
/// let grid = vec![
///     vec![true, true, false],
///     vec![true, false, false],
///     vec![false, false, true],
/// ];
/// let counter = ClusterCounter::default();
/// assert_eq!(counter.count(&grid)?, 2);
/// # Ok::<(), cluster_count::ClusterError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClusterCounter {
    config: CounterConfig,
}

impl ClusterCounter {
    /// Counter with a non-default configuration
    ///
    /// Fails with [`ClusterError::InvalidConfig`] when `config` does not pass
    /// [`CounterConfig::validate`], e.g. a neighbor table with a diagonal step.
    pub fn new(config: CounterConfig) -> Result<Self> {
        config.validate().map_err(ClusterError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Count clusters without modifying `grid`
    pub fn count<G: Grid + ?Sized>(&self, grid: &G) -> Result<usize> {
        Ok(self.summarize(grid)?.clusters)
    }

    /// Count clusters, clearing every active cell of `grid` along the way
    ///
    /// On success every cell of `grid` is inactive. On a validation error
    /// `grid` is untouched.
    pub fn count_mutating<G: GridMut + ?Sized>(&self, grid: &mut G) -> Result<usize> {
        let dims = validate(&*grid, &self.config)?;
        let mut accounting = ClearingAccounting::new(grid);
        let summary = scan(&mut accounting, dims, &self.config)?;
        Ok(summary.clusters)
    }

    /// Read-only count plus cluster size statistics
    pub fn summarize<G: Grid + ?Sized>(&self, grid: &G) -> Result<CountSummary> {
        let dims = validate(grid, &self.config)?;
        let mut accounting = VisitedAccounting::new(grid, dims);
        Ok(scan(&mut accounting, dims, &self.config)?)
    }
}

/// Outcome of a full scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CountSummary {
    pub rows: usize,
    pub cols: usize,
    pub clusters: usize,
    /// Active cells at the start of the scan
    pub active_cells: usize,
    /// Cells in the biggest cluster (0 when there are none)
    pub largest_cluster: usize,
    /// Longest frontier any traversal reached
    pub peak_frontier: usize,
}

/// Read-only count with the default configuration
pub fn count_clusters<G: Grid + ?Sized>(grid: &G) -> Result<usize> {
    ClusterCounter::default().count(grid)
}

/// Consuming count with the default configuration
pub fn count_clusters_mutating<G: GridMut + ?Sized>(grid: &mut G) -> Result<usize> {
    ClusterCounter::default().count_mutating(grid)
}

#[cfg(test)]
mod tests;
