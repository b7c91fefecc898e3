//! Limits and neighbor table for the cluster counter
//!
//! The defaults reproduce the fixed behavior: 2^31 cells at most, a frontier
//! ceiling of 100 000 entries, and neighbors visited down, up, right, left.

use serde::{Deserialize, Serialize};

/// Maximum number of cells (rows × cols) accepted by validation
pub const MAX_CELLS: u64 = 1 << 31;

/// Maximum frontier length before a traversal is aborted
pub const MAX_FRONTIER: usize = 100_000;

/// (Δrow, Δcol) offsets: down, up, right, left
pub const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Configuration for a [`ClusterCounter`](crate::ClusterCounter)
///
/// # Example
/// ```
/// use cluster_count::CounterConfig;
///
/// let config = CounterConfig::default().with_max_frontier(64);
/// assert_eq!(config.max_frontier, 64);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Largest accepted rows × cols product
    pub max_cells: u64,

    /// Frontier ceiling for a single traversal
    ///
    /// Checked after each dequeued cell has had its neighbors expanded. A
    /// frontier strictly longer than this aborts the call with
    /// `QueueSizeExceeded`.
    pub max_frontier: usize,

    /// Neighbor expansion order
    ///
    /// Must be a permutation of the four orthogonal unit steps. Order changes
    /// traversal sequencing and peak frontier length, never the count.
    pub neighbors: [(isize, isize); 4],
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            max_cells: MAX_CELLS,
            max_frontier: MAX_FRONTIER,
            neighbors: NEIGHBOR_OFFSETS,
        }
    }
}

impl CounterConfig {
    /// Configuration with the frontier ceiling disabled
    ///
    /// Use when a single cluster may legitimately need more than
    /// [`MAX_FRONTIER`] pending cells.
    pub fn unbounded() -> Self {
        Self {
            max_frontier: usize::MAX,
            ..Self::default()
        }
    }

    pub fn with_max_frontier(mut self, max_frontier: usize) -> Self {
        self.max_frontier = max_frontier;
        self
    }

    pub fn with_max_cells(mut self, max_cells: u64) -> Self {
        self.max_cells = max_cells;
        self
    }

    pub fn with_neighbors(mut self, neighbors: [(isize, isize); 4]) -> Self {
        self.neighbors = neighbors;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_cells == 0 {
            return Err("max_cells must be > 0".to_string());
        }

        if self.max_frontier == 0 {
            return Err("max_frontier must be > 0".to_string());
        }

        for (i, offset) in self.neighbors.iter().enumerate() {
            if !NEIGHBOR_OFFSETS.contains(offset) {
                return Err(format!(
                    "neighbor offset {:?} is not an orthogonal unit step",
                    offset
                ));
            }
            if self.neighbors[..i].contains(offset) {
                return Err(format!("neighbor offset {:?} appears twice", offset));
            }
        }

        Ok(())
    }
}
