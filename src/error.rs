//! Error types for cluster counting
//!
//! Two categories, kept apart so callers can tell "fix your input" from
//! "the grid is too large for one traversal":
//!
//! - [`ValidationError`]: raised before any cell is touched
//! - [`TraversalError`]: raised mid-scan, after some cells may be accounted-for

use thiserror::Error;

/// Malformed or oversized grid, detected before traversal begins.
///
/// No mutation has happened when one of these is returned, even from the
/// mutating entry point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Grid cannot be empty or contain empty rows")]
    EmptyGrid,

    #[error("Grid of {rows}x{cols} cells exceeds the maximum of {max_cells} cells")]
    CellCountExceedsMax {
        rows: usize,
        cols: usize,
        max_cells: u64,
    },

    #[error("All rows must have the same number of cells: row {row} has {actual}, expected {expected}")]
    IrregularRowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Failure while flood-filling a single cluster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    /// The frontier grew past the configured ceiling.
    ///
    /// `row`/`col` name the seed of the cluster being traversed. Cells already
    /// marked are left marked; in mutating mode the grid is partially cleared.
    #[error("Frontier exceeded max size ({limit}) traversing cluster seeded at ({row}, {col}), aborting")]
    QueueSizeExceeded { limit: usize, row: usize, col: usize },
}

/// Any failure of a counting call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Traversal(#[from] TraversalError),

    /// Rejected by [`CounterConfig::validate`](crate::CounterConfig::validate)
    #[error("Invalid counter configuration: {0}")]
    InvalidConfig(String),
}

impl ClusterError {
    /// True when the caller can recover by supplying a corrected grid
    pub fn is_validation(&self) -> bool {
        matches!(self, ClusterError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, ClusterError>;
