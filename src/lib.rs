//! cluster-count - count 4-connected clusters of active cells in boolean grids
//!
//! A cluster is a maximal set of active cells joined through shared edges
//! (up, down, left, right; never diagonally). Counting validates the grid
//! once, scans it row by row, and flood-fills each newly found cluster with a
//! bounded breadth-first search.
//!
//! Two modes:
//!
//! - [`count_clusters`] reads the grid and tracks visits in a private record
//! - [`count_clusters_mutating`] clears each cluster from the grid as it goes
//!
//! ```
//! use cluster_count::{count_clusters, count_clusters_mutating};
//!
//! let mut grid = vec![
//!     vec![true, false, true],
//!     vec![true, false, false],
//! ];
//! assert_eq!(count_clusters(&grid)?, 2);
//! assert_eq!(count_clusters_mutating(&mut grid)?, 2);
//! assert!(grid.iter().flatten().all(|&cell| !cell));
//! # Ok::<(), cluster_count::ClusterError>(())
//! ```

pub mod accounting;
pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod report;
pub mod traversal;
pub mod validate;

pub use config::CounterConfig;
pub use counter::{count_clusters, count_clusters_mutating, ClusterCounter, CountSummary};
pub use error::{ClusterError, TraversalError, ValidationError};
pub use grid::{BoolGrid, Grid, GridDims, GridMut};
