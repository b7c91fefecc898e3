// Counting tests for both modes
//
// Scenario grids come from patterns.rs; expected counts are worked out by
// hand in the comments where they are not obvious.

use super::*;
use crate::error::{ClusterError, TraversalError, ValidationError};
use crate::grid::BoolGrid;
use crate::patterns;

fn both_modes(grid: &[Vec<bool>]) -> (usize, usize) {
    let read_only = count_clusters(grid).unwrap();
    let mut copy = grid.to_vec();
    let mutating = count_clusters_mutating(&mut copy).unwrap();
    (read_only, mutating)
}

#[test]
fn test_small_l_shape_and_single() {
    let grid = patterns::from_rows(&["110", "100", "001"]);
    assert_eq!(both_modes(&grid), (2, 2));
}

#[test]
fn test_demo_grids() {
    let first = patterns::from_rows(&["1000", "0110", "1101", "0011"]);
    assert_eq!(both_modes(&first), (3, 3));

    let second = patterns::from_rows(&["10000", "10110", "01010", "01110", "00001"]);
    assert_eq!(both_modes(&second), (3, 3));
}

#[test]
fn test_read_only_leaves_grid_unchanged() {
    let grid = patterns::checkerboard(10, 10);
    let before = grid.clone();
    assert_eq!(count_clusters(&grid).unwrap(), 50);
    assert_eq!(grid, before);
}

#[test]
fn test_mutating_clears_every_active_cell() {
    let mut grid = patterns::rings(9, 9);
    assert_eq!(count_clusters_mutating(&mut grid).unwrap(), 3);
    assert_eq!(grid, patterns::empty(9, 9));
}

#[test]
fn test_validation_error_leaves_grid_untouched() {
    let mut grid = vec![vec![true, true], vec![true, true, true], vec![true, true]];
    let before = grid.clone();
    let err = count_clusters_mutating(&mut grid).unwrap_err();
    assert!(matches!(
        err,
        ClusterError::Validation(ValidationError::IrregularRowLength { row: 1, .. })
    ));
    assert_eq!(grid, before);
}

#[test]
fn test_empty_grid_both_modes() {
    let mut rows: Vec<Vec<bool>> = Vec::new();
    assert_eq!(
        count_clusters(&rows),
        Err(ClusterError::Validation(ValidationError::EmptyGrid))
    );
    assert_eq!(
        count_clusters_mutating(&mut rows),
        Err(ClusterError::Validation(ValidationError::EmptyGrid))
    );
}

#[test]
fn test_custom_ceiling_aborts_large_cluster() {
    // a full 20x20 block grows an anti-diagonal frontier of up to 20 cells
    let counter = ClusterCounter::new(CounterConfig::default().with_max_frontier(8)).unwrap();
    let grid = patterns::full(20, 20);
    let err = counter.count(&grid).unwrap_err();
    assert_eq!(
        err,
        ClusterError::Traversal(TraversalError::QueueSizeExceeded {
            limit: 8,
            row: 0,
            col: 0,
        })
    );
    assert!(!err.is_validation());
}

#[test]
fn test_ceiling_only_applies_per_cluster() {
    // many small clusters never build a long frontier
    let counter = ClusterCounter::new(CounterConfig::default().with_max_frontier(2)).unwrap();
    let grid = patterns::tiled_blocks(30, 30, 2, 1);
    assert_eq!(counter.count(&grid).unwrap(), 100);
}

#[test]
fn test_mutating_abort_leaves_partial_grid() {
    let counter = ClusterCounter::new(CounterConfig::default().with_max_frontier(1)).unwrap();
    let mut grid = patterns::from_rows(&["1000", "0000", "0111", "0111"]);
    assert!(counter.count_mutating(&mut grid).is_err());

    // first cluster fully cleared, second aborted after three cells
    assert!(!grid[0][0]);
    assert!(!grid[2][1] && !grid[3][1] && !grid[2][2]);
    assert_eq!(grid.iter().flatten().filter(|&&cell| cell).count(), 3);
}

#[test]
fn test_summarize_reports_sizes() {
    let grid = patterns::blocks(20, 20, &[(0, 0), (10, 10)], 3);
    let summary = ClusterCounter::default().summarize(&grid).unwrap();
    assert_eq!(
        summary,
        CountSummary {
            rows: 20,
            cols: 20,
            clusters: 2,
            active_cells: 18,
            largest_cluster: 9,
            peak_frontier: summary.peak_frontier,
        }
    );
    assert!(summary.peak_frontier >= 2);
}

#[test]
fn test_summarize_inactive_grid() {
    let summary = ClusterCounter::default()
        .summarize(&patterns::empty(4, 4))
        .unwrap();
    assert_eq!(summary.clusters, 0);
    assert_eq!(summary.largest_cluster, 0);
    assert_eq!(summary.peak_frontier, 0);
}

#[test]
fn test_bool_grid_and_arrays_accepted() {
    let grid = BoolGrid::from_fn(6, 6, |row, col| (row + col) % 2 == 0);
    assert_eq!(count_clusters(&grid).unwrap(), 18);

    let mut array = [[true, false, true], [false, false, false], [true, false, true]];
    assert_eq!(count_clusters_mutating(&mut array).unwrap(), 4);
    assert_eq!(array, [[false; 3]; 3]);
}

#[test]
fn test_reversed_neighbor_order_same_count() {
    let grid = patterns::random(40, 40, 0.55, 11);
    let reversed = ClusterCounter::new(
        CounterConfig::default().with_neighbors([(0, -1), (0, 1), (-1, 0), (1, 0)]),
    )
    .unwrap();
    assert_eq!(reversed.count(&grid).unwrap(), count_clusters(&grid).unwrap());
}

#[test]
fn test_diagonal_neighbor_table_rejected_at_construction() {
    // with (1, 1) allowed the two corners below would merge into one cluster
    let config = CounterConfig::default().with_neighbors([(1, 1), (-1, -1), (0, 1), (0, -1)]);
    let err = ClusterCounter::new(config).unwrap_err();
    assert!(matches!(err, ClusterError::InvalidConfig(ref msg) if msg.contains("(1, 1)")));
    assert_eq!(count_clusters(&[[true, false], [false, true]]).unwrap(), 2);
}

#[test]
fn test_duplicate_neighbor_table_rejected_at_construction() {
    let err = ClusterCounter::new(CounterConfig::default().with_neighbors([(1, 0); 4])).unwrap_err();
    assert!(matches!(err, ClusterError::InvalidConfig(ref msg) if msg.contains("twice")));
}

#[test]
fn test_zero_limits_rejected_at_construction() {
    for config in [
        CounterConfig::default().with_max_frontier(0),
        CounterConfig::default().with_max_cells(0),
    ] {
        assert!(matches!(
            ClusterCounter::new(config),
            Err(ClusterError::InvalidConfig(_))
        ));
    }
}
