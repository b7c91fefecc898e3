#![no_main]

use cluster_count::{count_clusters, count_clusters_mutating, BoolGrid};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|grid: BoolGrid| {
    // Both modes must agree, and the mutating one must consume the grid
    let read_only = count_clusters(&grid);
    let mut consumed = grid.clone();
    let mutating = count_clusters_mutating(&mut consumed);
    assert_eq!(read_only, mutating);
    if mutating.is_ok() {
        assert_eq!(consumed.active_count(), 0);
    }
});
