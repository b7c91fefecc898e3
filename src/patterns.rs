//! Sample grid builders
//!
//! Shared by the demo binary, the integration tests and the benches. Every
//! builder returns nested rows, the shape most callers hand to the counter.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn empty(rows: usize, cols: usize) -> Vec<Vec<bool>> {
    vec![vec![false; cols]; rows]
}

pub fn full(rows: usize, cols: usize) -> Vec<Vec<bool>> {
    vec![vec![true; cols]; rows]
}

fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> bool) -> Vec<Vec<bool>> {
    (0..rows)
        .map(|row| (0..cols).map(|col| f(row, col)).collect())
        .collect()
}

/// Active where `row + col` is even; no two active cells touch
pub fn checkerboard(rows: usize, cols: usize) -> Vec<Vec<bool>> {
    from_fn(rows, cols, |row, col| (row + col) % 2 == 0)
}

/// Main diagonal `(i, i)` and anti-diagonal `(i, cols - 1 - i)`
pub fn diagonals(rows: usize, cols: usize) -> Vec<Vec<bool>> {
    from_fn(rows, cols, |row, col| row == col || row + col + 1 == cols)
}

/// Concentric rectangular rings separated by one inactive ring
///
/// Clusters: `(min(rows, cols) - 1) / 2 / 2 + 1` for a non-empty grid.
pub fn rings(rows: usize, cols: usize) -> Vec<Vec<bool>> {
    from_fn(rows, cols, |row, col| {
        let depth = row.min(col).min(rows - 1 - row).min(cols - 1 - col);
        depth % 2 == 0
    })
}

/// Square blocks of `side` cells with top-left corners at `origins`,
/// clipped to the grid
pub fn blocks(rows: usize, cols: usize, origins: &[(usize, usize)], side: usize) -> Vec<Vec<bool>> {
    let mut grid = empty(rows, cols);
    for &(top, left) in origins {
        for row in top..(top + side).min(rows) {
            for col in left..(left + side).min(cols) {
                grid[row][col] = true;
            }
        }
    }
    grid
}

/// Blocks of `side` cells repeated every `side + gap` cells in both directions
///
/// A `side` of zero draws nothing.
pub fn tiled_blocks(rows: usize, cols: usize, side: usize, gap: usize) -> Vec<Vec<bool>> {
    if side == 0 {
        return empty(rows, cols);
    }
    let stride = side.saturating_add(gap);
    from_fn(rows, cols, |row, col| row % stride < side && col % stride < side)
}

/// Each cell active with probability `density`, reproducible from `seed`
///
/// `density` is clamped to `[0, 1]`; NaN draws an inactive grid.
pub fn random(rows: usize, cols: usize, density: f64, seed: u64) -> Vec<Vec<bool>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_bool(density)).collect())
        .collect()
}

/// Parse rows drawn as text: `'1'` or `'#'` is active, anything else inactive
///
/// Row lengths are kept as written, so irregular input stays irregular.
pub fn from_rows(rows: &[&str]) -> Vec<Vec<bool>> {
    rows.iter()
        .map(|line| line.chars().map(|c| c == '1' || c == '#').collect())
        .collect()
}
