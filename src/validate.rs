//! Grid validation, run once before any traversal
//!
//! Checks run in a fixed order so a given malformed grid always reports the
//! same error: emptiness, then total size, then row regularity. The size check
//! only needs the first row's length, so an oversized grid is rejected without
//! walking its rows.

use crate::config::CounterConfig;
use crate::error::ValidationError;
use crate::grid::{Grid, GridDims};

pub fn validate<G: Grid + ?Sized>(
    grid: &G,
    config: &CounterConfig,
) -> Result<GridDims, ValidationError> {
    let rows = grid.row_count();
    let cols = if rows == 0 { 0 } else { grid.row_len(0) };
    check_shape(rows, cols, config)?;

    for row in 0..rows {
        let actual = grid.row_len(row);
        if actual != cols {
            return Err(ValidationError::IrregularRowLength {
                row,
                expected: cols,
                actual,
            });
        }
    }

    tracing::debug!(rows, cols, "grid validated");
    Ok(GridDims { rows, cols })
}

/// Emptiness and size checks for a `rows` x `cols` shape
///
/// Lets a caller reject a shape before allocating a grid of that size.
pub fn check_shape(
    rows: usize,
    cols: usize,
    config: &CounterConfig,
) -> Result<GridDims, ValidationError> {
    if rows == 0 || cols == 0 {
        return Err(ValidationError::EmptyGrid);
    }

    // rows * cols > max_cells, without the multiplication
    if rows as u64 > config.max_cells / cols as u64 {
        return Err(ValidationError::CellCountExceedsMax {
            rows,
            cols,
            max_cells: config.max_cells,
        });
    }

    Ok(GridDims { rows, cols })
}
