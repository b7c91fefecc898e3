//! Cell accounting: how a traversal records that a cell is already counted
//!
//! The traversal only needs two questions answered, so the mutating and
//! read-only counting modes differ purely in which binding they hand it:
//!
//! - [`ClearingAccounting`]: clears cells in the caller's grid
//! - [`VisitedAccounting`]: sets flags in a private visitation record

use crate::grid::{BoolGrid, Grid, GridDims, GridMut};

/// Tracks which active cells have been attributed to a cluster.
pub trait CellAccounting {
    /// Active and not yet attributed to any cluster
    fn is_active_and_unaccounted(&self, row: usize, col: usize) -> bool;

    fn mark_accounted(&mut self, row: usize, col: usize);
}

/// Accounting backed by the grid itself: a cleared cell is accounted-for.
pub struct ClearingAccounting<'g, G: GridMut + ?Sized> {
    grid: &'g mut G,
}

impl<'g, G: GridMut + ?Sized> ClearingAccounting<'g, G> {
    pub fn new(grid: &'g mut G) -> Self {
        Self { grid }
    }
}

impl<G: GridMut + ?Sized> CellAccounting for ClearingAccounting<'_, G> {
    fn is_active_and_unaccounted(&self, row: usize, col: usize) -> bool {
        self.grid.is_active(row, col)
    }

    fn mark_accounted(&mut self, row: usize, col: usize) {
        self.grid.deactivate(row, col);
    }
}

/// Accounting backed by a same-shaped visitation record; the grid is only read.
pub struct VisitedAccounting<'g, G: Grid + ?Sized> {
    grid: &'g G,
    visited: BoolGrid,
}

impl<'g, G: Grid + ?Sized> VisitedAccounting<'g, G> {
    /// `dims` must be the validated shape of `grid`
    pub fn new(grid: &'g G, dims: GridDims) -> Self {
        Self {
            grid,
            visited: BoolGrid::new(dims.rows, dims.cols),
        }
    }

    pub fn visited(&self) -> &BoolGrid {
        &self.visited
    }
}

impl<G: Grid + ?Sized> CellAccounting for VisitedAccounting<'_, G> {
    fn is_active_and_unaccounted(&self, row: usize, col: usize) -> bool {
        self.grid.is_active(row, col) && !self.visited.get(row, col)
    }

    fn mark_accounted(&mut self, row: usize, col: usize) {
        self.visited.set(row, col, true);
    }
}
