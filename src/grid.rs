//! Boolean grid storage
//!
//! [`Grid`] is the read side every counting call needs; [`GridMut`] adds the
//! one write the mutating mode performs. Implemented for nested vectors
//! (the shape callers usually have), fixed-size arrays, and [`BoolGrid`], a
//! dense row-major store that also backs the visitation record.

use serde::Serialize;
use std::fmt;

/// Read access to a 2D grid of active/inactive cells.
///
/// Rows need not be regular here; validation rejects grids whose
/// `row_len` differs between rows before any cell is read.
pub trait Grid {
    fn row_count(&self) -> usize;

    /// Length of `row`. Only called for `row < row_count()`.
    fn row_len(&self, row: usize) -> usize;

    /// Only called for in-bounds coordinates of a validated grid.
    fn is_active(&self, row: usize, col: usize) -> bool;
}

/// Grids that can be cleared cell by cell.
pub trait GridMut: Grid {
    fn deactivate(&mut self, row: usize, col: usize);
}

impl Grid for [Vec<bool>] {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn row_len(&self, row: usize) -> usize {
        self[row].len()
    }

    fn is_active(&self, row: usize, col: usize) -> bool {
        self[row][col]
    }
}

impl GridMut for [Vec<bool>] {
    fn deactivate(&mut self, row: usize, col: usize) {
        self[row][col] = false;
    }
}

impl Grid for Vec<Vec<bool>> {
    fn row_count(&self) -> usize {
        self.as_slice().row_count()
    }

    fn row_len(&self, row: usize) -> usize {
        self.as_slice().row_len(row)
    }

    fn is_active(&self, row: usize, col: usize) -> bool {
        self.as_slice().is_active(row, col)
    }
}

impl GridMut for Vec<Vec<bool>> {
    fn deactivate(&mut self, row: usize, col: usize) {
        self.as_mut_slice().deactivate(row, col);
    }
}

impl<const C: usize, const R: usize> Grid for [[bool; C]; R] {
    fn row_count(&self) -> usize {
        R
    }

    fn row_len(&self, _row: usize) -> usize {
        C
    }

    fn is_active(&self, row: usize, col: usize) -> bool {
        self[row][col]
    }
}

impl<const C: usize, const R: usize> GridMut for [[bool; C]; R] {
    fn deactivate(&mut self, row: usize, col: usize) {
        self[row][col] = false;
    }
}

/// Validated grid shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridDims {
    pub rows: usize,
    pub cols: usize,
}

impl GridDims {
    pub fn cell_count(&self) -> u64 {
        self.rows as u64 * self.cols as u64
    }

    /// Coordinate one `offset` step from `(row, col)`, if it stays in bounds
    pub fn step(&self, row: usize, col: usize, offset: (isize, isize)) -> Option<(usize, usize)> {
        let row = row.checked_add_signed(offset.0)?;
        let col = col.checked_add_signed(offset.1)?;
        (row < self.rows && col < self.cols).then_some((row, col))
    }
}

/// Dense row-major boolean grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl BoolGrid {
    /// All-inactive grid of the given shape
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, false)
    }

    pub fn filled(rows: usize, cols: usize, value: bool) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }
        Self { rows, cols, cells }
    }

    /// Copy of any regular grid; `None` if rows differ in length
    pub fn from_grid<G: Grid + ?Sized>(grid: &G) -> Option<Self> {
        let rows = grid.row_count();
        let cols = if rows == 0 { 0 } else { grid.row_len(0) };
        if (0..rows).any(|row| grid.row_len(row) != cols) {
            return None;
        }
        Some(Self::from_fn(rows, cols, |row, col| grid.is_active(row, col)))
    }

    pub fn dims(&self) -> GridDims {
        GridDims {
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        self.cells[row * self.cols + col] = value;
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells.chunks(self.cols).map(<[bool]>::to_vec).collect()
    }
}

impl Grid for BoolGrid {
    fn row_count(&self) -> usize {
        self.rows
    }

    fn row_len(&self, _row: usize) -> usize {
        self.cols
    }

    fn is_active(&self, row: usize, col: usize) -> bool {
        self.get(row, col)
    }
}

impl GridMut for BoolGrid {
    fn deactivate(&mut self, row: usize, col: usize) {
        self.set(row, col, false);
    }
}

impl fmt::Display for BoolGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                f.write_str(if self.get(row, col) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "fuzz")]
impl<'a> arbitrary::Arbitrary<'a> for BoolGrid {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let rows = u.int_in_range(1..=64)?;
        let cols = u.int_in_range(1..=64)?;
        let mut cells = Vec::with_capacity(rows * cols);
        for _ in 0..rows * cols {
            cells.push(u.arbitrary()?);
        }
        Ok(Self { rows, cols, cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_in_bounds() {
        let dims = GridDims { rows: 3, cols: 4 };
        assert_eq!(dims.step(0, 0, (1, 0)), Some((1, 0)));
        assert_eq!(dims.step(0, 0, (-1, 0)), None);
        assert_eq!(dims.step(0, 0, (0, -1)), None);
        assert_eq!(dims.step(2, 3, (1, 0)), None);
        assert_eq!(dims.step(2, 3, (0, 1)), None);
        assert_eq!(dims.step(2, 3, (0, -1)), Some((2, 2)));
    }

    #[test]
    fn test_cell_count_does_not_overflow() {
        let dims = GridDims {
            rows: 50_000,
            cols: 50_000,
        };
        assert_eq!(dims.cell_count(), 2_500_000_000);
    }

    #[test]
    fn test_bool_grid_get_set() {
        let mut grid = BoolGrid::new(2, 3);
        assert_eq!(grid.active_count(), 0);
        grid.set(1, 2, true);
        assert!(grid.get(1, 2));
        assert!(grid.is_active(1, 2));
        grid.deactivate(1, 2);
        assert!(!grid.get(1, 2));
    }

    #[test]
    fn test_bool_grid_to_rows() {
        let grid = BoolGrid::from_fn(2, 2, |row, col| row == col);
        assert_eq!(grid.to_rows(), vec![vec![true, false], vec![false, true]]);
    }

    #[test]
    fn test_from_grid_rejects_irregular_rows() {
        let rows = vec![vec![true, true], vec![true]];
        assert!(BoolGrid::from_grid(&rows).is_none());

        let rows = vec![vec![true, false], vec![false, false]];
        let grid = BoolGrid::from_grid(&rows).unwrap();
        assert_eq!(grid.dims(), GridDims { rows: 2, cols: 2 });
        assert_eq!(grid.active_count(), 1);
    }

    #[test]
    fn test_display_renders_rows() {
        let grid = BoolGrid::from_fn(2, 3, |row, col| (row + col) % 2 == 0);
        assert_eq!(grid.to_string(), "#.#\n.#.\n");
    }

    #[test]
    fn test_nested_vec_and_array_grids() {
        let mut rows = vec![vec![true, false]];
        assert_eq!(rows.row_count(), 1);
        assert_eq!(rows.row_len(0), 2);
        rows.deactivate(0, 0);
        assert!(!rows.is_active(0, 0));

        let mut array = [[true; 3]; 2];
        assert_eq!(array.row_count(), 2);
        assert_eq!(array.row_len(1), 3);
        array.deactivate(1, 2);
        assert!(!array.is_active(1, 2));
    }
}
