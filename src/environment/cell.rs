use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A position on the grid, addressed as `(row, col)` with `(0, 0)` in the top
/// left corner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize, Serialize,
)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Number of rows between the two cells, ignoring direction.
    pub fn row_distance(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row)
    }

    /// Number of columns between the two cells, ignoring direction.
    pub fn col_distance(&self, other: &Cell) -> usize {
        self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
