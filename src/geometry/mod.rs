use std::fmt;
use num_traits::{Num, Signed};


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where 
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}


/// Grid cell as (column, row), 0-indexed
/// Coordinates are signed so that off-grid cells can be expressed and rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {

    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Step count between two cells under 4-directional movement
    pub fn manhattan(&self, other: &Cell) -> u32 {
        manhattan_distance(self.col, self.row, other.col, other.row) as u32
    }

    /// True if the cells share an edge
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((col, row): (i32, i32)) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
