//! Grid model: a fixed W x H space of cells, each either open or blocked.
//!
//! Every traversable step costs exactly 1 and movement is 4-directional.
//! Neighbours are always produced west, east, north, south; the search
//! frontier breaks ties by insertion order, so this order decides which of
//! several equally short paths is returned.

use std::{fmt, str::FromStr};
use rand::Rng;
use crate::errors::GridError;
use crate::geometry::Cell;


/// Offsets in neighbour order: west, east, north, south
const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];


/// Grid and obstacle configuration supplied by the caller
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub columns: usize,
    pub rows: usize,
    pub obstacle_density: f64, // share of cells drawn as obstacles by `Grid::scatter_obstacles`
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 25,
            rows: 20,
            obstacle_density: 0.3,
        }
    }
}

impl GridConfig {

    pub fn with_size(mut self, columns: usize, rows: usize) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    pub fn with_obstacle_density(mut self, density: f64) -> Self {
        self.obstacle_density = density;
        self
    }

    /// Reject zero-sized grids and densities outside [0, 1]
    pub fn validate(&self) -> Result<(), GridError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(GridError::InvalidDimensions { columns: self.columns, rows: self.rows });
        }
        if !(0.0..=1.0).contains(&self.obstacle_density) {
            return Err(GridError::InvalidDensity(self.obstacle_density));
        }
        Ok(())
    }
}


/// Fixed-size grid of passable / blocked cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    rows: usize,
    blocked: Vec<bool>, // row-major
}

impl Grid {

    /// Create an open grid of `columns` x `rows`
    pub fn new(columns: usize, rows: usize) -> Result<Self, GridError> {
        if columns == 0 || rows == 0 || columns > i32::MAX as usize || rows > i32::MAX as usize {
            return Err(GridError::InvalidDimensions { columns, rows });
        }
        Ok(Self {
            columns,
            rows,
            blocked: vec![false; columns * rows],
        })
    }

    /// Create an open grid sized by `config`; obstacles are left to the caller
    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        Self::new(config.columns, config.rows)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells, never zero
    pub fn cell_count(&self) -> usize {
        self.blocked.len()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.col < 0 || cell.row < 0 {
            return None;
        }
        let (col, row) = (cell.col as usize, cell.row as usize);
        if col >= self.columns || row >= self.rows {
            return None;
        }
        Some(row * self.columns + col)
    }

    fn checked_index(&self, cell: Cell) -> Result<usize, GridError> {
        self.index(cell).ok_or(GridError::OutOfBounds {
            cell,
            columns: self.columns,
            rows: self.rows,
        })
    }

    pub fn is_blocked(&self, cell: Cell) -> Result<bool, GridError> {
        let idx = self.checked_index(cell)?;
        Ok(self.blocked[idx])
    }

    pub fn set_blocked(&mut self, cell: Cell, flag: bool) -> Result<(), GridError> {
        let idx = self.checked_index(cell)?;
        self.blocked[idx] = flag;
        Ok(())
    }

    /// Open every cell
    pub fn clear_obstacles(&mut self) {
        self.blocked.iter_mut().for_each(|b| *b = false);
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// In-bounds axis-aligned neighbours, in west, east, north, south order
    /// Blocked neighbours are included; filtering is the search's job
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        DIRECTIONS
            .iter()
            .filter_map(move |&(dc, dr)| {
                Some(Cell::new(cell.col.checked_add(dc)?, cell.row.checked_add(dr)?))
            })
            .filter(move |n| self.contains(*n))
    }

    /// Mark random cells as blocked
    /// Draws ceil(cells * density) cells uniformly; a cell may be drawn more than once,
    /// so the resulting blocked share is at most `density`. Returns the number of draws.
    pub fn scatter_obstacles<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) -> Result<usize, GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }
        let draws = (self.cell_count() as f64 * density).ceil() as usize;
        for _ in 0..draws {
            let col = rng.random_range(0..self.columns);
            let row = rng.random_range(0..self.rows);
            self.blocked[row * self.columns + col] = true;
        }
        log::debug!("scattered {} obstacle draws, {} cells blocked", draws, self.blocked_count());
        Ok(draws)
    }
}


/// Text map: `#` is blocked, `.` is open, one line per row
/// Leading and trailing blank lines and surrounding whitespace are ignored
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .skip_while(|l| l.is_empty())
            .collect();
        let lines: Vec<&str> = match lines.iter().rposition(|l| !l.is_empty()) {
            Some(last) => lines[..=last].to_vec(),
            None => Vec::new(),
        };

        let columns = lines.first().map_or(0, |l| l.chars().count());
        let mut grid = Grid::new(columns, lines.len())?;

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != columns {
                return Err(GridError::RaggedRow { line: row + 1, expected: columns, found });
            }
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '#' => grid.blocked[row * columns + col] = true,
                    '.' => {}
                    other => return Err(GridError::Parse { line: row + 1, column: col + 1, found: other }),
                }
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.blocked.chunks(self.columns).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for &b in cells {
                write!(f, "{}", if b { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}
