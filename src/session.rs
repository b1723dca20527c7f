//! Interactive search state: one grid, two endpoints and the last path found.
//!
//! A presentation layer drives this by placing obstacles, picking endpoints and
//! calling [`Session::search`] once both are set. Cells handed back by
//! [`Session::clear_path`] are the ones it should repaint.

use rand::Rng;
use log::info;
use crate::errors::{GridError, PathPlannerError};
use crate::geometry::Cell;
use crate::graph_algos::{Path, PathOutcome, a_star::find_path};
use crate::grid::{Grid, GridConfig};


#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    start: Option<Cell>,
    end: Option<Cell>,
    last_path: Path,
}

impl Session {

    /// Open grid sized by `config`
    pub fn new(config: &GridConfig) -> Result<Self, GridError> {
        Ok(Self::with_grid(Grid::from_config(config)?))
    }

    /// Grid sized by `config` with obstacles scattered at its density
    pub fn random<R: Rng + ?Sized>(config: &GridConfig, rng: &mut R) -> Result<Self, GridError> {
        let mut grid = Grid::from_config(config)?;
        grid.scatter_obstacles(config.obstacle_density, rng)?;
        Ok(Self::with_grid(grid))
    }

    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            start: None,
            end: None,
            last_path: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    pub fn end(&self) -> Option<Cell> {
        self.end
    }

    /// Path from the most recent successful search, empty otherwise
    pub fn last_path(&self) -> &[Cell] {
        &self.last_path
    }

    /// Toggle a cell's passability, returning the path it invalidates
    pub fn set_obstacle(&mut self, cell: Cell, blocked: bool) -> Result<Path, GridError> {
        self.grid.set_blocked(cell, blocked)?;
        Ok(self.clear_path())
    }

    /// Record the start cell, returning the path it invalidates
    pub fn set_start(&mut self, cell: Cell) -> Result<Path, GridError> {
        self.check_bounds(cell)?;
        self.start = Some(cell);
        Ok(self.clear_path())
    }

    /// Record the end cell, returning the path it invalidates
    pub fn set_end(&mut self, cell: Cell) -> Result<Path, GridError> {
        self.check_bounds(cell)?;
        self.end = Some(cell);
        Ok(self.clear_path())
    }

    /// Forget the last path and hand back its cells
    pub fn clear_path(&mut self) -> Path {
        std::mem::take(&mut self.last_path)
    }

    /// Search between the recorded endpoints
    /// Returns Ok(None) until both endpoints are set. A found path becomes the new
    /// `last_path`. Every mutator hands back the path it invalidates, so a path still
    /// held here was computed from the same grid and endpoints and is simply replaced.
    pub fn search(&mut self) -> Result<Option<PathOutcome>, PathPlannerError> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Ok(None);
        };

        self.last_path.clear();
        let outcome = find_path(&self.grid, start, end)?;
        match &outcome {
            PathOutcome::Found(path) => self.last_path = path.clone(),
            PathOutcome::NotFound => info!("no path found from {} to {}", start, end),
        }
        Ok(Some(outcome))
    }

    fn check_bounds(&self, cell: Cell) -> Result<(), GridError> {
        self.grid.is_blocked(cell).map(|_| ())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_waits_for_both_endpoints() {
        let mut session = Session::new(&GridConfig::default()).unwrap();
        assert_eq!(session.search(), Ok(None));

        session.set_start(Cell::new(0, 0)).unwrap();
        assert_eq!(session.search(), Ok(None));

        session.set_end(Cell::new(3, 0)).unwrap();
        let outcome = session.search().unwrap().unwrap();
        assert_eq!(outcome.path().map(|p| p.len()), Some(4));
        assert_eq!(session.last_path().len(), 4);
    }

    #[test]
    fn test_moving_an_endpoint_clears_the_path() {
        let mut session = Session::new(&GridConfig::default().with_size(4, 4)).unwrap();
        session.set_start(Cell::new(0, 0)).unwrap();
        session.set_end(Cell::new(0, 2)).unwrap();
        session.search().unwrap();

        let cleared = session.set_end(Cell::new(1, 0)).unwrap();
        assert_eq!(cleared, vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]);
        assert!(session.last_path().is_empty());
    }

    #[test]
    fn test_toggling_an_obstacle_hands_back_the_path() {
        let mut session = Session::new(&GridConfig::default().with_size(3, 3)).unwrap();
        session.set_start(Cell::new(0, 0)).unwrap();
        session.set_end(Cell::new(2, 0)).unwrap();
        let straight = session.search().unwrap().and_then(PathOutcome::into_path).unwrap();
        assert_eq!(straight, vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]);

        let cleared = session.set_obstacle(Cell::new(1, 0), true).unwrap();
        assert_eq!(cleared, straight);
        assert!(session.last_path().is_empty());

        let detour = session.search().unwrap().unwrap();
        assert!(detour.is_found());
        assert_eq!(session.last_path().len(), 5);
        assert!(!session.last_path().contains(&Cell::new(1, 0)));

        // reopening the cell hands the detour back
        let cleared = session.set_obstacle(Cell::new(1, 0), false).unwrap();
        assert_eq!(Some(cleared.as_slice()), detour.path());
        assert!(session.last_path().is_empty());

        assert!(matches!(session.set_obstacle(Cell::new(3, 0), true), Err(GridError::OutOfBounds { .. })));
    }

    #[test]
    fn test_endpoints_are_bounds_checked() {
        let mut session = Session::new(&GridConfig::default().with_size(2, 2)).unwrap();
        assert!(matches!(session.set_start(Cell::new(2, 0)), Err(GridError::OutOfBounds { .. })));
        assert!(matches!(session.set_end(Cell::new(0, -1)), Err(GridError::OutOfBounds { .. })));
        assert_eq!(session.start(), None);
        assert_eq!(session.end(), None);
    }

    #[test]
    fn test_not_found_leaves_no_path() {
        let grid: Grid = "
            .#.
            .#.
            .#.
        ".parse().unwrap();
        let mut session = Session::with_grid(grid);
        session.set_start(Cell::new(0, 0)).unwrap();
        session.set_end(Cell::new(2, 2)).unwrap();

        assert_eq!(session.search(), Ok(Some(PathOutcome::NotFound)));
        assert!(session.last_path().is_empty());

        // open a gap and try again
        session.set_obstacle(Cell::new(1, 1), false).unwrap();
        let outcome = session.search().unwrap().unwrap();
        assert_eq!(outcome.path().map(|p| p.len()), Some(5));
    }
}
