//! Shortest paths over 2D grids with blocked cells.
//!
//! [`find_path`] runs A* from a start cell to a goal cell with unit step costs,
//! 4-directional movement and a Manhattan heuristic. [`Session`] wraps a grid
//! with the endpoint and last-path bookkeeping an interactive front end needs.
//!
//! ```
//! use gridnav::{Cell, Grid, PathPlannerError, find_path};
//!
//! let grid: Grid = "
//!     ...
//!     #.#
//!     ...
//! ".parse().unwrap();
//!
//! let outcome = find_path(&grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
//! assert_eq!(outcome.path().map(|p| p.len()), Some(5));
//!
//! // (0, 1) is blocked, so it can't be a goal
//! let blocked = find_path(&grid, Cell::new(0, 0), Cell::new(0, 1));
//! assert!(matches!(blocked, Err(PathPlannerError::InvalidEndpoint { .. })));
//! ```

mod collections;
pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod grid;
pub mod session;

pub use errors::{EndpointIssue, GridError, PathPlannerError};
pub use geometry::{Cell, manhattan_distance};
pub use graph_algos::{Path, PathOutcome};
pub use graph_algos::a_star::{AStar, SearchStats, find_path, find_path_with_stats};
pub use grid::{Grid, GridConfig};
pub use session::Session;
