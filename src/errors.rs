use thiserror::Error;
use crate::geometry::Cell;


/// Errors raised by the grid model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("cell {cell} is outside the {columns}x{rows} grid")]
    OutOfBounds { cell: Cell, columns: usize, rows: usize },

    #[error("grid dimensions must be non-zero, got {columns}x{rows}")]
    InvalidDimensions { columns: usize, rows: usize },

    #[error("obstacle density must be within [0, 1], got {0}")]
    InvalidDensity(f64),

    #[error("unexpected {found:?} at line {line}, column {column}")]
    Parse { line: usize, column: usize, found: char },

    #[error("line {line} has {found} cells, expected {expected}")]
    RaggedRow { line: usize, expected: usize, found: usize },
}

/// Why an endpoint was rejected before searching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointIssue {
    OutOfBounds,
    Blocked,
}

/// Errors raised by the path planner
/// A missing route is not an error, see `PathOutcome::NotFound`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathPlannerError {
    #[error("endpoint {cell} cannot be used: {reason:?}")]
    InvalidEndpoint { cell: Cell, reason: EndpointIssue }, // Start or goal is blocked or off-grid

    #[error("predecessor chain broken at {at}")]
    BrokenChain { at: String }, // Reconstruction could not walk back to the start

    #[error(transparent)]
    Grid(#[from] GridError),
}
