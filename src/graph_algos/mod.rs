pub mod a_star;
mod shortest_path;

use shortest_path::shortest_path;

use crate::collections::FxIndexMap;
use crate::geometry::Cell;

/// Type alias for the node map used by the search
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map (usize::MAX for the start)
/// - cost is the lowest known cost to reach this node from the start
pub(crate) type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;

/// Ordered cells from start to goal inclusive
pub type Path = Vec<Cell>;

/// Result of a grid search that got to run
/// `NotFound` is an expected outcome, distinct from a single-cell path
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOutcome {
    Found(Path),
    NotFound,
}

impl PathOutcome {

    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&[Cell]> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::NotFound => None,
        }
    }
}
