use crate::errors::{EndpointIssue, PathPlannerError};
use crate::collections::{FxHashSet, FxIndexMap};
use crate::geometry::Cell;
use crate::grid::Grid;
use super::{shortest_path, PathOutcome};

use std::{
    collections::BinaryHeap, 
    hash::Hash, 
    fmt::Debug,
    cmp::Ordering
};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use log::{debug, trace};



/// Frontier entry on the A* graph
/// Ordered by lowest f_cost first, then by lowest seq (FIFO among ties)
#[derive(Debug)]
struct Node<T> {
    index: usize, // index in the closed_list - maps to the Id of the node
    f_cost: T, // Total cost = cost + h(n) aka estimated cost
    seq: usize, // push order, breaks f_cost ties deterministically
}

impl<T: Ord> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so both keys are reversed
        other.f_cost.cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<T: Ord> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.seq == other.seq
    }
}
impl<T: PartialEq> Eq for Node<T> {}


/// Counters from one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize, // nodes popped and had their neighbors examined
    pub pushed: usize, // frontier insertions, including stale duplicates
}


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
pub struct AStar {}

impl AStar{

    /// From start Node, traverse through graph until node meets goal criteria
    /// Returns Ok(None) when the frontier runs dry without meeting the goal
    /// The Approach has 1 requirement:
    /// The heuristic function must be admissible (never overestimates the true cost to reach the goal)
    pub fn plan<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Result<Option<Vec<N>>, PathPlannerError>
    where 
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        H: Fn(&N) -> C, // heuristic function
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Zero + Ord + Copy + Debug,
        G: Fn(&N) -> bool, // node qualifier for goal
        {
        self.plan_with_stats(start, neighbors, heuristic_fn, goal_fn).map(|(path, _)| path)
    }

    /// Same as `plan`, also reporting how much work the search did
    pub fn plan_with_stats<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Result<(Option<Vec<N>>, SearchStats), PathPlannerError>
    where 
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT,
        H: Fn(&N) -> C,
        IT: IntoIterator<Item = (N, C)>,
        C: Zero + Ord + Copy + Debug,
        G: Fn(&N) -> bool,
        {

        let (node_map, goal_index, stats) = self.build_graph(start, neighbors, heuristic_fn, goal_fn);

        // Return the shortest path
        match goal_index {
            Some(goal_index) => {
                let path = shortest_path(&node_map, 0, goal_index)?;
                debug!("a* finished: {} expanded, {} pushed, path of {} nodes", stats.expanded, stats.pushed, path.len());
                Ok((Some(path), stats))
            }
            None => {
                debug!("a* finished: {} expanded, {} pushed, no path", stats.expanded, stats.pushed);
                Ok((None, stats))
            }
        }
    }


    /// Traverses the graph using A* algorithm 
    /// Returns a map of nodes with their parents and smallest costs, the index of the goal node,
    /// and the search counters. The start node is always index 0.
    fn build_graph<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> (FxIndexMap<N, (usize, C)>, Option<usize>, SearchStats)
    where 
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Zero + Ord + Copy + Debug,
        H: Fn(&N) -> C, // heuristic function
        G: Fn(&N) -> bool // Returns true if goal is met
    {
        let mut stats = SearchStats::default();

        // Open List
        // Nodes that need to be evaluated, implemented as priority queue
        // Sorting is done by f_cost (cost + heuristic), then push order
        // Improved paths push a fresh entry; older entries go stale and are skipped on pop
        let mut open_list: BinaryHeap<Node<C>> = BinaryHeap::new();

        // Cost and predecessor map
        // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the closed_list
        // for the start node, parent_index is set to usize::MAX to indicate it has no parent
        let mut closed_list: FxIndexMap<N, (usize, C)> = FxIndexMap::default();

        // Expanded nodes, by closed_list index - a node is expanded at most once
        let mut visited: FxHashSet<usize> = FxHashSet::default();

        let start_f = heuristic_fn(&start);
        let start_index = closed_list.insert_full(start, (usize::MAX, Zero::zero())).0;
        open_list.push(Node{
            index: start_index,
            f_cost: start_f,
            seq: stats.pushed,
        });
        stats.pushed += 1;

        while let Some(Node{index, f_cost, ..}) = open_list.pop() {

            // Stale duplicate of an already expanded node
            if visited.contains(&index) {
                continue;
            }

            let Some((node, &(_, c))) = closed_list.get_index(index) else {
                continue;
            };

            // Check if we've reached the goal
            if goal_fn(node) {
                return (closed_list, Some(index), stats);
            }

            visited.insert(index);
            stats.expanded += 1;
            trace!("expanding {:?} (g = {:?}, f = {:?})", node, c, f_cost);

            // loop over neighbors
            let node = node.clone();
            for (neighbor, edge_cost) in neighbors(&node).into_iter() {

                if let Some(i) = closed_list.get_index_of(&neighbor) {
                    if visited.contains(&i) {
                        continue;
                    }
                }

                // new cost to reach this node = edge cost + node cost
                // This is confirmed cost, not heuristic
                let new_cost = edge_cost + c;

                let neighbor_index: usize;
                // calculate heuristic cost
                let h_cost: C = heuristic_fn(&neighbor);

                match closed_list.entry(neighbor) {
                    Vacant(e) => {
                        // This is the first time we're seeing this neighbor
                        neighbor_index = e.index();
                        e.insert((index, new_cost));
                    }
                    Occupied(mut e) => {
                        if e.get().1 > new_cost {
                            // We've found a better path to this neighbor
                            neighbor_index = e.index();
                            e.insert((index, new_cost));
                        } else {
                            // The existing path is as good or better, do nothing
                            continue;
                        }
                    }
                }
                
                // Only add to the queue if we've found a better path
                open_list.push(Node {
                    index: neighbor_index,
                    f_cost: new_cost + h_cost,
                    seq: stats.pushed,
                });
                stats.pushed += 1;
            }
        }
        (closed_list, None, stats)
    }
}


/// Shortest 4-directional path on `grid` from `start` to `goal`
/// Every step costs 1 and the heuristic is Manhattan distance.
///
/// Endpoints that are off-grid or blocked are rejected with `InvalidEndpoint`
/// before searching; `start == goal` then yields a single-cell path.
pub fn find_path(grid: &Grid, start: Cell, goal: Cell) -> Result<PathOutcome, PathPlannerError> {
    find_path_with_stats(grid, start, goal).map(|(outcome, _)| outcome)
}

/// Same as `find_path`, also reporting search counters
pub fn find_path_with_stats(grid: &Grid, start: Cell, goal: Cell) -> Result<(PathOutcome, SearchStats), PathPlannerError> {
    check_endpoint(grid, start)?;
    check_endpoint(grid, goal)?;

    if start == goal {
        return Ok((PathOutcome::Found(vec![start]), SearchStats::default()));
    }

    debug!("searching {} -> {} on {}x{} grid", start, goal, grid.columns(), grid.rows());

    let neighbors = move |cell: &Cell| {
        grid.neighbors(*cell)
            .filter(move |n| matches!(grid.is_blocked(*n), Ok(false)))
            .map(|n| (n, 1u32))
    };
    let heuristic = |cell: &Cell| cell.manhattan(&goal);

    let a_star = AStar{};
    let (path, stats) = a_star.plan_with_stats(start, neighbors, heuristic, |cell| *cell == goal)?;

    let outcome = match path {
        Some(path) => PathOutcome::Found(path),
        None => PathOutcome::NotFound,
    };
    Ok((outcome, stats))
}

fn check_endpoint(grid: &Grid, cell: Cell) -> Result<(), PathPlannerError> {
    match grid.is_blocked(cell) {
        Ok(false) => Ok(()),
        Ok(true) => Err(PathPlannerError::InvalidEndpoint { cell, reason: EndpointIssue::Blocked }),
        Err(_) => Err(PathPlannerError::InvalidEndpoint { cell, reason: EndpointIssue::OutOfBounds }),
    }
}
