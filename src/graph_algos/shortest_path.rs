use std::fmt::Debug;
use crate::errors::PathPlannerError;
use super::GraphNodeMap;

/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// start_index / goal_index: indices of the endpoints in the node_map
///
/// A valid chain can't hold more nodes than the map does, so a longer walk
/// means the parents form a cycle and is reported as `BrokenChain`.
pub(crate) fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, start_index: usize, goal_index: usize) -> Result<Vec<N>, PathPlannerError> 
where 
    N: Clone + Debug,
{

    let mut path: Vec<N> = Vec::new();
    let mut current_index = goal_index;
    let max_steps = node_map.len();

    // Trace back from goal to start
    loop {
        let Some((node, &(parent_index, _))) = node_map.get_index(current_index) else {
            let at = match path.last() {
                Some(node) => format!("{:?}", node),
                None => format!("index {}", current_index),
            };
            return Err(PathPlannerError::BrokenChain { at });
        };

        path.push(node.clone());
        if current_index == start_index {
            break;
        }
        if path.len() >= max_steps {
            return Err(PathPlannerError::BrokenChain { at: format!("{:?}", node) });
        }
        current_index = parent_index;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}
