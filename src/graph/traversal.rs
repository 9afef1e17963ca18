//! Graph traversal algorithms (BFS).

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{GraphError, GraphResult, NodeId};

use super::Graph;

/// Nodes reached by a breadth-first traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    /// Node IDs in the order they were first reached.
    pub order: Vec<NodeId>,
    /// Hop count from the start node for every reached node.
    pub depths: HashMap<NodeId, u32>,
}

/// BFS traversal from a starting node, stopping at `max_depth` hops.
pub fn bfs_traverse<T>(graph: &Graph<T>, start_id: NodeId, max_depth: u32) -> GraphResult<Traversal> {
    if !graph.contains(start_id) {
        return Err(GraphError::UnknownNode(start_id));
    }

    let mut order: Vec<NodeId> = vec![start_id];
    let mut depths: HashMap<NodeId, u32> = HashMap::new();
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();

    depths.insert(start_id, 0);
    queue.push_back((start_id, 0));

    while let Some((current_id, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }
        for &neighbor_id in graph.neighbors(current_id)? {
            if depths.contains_key(&neighbor_id) {
                continue;
            }
            depths.insert(neighbor_id, depth + 1);
            order.push(neighbor_id);
            queue.push_back((neighbor_id, depth + 1));
        }
    }

    Ok(Traversal { order, depths })
}

/// Shortest path from `from` to `to`, both ends included, treating every edge
/// as unit weight.
///
/// Returns `[from]` when both ends are the same node. Fails with
/// [`GraphError::UnknownNode`] if either id is absent and with
/// [`GraphError::NoPath`] if the nodes are in different components.
pub fn shortest_path<T>(graph: &Graph<T>, from: NodeId, to: NodeId) -> GraphResult<Vec<NodeId>> {
    for id in [from, to] {
        if !graph.contains(id) {
            return Err(GraphError::UnknownNode(id));
        }
    }
    if from == to {
        return Ok(vec![from]);
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut came_from: HashMap<NodeId, NodeId> = HashMap::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    visited.insert(from);
    queue.push_back(from);

    while let Some(current_id) = queue.pop_front() {
        log::trace!("bfs visiting {}", current_id);
        for &neighbor_id in graph.neighbors(current_id)? {
            if !visited.insert(neighbor_id) {
                continue;
            }
            came_from.insert(neighbor_id, current_id);
            if neighbor_id == to {
                return Ok(reconstruct_path(&came_from, from, to));
            }
            queue.push_back(neighbor_id);
        }
    }

    log::debug!("no path from {} to {}", from, to);
    Err(GraphError::NoPath { from, to })
}

/// Walk the predecessor map back from `to` and reverse it.
fn reconstruct_path(came_from: &HashMap<NodeId, NodeId>, from: NodeId, to: NodeId) -> Vec<NodeId> {
    let mut path = vec![to];
    let mut current = to;
    while current != from {
        match came_from.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Whether every node is reachable from node 0. Graphs with zero or one node
/// are connected.
pub fn is_connected<T>(graph: &Graph<T>) -> bool {
    if graph.node_count() <= 1 {
        return true;
    }
    match bfs_traverse(graph, 0, u32::MAX) {
        Ok(traversal) => traversal.order.len() == graph.node_count(),
        Err(_) => false,
    }
}

impl<T> Graph<T> {
    /// Shortest path between two nodes. See [`shortest_path`].
    pub fn shortest_path(&self, from: NodeId, to: NodeId) -> GraphResult<Vec<NodeId>> {
        shortest_path(self, from, to)
    }
}
