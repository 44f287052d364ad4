//! Breadth-first shortest path search.
//!
//! Partial paths are kept in a FIFO queue, so the first path to reach the
//! target has the fewest edges. Nodes are marked as they are enqueued and
//! never expanded twice, which also guarantees termination on cyclic graphs.

use std::collections::VecDeque;

use tracing::trace;

use super::graph_ops::Graph;
use super::node::NodeId;
use super::store::NodeStore;
use super::GraphValue;
use crate::core::error::{GraphError, GraphResult};

impl<V: GraphValue> Graph<V> {
    /// Find a path with the fewest edges from `start` to `end`.
    ///
    /// The result starts with `start` and ends with `end`; when they are equal
    /// it is the single value. If several shortest paths exist any one of them
    /// may be returned. Traversal markers are reset before the search and left
    /// set afterwards.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NonExistentNode`] if either value is not in the graph
    /// - [`GraphError::NoPath`] if no sequence of edges connects them
    pub fn shortest_path(&mut self, start: &V, end: &V) -> GraphResult<Vec<V>> {
        let from = self
            .node_id(start)
            .ok_or_else(|| GraphError::non_existent(start))?;
        let to = self
            .node_id(end)
            .ok_or_else(|| GraphError::non_existent(end))?;

        if from == to {
            return Ok(vec![start.clone()]);
        }

        self.unmark_all();
        let path = breadth_first(self.store_mut(), from, to)
            .ok_or_else(|| GraphError::no_path(start, end))?;

        Ok(path
            .into_iter()
            .filter_map(|id| self.value_of(id).cloned())
            .collect())
    }
}

/// Expand partial paths level by level until one reaches `end`.
///
/// Expects every marker to be cleared on entry.
fn breadth_first<V: GraphValue>(
    store: &mut NodeStore<V>,
    start: NodeId,
    end: NodeId,
) -> Option<Vec<NodeId>> {
    let mut queue: VecDeque<Vec<NodeId>> = VecDeque::new();
    store.get_mut(start)?.mark();
    queue.push_back(vec![start]);

    let mut expanded = 0usize;
    while let Some(path) = queue.pop_front() {
        let last = *path.last()?;
        let neighbors: Vec<NodeId> = store.get(last)?.adjacents().collect();
        expanded += 1;

        for neighbor in neighbors {
            let Some(node) = store.get_mut(neighbor) else {
                continue;
            };
            if node.is_marked() {
                continue;
            }
            node.mark();

            let mut extended = Vec::with_capacity(path.len() + 1);
            extended.extend_from_slice(&path);
            extended.push(neighbor);

            if neighbor == end {
                trace!(expanded, length = extended.len() - 1, "path found");
                return Some(extended);
            }
            queue.push_back(extended);
        }
    }

    trace!(expanded, "search space exhausted");
    None
}
