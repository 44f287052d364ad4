//! Undirected graph over unique values

use std::fmt;

use tracing::{trace, warn};

use super::node::{Node, NodeId};
use super::store::NodeStore;
use super::GraphValue;
use crate::core::config::GraphConfig;
use crate::core::error::{GraphError, GraphResult};

/// Undirected, unweighted graph whose nodes are identified by their values.
///
/// The graph need not be connected. Edges are stored in both endpoints'
/// adjacency sets and can only be added; nodes are released all at once by
/// [`Graph::clear`] or when the graph is dropped.
///
/// Cloning produces a fully independent graph: nodes are re-inserted by value
/// and edges re-created by value, so no handle is shared with the source.
#[derive(Debug)]
pub struct Graph<V: GraphValue> {
    store: NodeStore<V>,
}

impl<V: GraphValue> Graph<V> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            store: NodeStore::new(),
        }
    }

    /// Create an empty graph with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: NodeStore::with_capacity(capacity),
        }
    }

    /// Create an empty graph sized from configuration
    pub fn from_config(config: &GraphConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Insert an isolated node holding `value`.
    ///
    /// Returns the new node's handle, or `None` if the value is already in
    /// the graph (the graph is not modified).
    pub fn insert(&mut self, value: V) -> Option<NodeId> {
        self.store.insert(value)
    }

    /// Connect two nodes by handle.
    ///
    /// Handles must come from this graph. A handle that does not resolve is
    /// ignored and nothing is modified.
    pub fn connect_nodes(&mut self, first: NodeId, second: NodeId) {
        if self.store.get(first).is_none() || self.store.get(second).is_none() {
            warn!(%first, %second, "connect called with a handle from another graph");
            return;
        }

        if let Some(node) = self.store.get_mut(first) {
            node.link(second);
        }
        if let Some(node) = self.store.get_mut(second) {
            node.link(first);
        }
    }

    /// Connect the nodes holding two values.
    ///
    /// # Errors
    ///
    /// [`GraphError::NonExistentNode`] if either value is missing; the graph
    /// is left unchanged.
    pub fn connect(&mut self, first: &V, second: &V) -> GraphResult<()> {
        let a = self.require(first)?;
        let b = self.require(second)?;
        self.connect_nodes(a, b);
        Ok(())
    }

    /// Clear the traversal marker on every node
    pub fn unmark_all(&mut self) {
        self.store.nodes_mut().for_each(Node::unmark);
    }

    /// Render every node followed by its neighbours, one node per line.
    ///
    /// Node order follows the store and is not part of the contract.
    pub fn dump(&self) -> String {
        self.to_string()
    }

    /// Release all nodes. Safe to call repeatedly; previously returned
    /// handles become invalid.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Whether a node holds `value`
    pub fn contains(&self, value: &V) -> bool {
        self.store.contains(value)
    }

    /// Handle of the node holding `value`
    pub fn node_id(&self, value: &V) -> Option<NodeId> {
        self.store.id_of(value)
    }

    /// Value of the node behind a handle
    pub fn value_of(&self, id: NodeId) -> Option<&V> {
        self.store.get(id).map(Node::value)
    }

    /// Values in store order
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.store.iter().map(|(_, node)| node.value())
    }

    /// Values adjacent to `value`, or `None` if it is not in the graph
    pub fn neighbors<'a>(&'a self, value: &V) -> Option<impl Iterator<Item = &'a V> + 'a> {
        let node = self.store.get(self.store.id_of(value)?)?;
        Some(
            node.adjacents()
                .filter_map(move |id| self.store.get(id).map(Node::value)),
        )
    }

    /// Whether an edge joins the two values
    pub fn are_adjacent(&self, first: &V, second: &V) -> bool {
        match (self.store.id_of(first), self.store.id_of(second)) {
            (Some(a), Some(b)) => self.store.get(a).is_some_and(|node| node.is_adjacent(b)),
            _ => false,
        }
    }

    /// Traversal marker of the node holding `value`
    pub fn is_marked(&self, value: &V) -> Option<bool> {
        let id = self.store.id_of(value)?;
        self.store.get(id).map(Node::is_marked)
    }

    /// Every undirected edge once, as a pair of endpoint values
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.store.iter().flat_map(move |(id, node)| {
            node.adjacents()
                .filter(move |&other| other >= id)
                .filter_map(move |other| {
                    self.store
                        .get(other)
                        .map(|neighbor| (node.value(), neighbor.value()))
                })
        })
    }

    pub(crate) fn store_mut(&mut self) -> &mut NodeStore<V> {
        &mut self.store
    }

    fn require(&self, value: &V) -> GraphResult<NodeId> {
        self.store
            .id_of(value)
            .ok_or_else(|| GraphError::non_existent(value))
    }

    /// Rebuild `other`'s nodes and edges in this graph, by value.
    ///
    /// Every node must exist before any edge referencing it is connected, so
    /// nodes go in first as islands and edges follow.
    fn copy_other(&mut self, other: &Self) {
        for value in other.values() {
            self.insert(value.clone());
        }

        for (first, second) in other.edges() {
            if let Err(err) = self.connect(first, second) {
                warn!(%err, "edge dropped while copying graph");
            }
        }

        trace!(nodes = self.len(), "graph copied");
    }
}

impl<V: GraphValue> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: GraphValue> Clone for Graph<V> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len());
        copy.copy_other(self);
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.copy_other(source);
    }
}

impl<V: GraphValue> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, node) in self.store.iter() {
            write!(f, "{}:", node.value())?;
            for id in node.adjacents() {
                if let Some(neighbor) = self.store.get(id) {
                    write!(f, " {}", neighbor.value())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<V: GraphValue> FromIterator<V> for Graph<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<V: GraphValue> Extend<V> for Graph<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
