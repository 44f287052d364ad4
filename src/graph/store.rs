//! Node store
//!
//! Owns every node of one graph in an arena and keys them by value. Nodes
//! refer to each other by [`NodeId`], so nothing is ever freed while still
//! referenced; all nodes are released together on [`NodeStore::clear`] or drop.

use ahash::AHashMap;
use tracing::{debug, trace};

use super::node::{Node, NodeId};
use super::GraphValue;

/// Arena of nodes with a value index
#[derive(Debug)]
pub struct NodeStore<V: GraphValue> {
    /// Node arena, indexed by `NodeId`
    nodes: Vec<Node<V>>,
    /// Value to handle lookup
    index: AHashMap<V, NodeId>,
}

impl<V: GraphValue> NodeStore<V> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: AHashMap::new(),
        }
    }

    /// Create an empty store with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: AHashMap::with_capacity(capacity),
        }
    }

    /// Insert a new isolated node holding `value`.
    ///
    /// Returns `None` when a node with this value already exists; the store
    /// is left unchanged in that case.
    pub fn insert(&mut self, value: V) -> Option<NodeId> {
        if self.index.contains_key(&value) {
            debug!(%value, "value already present, insert ignored");
            return None;
        }

        let id = NodeId::new(self.nodes.len());
        self.index.insert(value.clone(), id);
        self.nodes.push(Node::new(value));
        Some(id)
    }

    /// Handle of the node holding `value`
    pub fn id_of(&self, value: &V) -> Option<NodeId> {
        self.index.get(value).copied()
    }

    /// Whether a node holds `value`
    pub fn contains(&self, value: &V) -> bool {
        self.index.contains_key(value)
    }

    /// Node behind a handle
    pub fn get(&self, id: NodeId) -> Option<&Node<V>> {
        self.nodes.get(id.index())
    }

    /// Mutable node behind a handle
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<V>> {
        self.nodes.get_mut(id.index())
    }

    /// Number of stored nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the store holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate nodes with their handles, in store order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<V>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::new(i), node))
    }

    /// Iterate nodes mutably
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node<V>> + '_ {
        self.nodes.iter_mut()
    }

    /// Release every node. Safe to call repeatedly.
    pub fn clear(&mut self) {
        if !self.nodes.is_empty() {
            trace!(nodes = self.nodes.len(), "releasing nodes");
        }
        self.nodes.clear();
        self.index.clear();
    }
}

impl<V: GraphValue> Default for NodeStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_assigns_sequential_handles() {
        let mut store = NodeStore::new();
        let a = store.insert("a").unwrap();
        let b = store.insert("b").unwrap();

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(store.id_of(&"b"), Some(b));
        assert_eq!(store.get(a).map(|n| *n.value()), Some("a"));
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut store = NodeStore::new();
        assert!(store.insert(7).is_some());
        assert!(store.insert(7).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn new_nodes_are_isolated_and_unmarked() {
        let mut store = NodeStore::new();
        let id = store.insert('x').unwrap();
        let node = store.get(id).unwrap();
        assert_eq!(node.degree(), 0);
        assert!(!node.is_marked());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut store = NodeStore::with_capacity(4);
        store.insert(1);
        store.insert(2);

        store.clear();
        store.clear();

        assert!(store.is_empty());
        assert!(!store.contains(&1));
        assert_eq!(store.insert(1).map(NodeId::index), Some(0));
    }
}
