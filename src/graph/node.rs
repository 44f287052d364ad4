//! Graph node implementation

use std::collections::BTreeSet;
use std::fmt;

/// Handle to a node inside the graph that created it.
///
/// Handles are plain arena indices. They are only meaningful for the graph
/// that returned them and are invalidated by [`Graph::clear`](super::Graph::clear).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in its store
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Graph node
#[derive(Debug)]
pub struct Node<V> {
    /// Node value, also its identity within the graph
    value: V,
    /// Adjacent nodes
    adjacents: BTreeSet<NodeId>,
    /// Traversal marker used by searches
    marked: bool,
}

impl<V> Node<V> {
    /// Create a new isolated, unmarked node
    pub fn new(value: V) -> Self {
        Self {
            value,
            adjacents: BTreeSet::new(),
            marked: false,
        }
    }

    /// Node value
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Handles of adjacent nodes
    pub fn adjacents(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.adjacents.iter().copied()
    }

    /// Number of adjacent nodes
    pub fn degree(&self) -> usize {
        self.adjacents.len()
    }

    /// Whether `other` is adjacent to this node
    pub fn is_adjacent(&self, other: NodeId) -> bool {
        self.adjacents.contains(&other)
    }

    /// Whether the traversal marker is set
    pub fn is_marked(&self) -> bool {
        self.marked
    }

    /// Add `other` to the adjacency set; returns false if it was already present
    pub(crate) fn link(&mut self, other: NodeId) -> bool {
        self.adjacents.insert(other)
    }

    pub(crate) fn mark(&mut self) {
        self.marked = true;
    }

    pub(crate) fn unmark(&mut self) {
        self.marked = false;
    }
}
