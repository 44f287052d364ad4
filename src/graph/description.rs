//! Serializable graph description
//!
//! A flat list of values and value pairs, used to load graphs from TOML and
//! to emit them as JSON.

use serde::{Deserialize, Serialize};

use super::graph_ops::Graph;
use super::GraphValue;
use crate::core::error::GraphResult;

/// Nodes and undirected edges of a graph, by value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription<V> {
    /// Node values
    #[serde(default = "Vec::new")]
    pub nodes: Vec<V>,
    /// Edges as endpoint pairs; each undirected edge appears once
    #[serde(default = "Vec::new")]
    pub edges: Vec<(V, V)>,
}

impl<V: GraphValue> Graph<V> {
    /// Describe this graph's nodes and edges by value
    pub fn describe(&self) -> GraphDescription<V> {
        GraphDescription {
            nodes: self.values().cloned().collect(),
            edges: self
                .edges()
                .map(|(a, b)| (a.clone(), b.clone()))
                .collect(),
        }
    }

    /// Build a graph from a description.
    ///
    /// Repeated node values collapse into one node.
    ///
    /// # Errors
    ///
    /// [`GraphError::NonExistentNode`](crate::core::GraphError::NonExistentNode)
    /// if an edge names a value missing from `nodes`.
    pub fn from_description(description: &GraphDescription<V>) -> GraphResult<Self> {
        let mut graph = Self::with_capacity(description.nodes.len());
        graph.add_description(description)?;
        Ok(graph)
    }

    /// Insert a description's nodes, then connect its edges.
    ///
    /// Values already in the graph are reused. Edges connected before a
    /// failing edge are kept.
    ///
    /// # Errors
    ///
    /// [`GraphError::NonExistentNode`](crate::core::GraphError::NonExistentNode)
    /// if an edge names a value that is neither in `nodes` nor in the graph.
    pub fn add_description(&mut self, description: &GraphDescription<V>) -> GraphResult<()> {
        self.extend(description.nodes.iter().cloned());

        for (first, second) in &description.edges {
            self.connect(first, second)?;
        }

        Ok(())
    }
}
