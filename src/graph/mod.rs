//! Graph data structures and operations
//!
//! This module contains the node store, the undirected [`Graph`] built on it,
//! the breadth-first shortest path search and the serializable description
//! format.

pub mod node;
pub mod store;
pub mod description;
mod search;

// Re-export main graph types
pub use node::{Node, NodeId};
pub use store::NodeStore;
pub use description::GraphDescription;

mod graph_ops;
pub use graph_ops::*;

use std::fmt::Display;
use std::hash::Hash;

/// Capabilities a node value needs: equality and hashing for the value
/// index, cloning for copies and returned paths, and a textual rendering for
/// dumps and error messages.
pub trait GraphValue: Clone + Eq + Hash + Display {}

impl<T: Clone + Eq + Hash + Display> GraphValue for T {}
