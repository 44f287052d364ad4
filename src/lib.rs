//! Value Graph - generic in-memory undirected graphs
//!
//! Nodes are identified by their values, edges are unweighted and symmetric,
//! and [`Graph::shortest_path`] finds a path with the fewest edges using a
//! breadth-first search.
//!
//! ```
//! use value_graph::Graph;
//!
//! let mut graph: Graph<&str> = ["A", "B", "C"].into_iter().collect();
//! graph.connect(&"A", &"B").unwrap();
//! graph.connect(&"B", &"C").unwrap();
//!
//! assert_eq!(graph.shortest_path(&"A", &"C").unwrap(), vec!["A", "B", "C"]);
//! ```
#![warn(missing_docs)]

// Core foundational modules
pub mod core;

// Main functional modules
pub mod graph;

// Re-export commonly used items for convenience
pub use crate::core::{Config, Error, GraphError, GraphResult, Result};
pub use graph::{Graph, GraphDescription, GraphValue, NodeId};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging from configuration
pub fn init(config: &Config) -> Result<()> {
    crate::core::logging::init_logging(&config.logging)?;

    tracing::info!("Initializing {} v{}", NAME, VERSION);

    Ok(())
}
