//! Core system types and foundations
//!
//! Error handling, configuration and logging setup shared by the graph
//! library and the command-line tool.

pub mod error;
pub mod config;
pub mod logging;

// Re-export commonly used items
pub use error::{Error, GraphError, GraphResult, Result};
pub use config::Config;
