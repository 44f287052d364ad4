//! Error types and handling for value-graph
//!
//! This module defines all error types used throughout the crate. Graph
//! operations return [`GraphError`] directly; everything around them
//! (configuration, input files, the CLI) uses the wider [`Error`].

use thiserror::Error;

/// Main result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for graph operations
pub type GraphResult<T> = std::result::Result<T, GraphError>;

/// Main error type for value-graph
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Graph operation errors
    #[error("Graph operation error: {0}")]
    Graph(#[from] GraphError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors from std
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Graph operation errors
///
/// Values are carried in their rendered form so the error type stays
/// independent of the graph's value type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An operation referenced a value that is not in the graph
    #[error("Node does not exist: {value}")]
    NonExistentNode {
        /// Rendered value of the missing node
        value: String,
    },

    /// Both endpoints exist but no sequence of edges connects them
    #[error("No path exists between {start} and {end}")]
    NoPath {
        /// Rendered start value
        start: String,
        /// Rendered end value
        end: String,
    },
}

impl GraphError {
    /// Create a non-existent node error from any printable value
    pub fn non_existent(value: impl std::fmt::Display) -> Self {
        Self::NonExistentNode {
            value: value.to_string(),
        }
    }

    /// Create a no-path error from the two endpoints
    pub fn no_path(start: impl std::fmt::Display, end: impl std::fmt::Display) -> Self {
        Self::NoPath {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Check if this error was caused by the caller's input rather than the environment
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(_) | Error::Graph(_) | Error::Toml(_) | Error::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_error_messages_carry_values() {
        let err = GraphError::non_existent("Z");
        assert_eq!(err.to_string(), "Node does not exist: Z");

        let err = GraphError::no_path(1, 2);
        assert_eq!(err.to_string(), "No path exists between 1 and 2");
    }

    #[test]
    fn graph_errors_convert_and_classify() {
        let err: Error = GraphError::non_existent("A").into();
        assert!(matches!(err, Error::Graph(GraphError::NonExistentNode { .. })));
        assert!(err.is_client_error());
        assert!(!Error::config("bad").is_client_error());
    }
}
