//! Error types for the graph engine

use std::fmt;

/// Status codes for adapters that report outcomes as numbers (e.g. exit codes)
pub const CODE_OK: i32 = 0;
pub const CODE_INVALID_INPUT: i32 = 1;
pub const CODE_NOT_FOUND: i32 = 2;
pub const CODE_UNKNOWN_NODE: i32 = 3;
pub const CODE_NO_PATH: i32 = 4;

/// Graph engine error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Malformed mutation request (self-loop, negative weight, empty identifier)
    InvalidInput(String),

    /// No edge between the two nodes
    NotFound(String, String),

    /// Query references a node that was never added
    UnknownNode(String),

    /// Both nodes are known but no chain of edges connects them
    NoPath(String, String),
}

impl GraphError {
    /// Stable numeric status for this error
    pub fn code(&self) -> i32 {
        match self {
            GraphError::InvalidInput(_) => CODE_INVALID_INPUT,
            GraphError::NotFound(..) => CODE_NOT_FOUND,
            GraphError::UnknownNode(_) => CODE_UNKNOWN_NODE,
            GraphError::NoPath(..) => CODE_NO_PATH,
        }
    }

    /// `NotFound` is informational; callers show it as a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, GraphError::NotFound(..))
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InvalidInput(e) => write!(f, "Invalid input: {}", e),
            GraphError::NotFound(a, b) => write!(f, "No connection between {} and {}", a, b),
            GraphError::UnknownNode(n) => write!(f, "Unknown node: {}", n),
            GraphError::NoPath(a, b) => write!(f, "No path from {} to {}", a, b),
        }
    }
}

impl std::error::Error for GraphError {}
