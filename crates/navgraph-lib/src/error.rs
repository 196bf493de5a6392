use std::fmt;

use thiserror::Error;

use crate::graph::NodeId;

/// Convenient result alias for the navgraph library.
pub type Result<T> = std::result::Result<T, Error>;

/// Which arena an out-of-range index was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Node,
    Edge,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Node => f.write_str("node"),
            IndexKind::Edge => f.write_str("edge"),
        }
    }
}

/// Top-level library error type.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Raised when a mutation is attempted out of order, e.g. adding a node
    /// after edges exist or changing the graph after it was built.
    #[error("cannot {operation}: {reason}")]
    InvalidState {
        operation: &'static str,
        reason: &'static str,
    },

    /// Raised when a node or edge index does not exist in the graph.
    #[error("{kind} index {index} out of range for graph with {len} {kind}s")]
    OutOfRange {
        kind: IndexKind,
        index: usize,
        len: usize,
    },

    /// Raised when an argument would break a documented precondition.
    #[error("invalid {name} {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Raised when a query needs at least one node.
    #[error("graph has no nodes")]
    EmptyGraph,

    /// Raised when no directed route connects the requested nodes.
    #[error("no path found from node {start} to node {goal}")]
    NoPathFound { start: NodeId, goal: NodeId },
}

impl Error {
    pub(crate) fn node_out_of_range(index: usize, len: usize) -> Self {
        Error::OutOfRange {
            kind: IndexKind::Node,
            index,
            len,
        }
    }

    pub(crate) fn edge_out_of_range(index: usize, len: usize) -> Self {
        Error::OutOfRange {
            kind: IndexKind::Edge,
            index,
            len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_the_arena() {
        let error = Error::node_out_of_range(9, 3);
        assert_eq!(
            error.to_string(),
            "node index 9 out of range for graph with 3 nodes"
        );

        let error = Error::edge_out_of_range(0, 0);
        assert_eq!(
            error.to_string(),
            "edge index 0 out of range for graph with 0 edges"
        );
    }

    #[test]
    fn no_path_message_includes_endpoints() {
        let error = Error::NoPathFound { start: 4, goal: 1 };
        assert_eq!(error.to_string(), "no path found from node 4 to node 1");
    }
}
