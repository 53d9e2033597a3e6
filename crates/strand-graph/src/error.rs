//! Graph-specific error types.

use std::error::Error;
use std::fmt;

use strand_array::ArrayError;

use crate::handle::NodeId;

/// Errors that can occur during graph operations.
///
/// Broken paths are not errors: traversal and routing return `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// The node arena is full.
    CapacityExceeded {
        /// Node limit of the governing config.
        max_nodes: u32,
    },
    /// A handle whose node has been released or never existed in this graph.
    StaleNode {
        /// The offending handle.
        node: NodeId,
    },
    /// A link write to a slot index the node does not have.
    LinkOutOfRange {
        /// The node being written.
        node: NodeId,
        /// The requested link index.
        index: usize,
        /// The node's current number of link slots.
        arity: usize,
    },
    /// Link storage could not be allocated or grown.
    Links(ArrayError),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { max_nodes } => {
                write!(f, "graph capacity exceeded: at most {max_nodes} nodes")
            }
            Self::StaleNode { node } => write!(f, "stale node handle {node}"),
            Self::LinkOutOfRange { node, index, arity } => {
                write!(f, "link {index} out of range for node {node} with arity {arity}")
            }
            Self::Links(err) => write!(f, "link storage: {err}"),
        }
    }
}

impl Error for GraphError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Links(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ArrayError> for GraphError {
    fn from(err: ArrayError) -> Self {
        Self::Links(err)
    }
}
