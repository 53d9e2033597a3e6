//! Graph nodes.

use strand_array::DynArray;

use crate::handle::NodeId;

/// A payload reference plus an indexed array of outgoing link slots.
///
/// Nodes live inside a [`Graph`](crate::Graph) and are reached through
/// [`NodeId`] handles. Link slots may name nodes that have since been
/// released; the graph reads those as absent.
#[derive(Debug)]
pub struct Node<P> {
    pub(crate) payload: P,
    pub(crate) links: DynArray<NodeId>,
}

impl<P> Node<P> {
    /// The node's payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Raw link slots, including any that name released nodes.
    pub fn links(&self) -> &DynArray<NodeId> {
        &self.links
    }

    /// Number of link slots.
    pub fn arity(&self) -> usize {
        self.links.len()
    }
}
