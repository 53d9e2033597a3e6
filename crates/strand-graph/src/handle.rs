//! Node handles and link addresses.
//!
//! A [`NodeId`] is generation-scoped: releasing a node bumps its slot's
//! generation, so every outstanding handle to it fails the O(1) liveness
//! check instead of silently aliasing whatever reuses the slot.

use std::fmt;

/// Handle to a node in a [`Graph`](crate::Graph).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Arena slot index.
    pub fn index(self) -> u32 {
        self.index
    }

    /// Generation of the slot when this handle was issued.
    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// Names one link slot: link `index` of node `owner`.
///
/// Returned by [`Graph::resolve_link`](crate::Graph::resolve_link) and
/// consumed by [`Graph::link`](crate::Graph::link) and
/// [`Graph::set_link_at`](crate::Graph::set_link_at), so a slot found by a
/// walk can be read or assigned without re-walking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LinkAddress {
    /// The node holding the slot.
    pub owner: NodeId,
    /// The link index within `owner`.
    pub index: usize,
}

impl LinkAddress {
    /// Address link `index` of `owner`.
    pub fn new(owner: NodeId, index: usize) -> Self {
        Self { owner, index }
    }
}

impl fmt::Display for LinkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.owner, self.index)
    }
}
