//! The node arena, link mutation and path resolution.

use smallvec::SmallVec;
use strand_array::DynArray;

use crate::config::GraphConfig;
use crate::error::GraphError;
use crate::handle::{LinkAddress, NodeId};
use crate::node::Node;

/// A sequence of link indices, one per step.
///
/// Inline for routes up to 8 steps; longer routes spill to the heap.
pub type Route = SmallVec<[usize; 8]>;

/// One arena slot. `node` is `None` once released.
#[derive(Debug)]
struct Entry<P> {
    generation: u32,
    node: Option<Node<P>>,
}

/// A directed graph stored as a generational arena of nodes.
///
/// The graph owns node and link storage. Payloads are held, cloned by
/// [`copy`](Self::copy) and handed back by [`remove_node`](Self::remove_node),
/// but never interpreted.
#[derive(Debug)]
pub struct Graph<P> {
    slots: Vec<Entry<P>>,
    free_list: Vec<u32>,
    live: usize,
    config: GraphConfig,
}

impl<P> Default for Graph<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Graph<P> {
    /// Create an empty graph with the default config.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create an empty graph governed by `config`.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            live: 0,
            config,
        }
    }

    /// The config this graph was created with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the graph has no live nodes.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Create a node with `payload` and `arity` absent link slots.
    ///
    /// # Errors
    ///
    /// [`GraphError::CapacityExceeded`] if no slot is free and the arena
    /// is at `max_nodes`; [`GraphError::Links`] if link storage cannot be
    /// allocated. Nothing is created on failure.
    pub fn create_node(&mut self, payload: P, arity: usize) -> Result<NodeId, GraphError> {
        if self.free_list.is_empty() && self.slots.len() >= self.config.max_nodes as usize {
            return Err(GraphError::CapacityExceeded {
                max_nodes: self.config.max_nodes,
            });
        }
        let links = DynArray::with_config(arity, self.config.links.clone())?;
        let node = Node { payload, links };

        let id = match self.free_list.pop() {
            Some(index) => {
                let entry = &mut self.slots[index as usize];
                entry.node = Some(node);
                NodeId::new(index, entry.generation)
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Entry {
                    generation: 0,
                    node: Some(node),
                });
                NodeId::new(index, 0)
            }
        };
        self.live += 1;
        log::trace!("created node {id} with arity {arity}");
        Ok(id)
    }

    /// Release one node and return its payload.
    ///
    /// Links pointing at the released node from elsewhere read as absent
    /// from then on; its own outgoing links are dropped.
    pub fn remove_node(&mut self, id: NodeId) -> Result<P, GraphError> {
        let entry = self
            .slots
            .get_mut(id.index as usize)
            .filter(|e| e.generation == id.generation)
            .ok_or(GraphError::StaleNode { node: id })?;
        let node = entry.node.take().ok_or(GraphError::StaleNode { node: id })?;
        entry.generation = entry.generation.wrapping_add(1);
        self.free_list.push(id.index);
        self.live -= 1;
        log::trace!("released node {id}");
        Ok(node.payload)
    }

    /// Whether `id` names a live node of this graph.
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// The node behind `id`, or `None` if the handle is stale.
    pub fn node(&self, id: NodeId) -> Option<&Node<P>> {
        self.slots
            .get(id.index as usize)
            .filter(|e| e.generation == id.generation)
            .and_then(|e| e.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node<P>, GraphError> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|e| e.generation == id.generation)
            .and_then(|e| e.node.as_mut())
            .ok_or(GraphError::StaleNode { node: id })
    }

    /// The payload of `id`.
    pub fn payload(&self, id: NodeId) -> Option<&P> {
        self.node(id).map(Node::payload)
    }

    /// Replace the payload of `id`, returning the previous one.
    pub fn set_payload(&mut self, id: NodeId, payload: P) -> Result<P, GraphError> {
        Ok(std::mem::replace(&mut self.node_mut(id)?.payload, payload))
    }

    /// Number of link slots on `id`.
    pub fn arity(&self, id: NodeId) -> Option<usize> {
        self.node(id).map(Node::arity)
    }

    /// Change the number of link slots on `id`.
    ///
    /// New slots are absent; removed slots are discarded.
    ///
    /// # Errors
    ///
    /// [`GraphError::Links`] wrapping
    /// [`ArrayError::ContentsLost`](strand_array::ArrayError::ContentsLost)
    /// if the link array could not grow. The node then has arity 0.
    pub fn resize_links(&mut self, id: NodeId, arity: usize) -> Result<(), GraphError> {
        self.node_mut(id)?.links.resize(arity)?;
        Ok(())
    }

    /// Read the slot named by `addr`.
    ///
    /// `None` if the owner is stale, the index is out of range, the slot
    /// is absent, or it names a released node.
    pub fn link(&self, addr: LinkAddress) -> Option<NodeId> {
        let target = *self.node(addr.owner)?.links.get(addr.index)?;
        self.contains(target).then_some(target)
    }

    /// Set link `index` of `node` to `target` (or clear it with `None`).
    ///
    /// Returns the previous live target of the slot.
    ///
    /// # Errors
    ///
    /// [`GraphError::StaleNode`] if `node` or `target` is not live;
    /// [`GraphError::LinkOutOfRange`] if `index >= arity(node)`.
    pub fn set_link(
        &mut self,
        node: NodeId,
        index: usize,
        target: Option<NodeId>,
    ) -> Result<Option<NodeId>, GraphError> {
        if let Some(t) = target {
            if !self.contains(t) {
                return Err(GraphError::StaleNode { node: t });
            }
        }
        let owner = self.node_mut(node)?;
        let arity = owner.arity();
        let slot = owner
            .links
            .element_mut(index)
            .ok_or(GraphError::LinkOutOfRange { node, index, arity })?;
        let previous = std::mem::replace(slot, target);
        Ok(previous.filter(|&p| self.contains(p)))
    }

    /// Write the slot named by `addr`. See [`set_link`](Self::set_link).
    pub fn set_link_at(
        &mut self,
        addr: LinkAddress,
        target: Option<NodeId>,
    ) -> Result<Option<NodeId>, GraphError> {
        self.set_link(addr.owner, addr.index, target)
    }

    /// Locate the slot reached by following link `index` `depth` times.
    ///
    /// At `depth == 1` this is `node`'s own slot `index`, whether or not it
    /// is set, so it can be written through. At greater depths every
    /// intermediate slot must hold a live node. `depth == 0` names no slot
    /// and returns `None`.
    pub fn resolve_link(&self, node: NodeId, index: usize, depth: usize) -> Option<LinkAddress> {
        if depth == 0 {
            return None;
        }
        let mut owner = node;
        for _ in 1..depth {
            owner = self.link(LinkAddress::new(owner, index))?;
        }
        // The final slot must exist even if it is absent.
        self.node(owner)?.links.element(index)?;
        Some(LinkAddress::new(owner, index))
    }

    /// The node `depth` steps down link `index` from `node`.
    ///
    /// `depth == 0` returns `node` itself (if live). `None` as soon as the
    /// path breaks.
    pub fn traverse(&self, node: NodeId, index: usize, depth: usize) -> Option<NodeId> {
        if depth == 0 {
            return self.contains(node).then_some(node);
        }
        self.link(self.resolve_link(node, index, depth)?)
    }

    /// Follow a heterogeneous path: one link index per step.
    ///
    /// An empty route returns `node` itself (if live). `None` as soon as
    /// a step's slot is absent or out of range.
    pub fn route<I>(&self, node: NodeId, indices: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut current = self.contains(node).then_some(node)?;
        for index in indices {
            current = self.link(LinkAddress::new(current, index))?;
        }
        Some(current)
    }

    /// [`route`](Self::route) driven by an array of link indices.
    ///
    /// An absent slot in `indices` breaks the route.
    pub fn route_array(&self, node: NodeId, indices: &DynArray<usize>) -> Option<NodeId> {
        let mut current = self.contains(node).then_some(node)?;
        for slot in indices {
            current = self.link(LinkAddress::new(current, (*slot)?))?;
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;
    use strand_array::{ArrayConfig, ArrayError};

    /// `n0` (arity 2) with link 0 -> `n1` (arity 1).
    fn pair() -> (Graph<&'static str>, NodeId, NodeId) {
        let mut g = Graph::new();
        let n0 = g.create_node("n0", 2).unwrap();
        let n1 = g.create_node("n1", 1).unwrap();
        g.set_link(n0, 0, Some(n1)).unwrap();
        (g, n0, n1)
    }

    /// `a -0-> b -0-> c -0-> d`.
    fn chain() -> (Graph<u32>, Vec<NodeId>) {
        let mut g = Graph::new();
        let ids: Vec<NodeId> = (0..4).map(|p| g.create_node(p, 1).unwrap()).collect();
        for w in ids.windows(2) {
            g.set_link(w[0], 0, Some(w[1])).unwrap();
        }
        (g, ids)
    }

    #[test]
    fn create_node_starts_with_absent_links() {
        let mut g = Graph::new();
        let n = g.create_node('x', 3).unwrap();
        assert_eq!(g.arity(n), Some(3));
        assert_eq!(g.payload(n), Some(&'x'));
        assert!(g.node(n).unwrap().links().iter().all(Option::is_none));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn create_node_respects_node_limit() {
        let mut g = Graph::with_config(GraphConfig::new(1));
        g.create_node((), 0).unwrap();
        assert_eq!(
            g.create_node((), 0),
            Err(GraphError::CapacityExceeded { max_nodes: 1 })
        );
    }

    #[test]
    fn create_node_fails_when_links_cannot_allocate() {
        let mut g = Graph::with_config(GraphConfig::default().with_links(ArrayConfig::new(2)));
        let err = g.create_node((), 3).unwrap_err();
        assert_eq!(
            err,
            GraphError::Links(ArrayError::AllocationFailed {
                requested: 3,
                limit: 2
            })
        );
        assert!(g.is_empty());
    }

    #[test]
    fn released_slot_is_reused_with_new_generation() {
        let mut g = Graph::with_config(GraphConfig::new(1));
        let old = g.create_node(1, 0).unwrap();
        assert_eq!(g.remove_node(old), Ok(1));
        let new = g.create_node(2, 0).unwrap();
        assert_eq!(old.index(), new.index());
        assert_ne!(old, new);
        assert!(!g.contains(old));
        assert_eq!(g.payload(new), Some(&2));
        assert_eq!(g.remove_node(old), Err(GraphError::StaleNode { node: old }));
    }

    #[test]
    fn scenario_pair_traverse_and_route() {
        let (g, n0, n1) = pair();
        assert_eq!(g.traverse(n0, 0, 1), Some(n1));
        assert_eq!(g.traverse(n0, 1, 1), None);
        assert_eq!(g.route(n0, [0]), Some(n1));
        assert_eq!(g.route(n0, [1]), None);
    }

    #[test]
    fn traverse_depth_zero_is_identity() {
        let (g, n0, n1) = pair();
        assert_eq!(g.traverse(n0, 0, 0), Some(n0));
        assert_eq!(g.traverse(n1, 5, 0), Some(n1));
    }

    #[test]
    fn route_empty_is_identity() {
        let (g, n0, _) = pair();
        assert_eq!(g.route(n0, Vec::new()), Some(n0));
        assert_eq!(g.route(n0, Route::new()), Some(n0));
    }

    #[test]
    fn resolve_link_depth_one_names_own_slot_even_if_absent() {
        let (g, n0, _) = pair();
        assert_eq!(g.resolve_link(n0, 1, 1), Some(LinkAddress::new(n0, 1)));
        assert_eq!(g.link(LinkAddress::new(n0, 1)), None);
    }

    #[test]
    fn resolve_link_rejects_depth_zero_and_missing_slots() {
        let (g, n0, n1) = pair();
        assert_eq!(g.resolve_link(n0, 0, 0), None);
        assert_eq!(g.resolve_link(n0, 2, 1), None);
        // n1 has arity 1, so link 0 at depth 2 exists.
        assert_eq!(g.resolve_link(n0, 0, 2), Some(LinkAddress::new(n1, 0)));
        // Depth 3 needs n1's link 0 to be set.
        assert_eq!(g.resolve_link(n0, 0, 3), None);
    }

    #[test]
    fn resolved_address_can_be_written_through() {
        let (mut g, n0, n1) = pair();
        let n2 = g.create_node("n2", 0).unwrap();
        let addr = g.resolve_link(n0, 0, 2).unwrap();
        assert_eq!(g.set_link_at(addr, Some(n2)), Ok(None));
        assert_eq!(g.link(LinkAddress::new(n1, 0)), Some(n2));
        assert_eq!(g.traverse(n0, 0, 2), Some(n2));
    }

    #[test]
    fn traverse_stops_at_first_gap() {
        let (mut g, ids) = chain();
        assert_eq!(g.traverse(ids[0], 0, 3), Some(ids[3]));
        g.set_link(ids[1], 0, None).unwrap();
        assert_eq!(g.traverse(ids[0], 0, 1), Some(ids[1]));
        assert_eq!(g.traverse(ids[0], 0, 2), None);
        assert_eq!(g.traverse(ids[0], 0, 50), None);
    }

    #[test]
    fn traverse_through_self_loop_never_ends_early() {
        let mut g = Graph::new();
        let n = g.create_node((), 1).unwrap();
        g.set_link(n, 0, Some(n)).unwrap();
        assert_eq!(g.traverse(n, 0, 1_000), Some(n));
    }

    #[test]
    fn route_follows_varying_indices() {
        let mut g = Graph::new();
        let root = g.create_node("root", 2).unwrap();
        let left = g.create_node("left", 2).unwrap();
        let right = g.create_node("right", 2).unwrap();
        g.set_link(root, 0, Some(left)).unwrap();
        g.set_link(root, 1, Some(right)).unwrap();
        g.set_link(left, 1, Some(right)).unwrap();
        g.set_link(right, 0, Some(root)).unwrap();

        let route: Route = smallvec![0, 1, 0];
        assert_eq!(g.route(root, route), Some(root));
        assert_eq!(g.route(root, [1, 0, 0]), Some(left));
        assert_eq!(g.route(root, [0, 0]), None);
        assert_eq!(g.route(root, [0, 7]), None);
    }

    #[test]
    fn route_array_breaks_on_absent_step() {
        let (g, n0, n1) = pair();
        let mut indices = DynArray::from_elements([0usize]).unwrap();
        assert_eq!(g.route_array(n0, &indices), Some(n1));
        indices.append_slot(None).unwrap();
        assert_eq!(g.route_array(n0, &indices), None);
        let empty = DynArray::new(0).unwrap();
        assert_eq!(g.route_array(n0, &empty), Some(n0));
    }

    #[test]
    fn set_link_validates_target_and_index() {
        let (mut g, n0, n1) = pair();
        assert_eq!(
            g.set_link(n1, 1, Some(n0)),
            Err(GraphError::LinkOutOfRange {
                node: n1,
                index: 1,
                arity: 1
            })
        );
        g.remove_node(n1).unwrap();
        assert_eq!(
            g.set_link(n0, 1, Some(n1)),
            Err(GraphError::StaleNode { node: n1 })
        );
    }

    #[test]
    fn set_link_returns_previous_target() {
        let (mut g, n0, n1) = pair();
        assert_eq!(g.set_link(n0, 0, None), Ok(Some(n1)));
        assert_eq!(g.set_link(n0, 0, None), Ok(None));
    }

    #[test]
    fn links_into_released_nodes_read_absent() {
        let (mut g, n0, n1) = pair();
        g.remove_node(n1).unwrap();
        assert_eq!(g.traverse(n0, 0, 1), None);
        assert_eq!(g.route(n0, [0]), None);
        // A recycled slot is not mistaken for the released node.
        let n2 = g.create_node("n2", 0).unwrap();
        assert_eq!(n2.index(), n1.index());
        assert_eq!(g.traverse(n0, 0, 1), None);
    }

    #[test]
    fn stale_start_node_resolves_nothing() {
        let (mut g, n0, _) = pair();
        g.remove_node(n0).unwrap();
        assert_eq!(g.traverse(n0, 0, 0), None);
        assert_eq!(g.route(n0, Vec::new()), None);
        assert_eq!(g.resolve_link(n0, 0, 1), None);
    }

    #[test]
    fn resize_links_adds_absent_slots() {
        let (mut g, n0, n1) = pair();
        g.resize_links(n0, 4).unwrap();
        assert_eq!(g.arity(n0), Some(4));
        assert_eq!(g.traverse(n0, 0, 1), Some(n1));
        assert_eq!(g.traverse(n0, 3, 1), None);
        g.resize_links(n0, 0).unwrap();
        assert_eq!(g.resolve_link(n0, 0, 1), None);
    }

    #[test]
    fn resize_links_over_limit_loses_links() {
        let mut g = Graph::with_config(GraphConfig::default().with_links(ArrayConfig::new(2)));
        let a = g.create_node((), 2).unwrap();
        g.set_link(a, 0, Some(a)).unwrap();
        let err = g.resize_links(a, 3).unwrap_err();
        assert!(matches!(
            err,
            GraphError::Links(ArrayError::ContentsLost { lost: 2, .. })
        ));
        assert_eq!(g.arity(a), Some(0));
    }

    #[test]
    fn set_payload_swaps() {
        let (mut g, n0, _) = pair();
        assert_eq!(g.set_payload(n0, "root"), Ok("n0"));
        assert_eq!(g.payload(n0), Some(&"root"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn zero_depth_is_identity_on_live_nodes(
                nodes in proptest::collection::vec((0usize..4, any::<bool>()), 1..24),
                index in 0usize..8,
            ) {
                let mut g = Graph::new();
                let ids: Vec<NodeId> = nodes
                    .iter()
                    .enumerate()
                    .map(|(i, &(arity, _))| g.create_node(i, arity).unwrap())
                    .collect();
                for (&id, &(_, released)) in ids.iter().zip(&nodes) {
                    if released {
                        g.remove_node(id).unwrap();
                    }
                }
                // Reuse freed slots so stale handles share indices with live ones.
                let reborn = g.create_node(usize::MAX, 1).unwrap();

                let no_steps: DynArray<usize> = DynArray::new(0).unwrap();
                for &id in ids.iter().chain([&reborn]) {
                    let expected = g.contains(id).then_some(id);
                    prop_assert_eq!(g.traverse(id, index, 0), expected);
                    prop_assert_eq!(g.route(id, Vec::new()), expected);
                    prop_assert_eq!(g.route_array(id, &no_steps), expected);
                }
            }
        }
    }
}
