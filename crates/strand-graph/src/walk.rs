//! Whole-graph walks: reachability, cycle detection, copy and teardown.
//!
//! Every walk here is an explicit-stack depth-first search that visits
//! links in index order, with visited state local to the call. Links to
//! released nodes are skipped.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;

use crate::error::GraphError;
use crate::graph::Graph;
use crate::handle::{LinkAddress, NodeId};

/// Whether a graph walked from some node contains a directed cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cyclicity {
    /// No path from the start revisits a node on that path.
    Acyclic,
    /// Some path from the start returns to a node already on it.
    Cyclic,
}

/// DFS colouring for cycle detection.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current path.
    Open,
    /// Fully explored.
    Done,
}

/// `(node, next link index to examine)`.
type Frame = (NodeId, usize);

/// Inline DFS stack for graphs up to 16 levels deep.
type Stack = SmallVec<[Frame; 16]>;

impl<P> Graph<P> {
    /// First live link of `id` at index `>= from`, with its index.
    fn next_link(&self, id: NodeId, from: usize) -> Option<(usize, NodeId)> {
        let arity = self.arity(id)?;
        (from..arity).find_map(|index| {
            self.link(LinkAddress::new(id, index))
                .map(|target| (index, target))
        })
    }

    /// Every live node reachable from `start`, in depth-first preorder.
    ///
    /// `start` comes first. Each node appears once, whatever the shape of
    /// the graph. Empty if `start` is stale.
    pub fn reachable(&self, start: NodeId) -> Vec<NodeId> {
        let mut seen: IndexSet<NodeId> = IndexSet::new();
        if !self.contains(start) {
            return Vec::new();
        }
        seen.insert(start);
        let mut stack: Stack = SmallVec::new();
        stack.push((start, 0));

        while let Some(&(id, cursor)) = stack.last() {
            match self.next_link(id, cursor) {
                Some((index, target)) => {
                    if let Some(top) = stack.last_mut() {
                        top.1 = index + 1;
                    }
                    if seen.insert(target) {
                        stack.push((target, 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }
        seen.into_iter().collect()
    }

    /// Determine whether any path from `start` revisits a node on that path.
    ///
    /// Three-state marking (unvisited, on path, done) kept per call, so the
    /// walk terminates on any input. A stale `start` is `Acyclic`.
    pub fn is_cyclic(&self, start: NodeId) -> Cyclicity {
        if !self.contains(start) {
            return Cyclicity::Acyclic;
        }
        let mut marks: HashMap<NodeId, Mark> = HashMap::new();
        marks.insert(start, Mark::Open);
        let mut stack: Stack = SmallVec::new();
        stack.push((start, 0));

        while let Some(&(id, cursor)) = stack.last() {
            match self.next_link(id, cursor) {
                Some((index, target)) => {
                    if let Some(top) = stack.last_mut() {
                        top.1 = index + 1;
                    }
                    match marks.get(&target) {
                        Some(Mark::Open) => {
                            log::debug!("cycle found from {start}: {id}[{index}] -> {target}");
                            return Cyclicity::Cyclic;
                        }
                        Some(Mark::Done) => {}
                        None => {
                            marks.insert(target, Mark::Open);
                            stack.push((target, 0));
                        }
                    }
                }
                None => {
                    marks.insert(id, Mark::Done);
                    stack.pop();
                }
            }
        }
        Cyclicity::Acyclic
    }

    /// Release every node reachable from `start`, returning how many.
    ///
    /// Cycle-safe: each reachable node is collected once before any is
    /// released. Handles to released nodes become stale, and links into
    /// them from surviving nodes read as absent.
    ///
    /// # Errors
    ///
    /// [`GraphError::StaleNode`] if `start` is not live.
    pub fn teardown(&mut self, start: NodeId) -> Result<usize, GraphError> {
        if !self.contains(start) {
            return Err(GraphError::StaleNode { node: start });
        }
        let doomed = self.reachable(start);
        for &id in &doomed {
            self.remove_node(id)?;
        }
        log::debug!("teardown from {start} released {} nodes", doomed.len());
        Ok(doomed.len())
    }
}

impl Cyclicity {
    /// Whether this is [`Cyclicity::Cyclic`].
    pub fn is_cyclic(self) -> bool {
        self == Self::Cyclic
    }
}

impl<P: Clone> Graph<P> {
    /// Copy the subgraph reachable from `start` and return the copy of `start`.
    ///
    /// The copy has the same topology and clones of the same payload
    /// references, in new node and link storage within this graph. A map
    /// from original to copy is filled in as the walk discovers nodes, so
    /// a node reached twice is copied once: shared structure stays shared
    /// and cycles close onto copies, never onto originals.
    ///
    /// # Errors
    ///
    /// [`GraphError::StaleNode`] if `start` is not live; any error from
    /// [`create_node`](Self::create_node). On error, nodes created so far
    /// are released and the graph is left as it was.
    pub fn copy(&mut self, start: NodeId) -> Result<NodeId, GraphError> {
        let mut copies: IndexMap<NodeId, NodeId> = IndexMap::new();
        match self.copy_into(start, &mut copies) {
            Ok(root) => {
                log::debug!("copied {} nodes from {start}", copies.len());
                Ok(root)
            }
            Err(err) => {
                for &made in copies.values() {
                    // Copies were created by this call and are still live.
                    let _ = self.remove_node(made);
                }
                Err(err)
            }
        }
    }

    fn copy_into(
        &mut self,
        start: NodeId,
        copies: &mut IndexMap<NodeId, NodeId>,
    ) -> Result<NodeId, GraphError> {
        let root = self.duplicate(start)?;
        copies.insert(start, root);
        let mut stack: Stack = SmallVec::new();
        stack.push((start, 0));

        while let Some(&(id, cursor)) = stack.last() {
            let Some((index, target)) = self.next_link(id, cursor) else {
                stack.pop();
                continue;
            };
            if let Some(top) = stack.last_mut() {
                top.1 = index + 1;
            }
            let target_copy = match copies.get(&target) {
                Some(&existing) => existing,
                None => {
                    let fresh = self.duplicate(target)?;
                    copies.insert(target, fresh);
                    stack.push((target, 0));
                    fresh
                }
            };
            self.set_link(copies[&id], index, Some(target_copy))?;
        }
        Ok(root)
    }

    /// A new node with `original`'s payload and arity, links absent.
    fn duplicate(&mut self, original: NodeId) -> Result<NodeId, GraphError> {
        let node = self
            .node(original)
            .ok_or(GraphError::StaleNode { node: original })?;
        let (payload, arity) = (node.payload().clone(), node.arity());
        self.create_node(payload, arity)
    }
}
