//! Reusable graph and array fixtures.
//!
//! - [`chain`]: `n` nodes linked down index 0.
//! - [`ring`]: a chain whose tail links back to its head.
//! - [`binary_tree`]: a complete binary tree with links 0 (left) and 1 (right).
//! - [`diamond`]: two paths that reconverge on a shared node.

use std::cell::RefCell;

use strand_array::DynArray;
use strand_graph::{Graph, NodeId};

/// Build `n` nodes with payloads `0..n`, each linked to the next on index 0.
///
/// Every node has arity 1; the tail's link is absent. Returns the nodes
/// in chain order.
pub fn chain(graph: &mut Graph<usize>, n: usize) -> Vec<NodeId> {
    let ids: Vec<NodeId> = (0..n)
        .map(|payload| graph.create_node(payload, 1).unwrap())
        .collect();
    for pair in ids.windows(2) {
        graph.set_link(pair[0], 0, Some(pair[1])).unwrap();
    }
    ids
}

/// [`chain`] with the tail linked back to the head.
pub fn ring(graph: &mut Graph<usize>, n: usize) -> Vec<NodeId> {
    let ids = chain(graph, n);
    if let (Some(&head), Some(&tail)) = (ids.first(), ids.last()) {
        graph.set_link(tail, 0, Some(head)).unwrap();
    }
    ids
}

/// A complete binary tree of the given depth (depth 0 is a single root).
///
/// Payloads are heap-order positions: the root is 0 and the children of
/// `i` are `2i + 1` (link 0) and `2i + 2` (link 1). Returns nodes indexed
/// by payload.
pub fn binary_tree(graph: &mut Graph<usize>, depth: u32) -> Vec<NodeId> {
    let count = (1usize << (depth + 1)) - 1;
    let ids: Vec<NodeId> = (0..count)
        .map(|payload| graph.create_node(payload, 2).unwrap())
        .collect();
    for parent in 0..count {
        for side in 0..2 {
            let child = 2 * parent + 1 + side;
            if child < count {
                graph.set_link(ids[parent], side, Some(ids[child])).unwrap();
            }
        }
    }
    ids
}

/// Nodes of a [`diamond`].
#[derive(Clone, Copy, Debug)]
pub struct Diamond {
    /// Arity 2: link 0 to `left`, link 1 to `right`.
    pub root: NodeId,
    /// Arity 1, linked to `sink`.
    pub left: NodeId,
    /// Arity 1, linked to `sink`.
    pub right: NodeId,
    /// Arity 1, link absent.
    pub sink: NodeId,
}

/// `root -0-> left -0-> sink` and `root -1-> right -0-> sink`.
///
/// `sink` has arity 1 and its link is absent, so a test can close a
/// cycle by setting it.
pub fn diamond(graph: &mut Graph<&str>) -> Diamond {
    let root = graph.create_node("root", 2).unwrap();
    let left = graph.create_node("left", 1).unwrap();
    let right = graph.create_node("right", 1).unwrap();
    let sink = graph.create_node("sink", 1).unwrap();
    graph.set_link(root, 0, Some(left)).unwrap();
    graph.set_link(root, 1, Some(right)).unwrap();
    graph.set_link(left, 0, Some(sink)).unwrap();
    graph.set_link(right, 0, Some(sink)).unwrap();
    Diamond {
        root,
        left,
        right,
        sink,
    }
}

/// Records callback indices so tests can assert visiting order.
///
/// Records through `&self`, so callbacks can log while the array under
/// test is also borrowed.
#[derive(Debug, Default)]
pub struct VisitLog {
    visits: RefCell<Vec<usize>>,
}

impl VisitLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit to `index`.
    pub fn visit(&self, index: usize) {
        self.visits.borrow_mut().push(index);
    }

    /// All recorded indices, oldest first.
    pub fn visits(&self) -> Vec<usize> {
        self.visits.borrow().clone()
    }

    /// Indices `len - 1` down to `0`.
    pub fn descending(len: usize) -> Vec<usize> {
        (0..len).rev().collect()
    }
}

/// An array of `values` built by successive appends.
pub fn array_of<T: Clone>(values: &[T]) -> DynArray<T> {
    DynArray::from_elements(values.iter().cloned()).unwrap()
}
