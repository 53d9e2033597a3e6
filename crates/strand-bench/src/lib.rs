//! Benchmark workloads for the Strand containers.
//!
//! - [`append_workload`]: an array grown one element at a time.
//! - [`lattice_graph`]: a deterministic pseudo-random graph with a fixed arity.
//! - [`long_route`]: a route through [`lattice_graph`] that never breaks.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strand_array::DynArray;
use strand_graph::{Graph, NodeId, Route};

/// Grow an array to `n` elements by successive appends.
pub fn append_workload(n: usize) -> DynArray<usize> {
    let mut array = DynArray::new(0).expect("empty array never fails");
    for i in 0..n {
        array.append(i).expect("default config is unbounded");
    }
    array
}

/// Build a graph of `nodes` nodes with `arity` links each.
///
/// Link `k` of node `i` points at a node chosen by a multiplicative hash
/// of `(seed, i, k)`, so the graph is cyclic, fully linked and identical
/// for a given seed. Returns the nodes in creation order.
pub fn lattice_graph(nodes: usize, arity: usize, seed: u64) -> (Graph<usize>, Vec<NodeId>) {
    let mut graph = Graph::new();
    let ids: Vec<NodeId> = (0..nodes)
        .map(|i| graph.create_node(i, arity).expect("default config is unbounded"))
        .collect();
    for (i, &id) in ids.iter().enumerate() {
        for k in 0..arity {
            let target = ids[pick(seed, i, k, nodes)];
            graph
                .set_link(id, k, Some(target))
                .expect("k < arity and target is live");
        }
    }
    (graph, ids)
}

/// A route of `steps` link indices, cycling through `0..arity`.
pub fn long_route(steps: usize, arity: usize) -> Route {
    (0..steps).map(|s| s % arity.max(1)).collect()
}

fn pick(seed: u64, i: usize, k: usize, n: usize) -> usize {
    let h = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add((i as u64).wrapping_mul(1442695040888963407))
        .wrapping_add(k as u64 + 1);
    ((h >> 17) % n as u64) as usize
}
