//! Strand: payload-agnostic containers.
//!
//! This is the facade crate that re-exports the public API of the Strand
//! sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use strand::prelude::*;
//!
//! // Arrays hold references; the caller keeps the data.
//! let names = ["ada", "grace", "barbara"];
//! let array = DynArray::from_elements(names.iter()).unwrap();
//! let long = array.filter(|e, _, _| e.is_some_and(|n| n.len() > 3)).unwrap();
//! assert_eq!(long.len(), 2);
//!
//! // Graph nodes carry a payload and indexed links.
//! let mut graph = Graph::new();
//! let n0 = graph.create_node(&names[0], 2).unwrap();
//! let n1 = graph.create_node(&names[1], 1).unwrap();
//! graph.set_link(n0, 0, Some(n1)).unwrap();
//! assert_eq!(graph.traverse(n0, 0, 1), Some(n1));
//! assert_eq!(graph.route(n0, [1]), None);
//! assert_eq!(graph.is_cyclic(n0), Cyclicity::Acyclic);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `strand-array` | `DynArray`, combinators, ordering |
//! | [`graph`] | `strand-graph` | `Graph`, node handles, walks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Growable arrays of element references (`strand-array`).
pub use strand_array as array;

/// Directed graphs over a generational node arena (`strand-graph`).
pub use strand_graph as graph;

/// Common imports for typical Strand usage.
///
/// ```rust
/// use strand::prelude::*;
/// ```
pub mod prelude {
    // Arrays
    pub use strand_array::{ArrayConfig, ArrayError, DynArray, Order};

    // Graphs
    pub use strand_graph::{
        Cyclicity, Graph, GraphConfig, GraphError, LinkAddress, NodeId, Route,
    };
}
