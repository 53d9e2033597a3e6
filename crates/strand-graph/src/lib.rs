//! Directed graph of nodes connected by indexed links.
//!
//! A [`Graph<P>`] is an arena of nodes addressed by generational
//! [`NodeId`] handles. Each node carries one payload `P`, which the graph
//! never inspects, and a [`DynArray`](strand_array::DynArray) of link
//! slots. A link slot is either absent or names another node; self-links
//! and cycles are allowed.
//!
//! ```text
//! Graph<P>
//! ├── slots: Vec<Entry>   (generation + Option<Node<P>>)
//! │   └── Node { payload: P, links: DynArray<NodeId> }
//! └── free_list           (released slot indices, reused with a bumped generation)
//! ```
//!
//! # Paths
//!
//! - [`Graph::traverse`] follows one link index repeatedly (homogeneous path).
//! - [`Graph::route`] follows a sequence of possibly different indices.
//! - [`Graph::resolve_link`] names the slot at the end of a homogeneous
//!   path so it can be read or written in one step.
//!
//! Any absent slot, out-of-range index or released node along a path
//! makes the walk return `None`.
//!
//! # Whole-graph walks
//!
//! [`Graph::is_cyclic`], [`Graph::copy`] and [`Graph::teardown`] are
//! iterative depth-first walks with per-call visited state. They
//! terminate on cyclic input and do not grow the call stack with graph depth.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod graph;
pub mod handle;
pub mod node;
pub mod walk;

pub use config::GraphConfig;
pub use error::GraphError;
pub use graph::{Graph, Route};
pub use handle::{LinkAddress, NodeId};
pub use node::Node;
pub use walk::Cyclicity;
