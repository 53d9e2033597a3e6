//! Test fixtures for Strand development.
//!
//! Graph builders for the shapes the walk tests keep needing (chains,
//! rings, binary trees, diamonds) and a [`VisitLog`] for asserting the
//! order in which combinator callbacks run.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{array_of, binary_tree, chain, diamond, ring, Diamond, VisitLog};
