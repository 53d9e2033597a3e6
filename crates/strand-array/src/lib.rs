//! Growable array of non-owning element references.
//!
//! [`DynArray<T>`] is an indexable, resizable sequence of slots. Each slot
//! holds either an element reference or the absent marker (`None`). The
//! array owns its slot storage but never the data its elements refer to:
//! `T` is expected to be a borrow, a shared pointer clone or an integer
//! handle into caller-owned storage.
//!
//! # Capacity model
//!
//! ```text
//! slots:  [ e0 | e1 | e2 | ·· | ·· ]
//!           \____ len ____/
//!           \_______ capacity ______/
//! ```
//!
//! - [`DynArray::resize`] grows capacity exactly to the requested length.
//! - [`DynArray::append`] writes into slack when there is any, otherwise
//!   doubles capacity (or allocates a single slot when empty).
//! - Slots past `len` keep residual values until they are re-exposed by
//!   `resize`, which clears them.
//!
//! # Iteration order
//!
//! [`for_each`](DynArray::for_each), [`map`](DynArray::map),
//! [`fold`](DynArray::fold) and [`zip_with`](DynArray::zip_with) visit
//! indices from `len - 1` down to `0`. [`filter`](DynArray::filter) is the
//! single forward-order combinator: it appends kept elements as it meets
//! them.
//!
//! # Allocation failure
//!
//! Constructors and derived-array operations return
//! [`ArrayError::AllocationFailed`] and produce nothing. In-place growth
//! (`resize`, `append`) that cannot reallocate collapses the array to
//! `len = capacity = 0` and reports [`ArrayError::ContentsLost`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod combinator;
pub mod config;
pub mod error;
pub mod ordering;

pub use array::DynArray;
pub use config::ArrayConfig;
pub use error::ArrayError;
pub use ordering::Order;
