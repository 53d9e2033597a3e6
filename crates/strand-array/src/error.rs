//! Array-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during array operations.
///
/// Out-of-range reads are not errors; accessors return `None` instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Storage for a new array could not be obtained. No array was produced.
    AllocationFailed {
        /// Number of slots requested.
        requested: usize,
        /// Slot limit of the governing config.
        limit: usize,
    },
    /// An in-place reallocation failed and the array collapsed to empty.
    ///
    /// The array now has `len() == 0` and `capacity() == 0`; the elements
    /// it held are gone.
    ContentsLost {
        /// Number of slots the reallocation asked for.
        requested: usize,
        /// Number of elements discarded.
        lost: usize,
    },
    /// A slice range with `to < from` or `to >= len`.
    InvalidRange {
        /// First index of the requested range.
        from: usize,
        /// Last index (inclusive) of the requested range.
        to: usize,
        /// Length of the source array.
        len: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested, limit } => {
                write!(
                    f,
                    "array allocation failed: requested {requested} slots, limit {limit} slots"
                )
            }
            Self::ContentsLost { requested, lost } => {
                write!(
                    f,
                    "array reallocation to {requested} slots failed, {lost} elements lost"
                )
            }
            Self::InvalidRange { from, to, len } => {
                write!(f, "invalid slice range [{from}, {to}] for length {len}")
            }
        }
    }
}

impl Error for ArrayError {}
