//! Array configuration parameters.

/// Configuration for a [`DynArray`](crate::DynArray).
///
/// Fixed at construction and inherited by every array derived from it
/// (slices, copies, joins, combinator results).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Hard limit on allocated slots.
    ///
    /// Any growth whose required capacity exceeds this limit is treated
    /// as an allocation failure. Default: [`Self::DEFAULT_MAX_CAPACITY`].
    pub max_capacity: usize,
}

impl ArrayConfig {
    /// Largest slot count a `Vec` of pointer-sized slots can address.
    pub const DEFAULT_MAX_CAPACITY: usize = isize::MAX as usize / std::mem::size_of::<usize>();

    /// Create a config with the given slot limit.
    pub fn new(max_capacity: usize) -> Self {
        Self { max_capacity }
    }

    /// Whether an allocation of `slots` slots is permitted.
    pub fn permits(&self, slots: usize) -> bool {
        slots <= self.max_capacity
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_CAPACITY)
    }
}
