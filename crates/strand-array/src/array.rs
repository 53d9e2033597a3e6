//! The [`DynArray`] container: creation, growth, access and slicing.

use std::fmt;

use crate::config::ArrayConfig;
use crate::error::ArrayError;

/// A growable, indexable sequence of optional element references.
///
/// Slots `0..len()` are meaningful; slots `len()..capacity()` are slack
/// and may hold residual values from earlier use. The array never
/// interprets its elements and never releases what they refer to.
pub struct DynArray<T> {
    /// Backing storage. `slots.len()` is the logical capacity.
    pub(crate) slots: Vec<Option<T>>,
    /// Number of meaningful slots.
    pub(crate) len: usize,
    pub(crate) config: ArrayConfig,
}

/// Allocate `count` cleared slots under `config`, failing without side effects.
pub(crate) fn alloc_slots<T>(
    config: &ArrayConfig,
    count: usize,
) -> Result<Vec<Option<T>>, ArrayError> {
    let failed = || ArrayError::AllocationFailed {
        requested: count,
        limit: config.max_capacity,
    };
    if !config.permits(count) {
        return Err(failed());
    }
    let mut slots = Vec::new();
    slots.try_reserve_exact(count).map_err(|_| failed())?;
    slots.resize_with(count, || None);
    Ok(slots)
}

impl<T> DynArray<T> {
    /// Create an array of `len` absent slots with the default config.
    ///
    /// Capacity equals `len` exactly.
    pub fn new(len: usize) -> Result<Self, ArrayError> {
        Self::with_config(len, ArrayConfig::default())
    }

    /// Create an array of `len` absent slots governed by `config`.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AllocationFailed`] if `len` exceeds the config limit
    /// or the allocator refuses the request.
    pub fn with_config(len: usize, config: ArrayConfig) -> Result<Self, ArrayError> {
        let slots = alloc_slots(&config, len)?;
        Ok(Self { slots, len, config })
    }

    /// Build an array from an ordered sequence of elements.
    ///
    /// Elements are appended one at a time, so the resulting capacity
    /// follows the doubling policy of [`append`](Self::append).
    pub fn from_elements<I>(elements: I) -> Result<Self, ArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_elements_with_config(elements, ArrayConfig::default())
    }

    /// Build an array from an ordered sequence under `config`.
    pub fn from_elements_with_config<I>(elements: I, config: ArrayConfig) -> Result<Self, ArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut array = Self::with_config(0, config)?;
        if let Err(err) = array.append_all(elements) {
            return Err(array.as_allocation_failure(err));
        }
        Ok(array)
    }

    /// Number of meaningful slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no slots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots. Always `>= len()`.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The config this array was created with.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// Grow or shrink to exactly `len` slots.
    ///
    /// Growing past capacity reallocates to exactly `len` slots (no
    /// amortization). Newly exposed slots are cleared to absent. Shrinking
    /// discards the tail; shrinking to zero releases the backing storage.
    ///
    /// # Errors
    ///
    /// [`ArrayError::ContentsLost`] if reallocation fails. The array is
    /// then empty with zero capacity and its previous elements are gone.
    pub fn resize(&mut self, len: usize) -> Result<(), ArrayError> {
        if len == 0 {
            self.release();
            return Ok(());
        }
        let old_len = self.len;
        if len > self.capacity() {
            self.reallocate(len)?;
        }
        if len > old_len {
            self.slots[old_len..len].fill_with(|| None);
        }
        self.len = len;
        Ok(())
    }

    /// Append an element, growing capacity if there is no slack.
    ///
    /// Growth policy: write into slack if `capacity() > len()`; otherwise
    /// double capacity to `2 * len()`; an empty array allocates one slot.
    ///
    /// # Errors
    ///
    /// [`ArrayError::ContentsLost`], with the same collapse-to-empty
    /// outcome as [`resize`](Self::resize).
    pub fn append(&mut self, value: T) -> Result<(), ArrayError> {
        self.append_slot(Some(value))
    }

    /// Append a slot that may be absent. Same growth policy as [`append`](Self::append).
    pub fn append_slot(&mut self, slot: Option<T>) -> Result<(), ArrayError> {
        if self.capacity() <= self.len {
            let capacity = if self.len > 0 {
                self.len.checked_mul(2).unwrap_or(usize::MAX)
            } else {
                1
            };
            self.reallocate(capacity)?;
        }
        self.slots[self.len] = slot;
        self.len += 1;
        Ok(())
    }

    /// Append each element in order, growing as [`append`](Self::append) does.
    ///
    /// # Errors
    ///
    /// [`ArrayError::ContentsLost`] on the first failed growth. The array
    /// is then empty, including elements appended earlier in this call,
    /// and the remaining elements are not consumed.
    pub fn append_all<I>(&mut self, elements: I) -> Result<(), ArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        for element in elements {
            self.append(element)?;
        }
        Ok(())
    }

    /// The slot at `index`, or `None` if `index >= len()`.
    ///
    /// The inner `Option` distinguishes an absent slot from a set one.
    pub fn element(&self, index: usize) -> Option<&Option<T>> {
        self.slots[..self.len].get(index)
    }

    /// Writable access to the slot at `index`, or `None` if out of bounds.
    pub fn element_mut(&mut self, index: usize) -> Option<&mut Option<T>> {
        self.slots[..self.len].get_mut(index)
    }

    /// The element at `index`, or `None` if out of bounds or absent.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.element(index).and_then(Option::as_ref)
    }

    /// The meaningful slots as a slice.
    pub fn as_slots(&self) -> &[Option<T>] {
        &self.slots[..self.len]
    }

    /// Iterate forward over the meaningful slots.
    pub fn iter(&self) -> std::slice::Iter<'_, Option<T>> {
        self.as_slots().iter()
    }

    /// Release slot storage. The referenced elements are untouched.
    pub fn teardown(self) {
        log::trace!(
            "tearing down array: len {}, capacity {}",
            self.len,
            self.capacity()
        );
    }

    /// Reallocate to `capacity` slots, collapsing to empty on failure.
    fn reallocate(&mut self, capacity: usize) -> Result<(), ArrayError> {
        let additional = capacity.saturating_sub(self.slots.len());
        if self.config.permits(capacity) && self.slots.try_reserve_exact(additional).is_ok() {
            log::trace!("array capacity {} -> {}", self.slots.len(), capacity);
            self.slots.resize_with(capacity, || None);
            return Ok(());
        }
        let lost = self.len;
        self.release();
        log::warn!("array reallocation to {capacity} slots failed, {lost} elements lost");
        Err(ArrayError::ContentsLost {
            requested: capacity,
            lost,
        })
    }

    fn release(&mut self) {
        self.slots = Vec::new();
        self.len = 0;
    }

    /// Report a failed growth of a result array being built as a failed allocation.
    pub(crate) fn as_allocation_failure(&self, err: ArrayError) -> ArrayError {
        match err {
            ArrayError::ContentsLost { requested, .. } => ArrayError::AllocationFailed {
                requested,
                limit: self.config.max_capacity,
            },
            other => other,
        }
    }
}

impl<T: Clone> DynArray<T> {
    /// Shallow-copy the inclusive range `[from, to]` into a new array.
    ///
    /// # Errors
    ///
    /// [`ArrayError::InvalidRange`] when `to < from` or `to >= len()`;
    /// [`ArrayError::AllocationFailed`] if storage cannot be obtained.
    pub fn slice(&self, from: usize, to: usize) -> Result<Self, ArrayError> {
        if to < from || to >= self.len {
            return Err(ArrayError::InvalidRange {
                from,
                to,
                len: self.len,
            });
        }
        let mut slots = alloc_slots(&self.config, to - from + 1)?;
        slots.clone_from_slice(&self.slots[from..=to]);
        Ok(Self {
            len: slots.len(),
            slots,
            config: self.config.clone(),
        })
    }

    /// Shallow copy with capacity trimmed to `len()`.
    ///
    /// Equivalent to `slice(0, len() - 1)`; an empty array copies to an
    /// empty array.
    pub fn copy(&self) -> Result<Self, ArrayError> {
        match self.len {
            0 => Self::with_config(0, self.config.clone()),
            len => self.slice(0, len - 1),
        }
    }

    /// Concatenate `a` and `b` into a new array, `a`'s elements first.
    ///
    /// The result inherits `a`'s config.
    pub fn join(a: &Self, b: &Self) -> Result<Self, ArrayError> {
        let len = a.len.checked_add(b.len).ok_or(ArrayError::AllocationFailed {
            requested: usize::MAX,
            limit: a.config.max_capacity,
        })?;
        let mut slots = alloc_slots(&a.config, len)?;
        slots[..a.len].clone_from_slice(a.as_slots());
        slots[a.len..].clone_from_slice(b.as_slots());
        Ok(Self {
            slots,
            len,
            config: a.config.clone(),
        })
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
            config: ArrayConfig::default(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("slots", &self.as_slots())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slots() == other.as_slots()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a Option<T>;
    type IntoIter = std::slice::Iter<'a, Option<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
