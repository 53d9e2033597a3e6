//! Higher-order traversals over a [`DynArray`].
//!
//! All combinators except [`filter`](DynArray::filter) walk indices from
//! `len() - 1` down to `0`. Callbacks that record side effects observe
//! that order; it is part of the contract, not an implementation detail.

use std::ops::ControlFlow;

use crate::array::DynArray;
use crate::error::ArrayError;

impl<T> DynArray<T> {
    /// Visit every slot from the highest index to the lowest.
    ///
    /// The callback receives the index and the meaningful slots, so it
    /// can reassign or clear `slots[index]` and read its neighbours.
    /// Returning [`ControlFlow::Break`] stops the walk; the break is
    /// passed back to the caller.
    pub fn for_each<F>(&mut self, mut f: F) -> ControlFlow<()>
    where
        F: FnMut(usize, &mut [Option<T>]) -> ControlFlow<()>,
    {
        let slots = &mut self.slots[..self.len];
        for index in (0..slots.len()).rev() {
            f(index, slots)?;
        }
        ControlFlow::Continue(())
    }

    /// Build a new array where slot `i` is `f(element(i), i, self)`.
    ///
    /// Visits high-to-low. The result has the same length and config.
    pub fn map<U, F>(&self, mut f: F) -> Result<DynArray<U>, ArrayError>
    where
        F: FnMut(Option<&T>, usize, &Self) -> Option<U>,
    {
        let mut out = DynArray::with_config(self.len, self.config.clone())?;
        for index in (0..self.len).rev() {
            out.slots[index] = f(self.slots[index].as_ref(), index, self);
        }
        Ok(out)
    }

    /// Right fold: apply `f` to the accumulator and each slot, high-to-low.
    ///
    /// The accumulator is mutated in place and must be initialised by
    /// the caller.
    pub fn fold<A, F>(&self, acc: &mut A, mut f: F)
    where
        F: FnMut(&mut A, Option<&T>, usize, &Self),
    {
        for index in (0..self.len).rev() {
            f(acc, self.slots[index].as_ref(), index, self);
        }
    }

    /// Build a new array of `min(a.len(), b.len())` slots where slot `i`
    /// is `f(a[i], b[i], i, a, b)`. Trailing slots of the longer input
    /// are ignored. Visits high-to-low; inherits `a`'s config.
    pub fn zip_with<U, V, F>(a: &Self, b: &DynArray<U>, mut f: F) -> Result<DynArray<V>, ArrayError>
    where
        F: FnMut(Option<&T>, Option<&U>, usize, &Self, &DynArray<U>) -> Option<V>,
    {
        let len = a.len.min(b.len);
        let mut out = DynArray::with_config(len, a.config.clone())?;
        for index in (0..len).rev() {
            out.slots[index] = f(a.slots[index].as_ref(), b.slots[index].as_ref(), index, a, b);
        }
        Ok(out)
    }
}

impl<T: Clone> DynArray<T> {
    /// Keep the slots for which `f` returns true, in forward order.
    ///
    /// Unlike the other combinators this walks `0..len()`, appending each
    /// kept slot to the result as it is met. Absent slots are offered to
    /// the predicate too and stay absent if kept.
    pub fn filter<F>(&self, mut f: F) -> Result<Self, ArrayError>
    where
        F: FnMut(Option<&T>, usize, &Self) -> bool,
    {
        let mut out = Self::with_config(0, self.config.clone())?;
        for (index, slot) in self.as_slots().iter().enumerate() {
            if f(slot.as_ref(), index, self) {
                if let Err(err) = out.append_slot(slot.clone()) {
                    return Err(out.as_allocation_failure(err));
                }
            }
        }
        Ok(out)
    }
}
