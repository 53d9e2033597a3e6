//! Four-way comparison results and in-place sorting.
//!
//! [`Order`] extends [`std::cmp::Ordering`] with an `Incomparable`
//! outcome, for comparators over opaque references that cannot always
//! relate two elements (absent slots, mismatched kinds).

use std::cmp;

use crate::array::DynArray;

/// The outcome of comparing two elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left and right compare equal.
    Equal,
    /// Left sorts before right.
    LessThan,
    /// Left sorts after right.
    GreaterThan,
    /// The pair cannot be compared.
    Incomparable,
}

impl Order {
    /// Swap the roles of left and right. `Equal` and `Incomparable` are fixed points.
    pub fn reverse(self) -> Self {
        match self {
            Self::LessThan => Self::GreaterThan,
            Self::GreaterThan => Self::LessThan,
            other => other,
        }
    }

    /// Compare two optional elements by their natural order.
    ///
    /// An absent element is incomparable with anything, itself included.
    pub fn natural<T: PartialOrd>(lhs: Option<&T>, rhs: Option<&T>) -> Self {
        match (lhs, rhs) {
            (Some(l), Some(r)) => l.partial_cmp(r).map_or(Self::Incomparable, Self::from),
            _ => Self::Incomparable,
        }
    }
}

impl From<cmp::Ordering> for Order {
    fn from(ordering: cmp::Ordering) -> Self {
        match ordering {
            cmp::Ordering::Less => Self::LessThan,
            cmp::Ordering::Equal => Self::Equal,
            cmp::Ordering::Greater => Self::GreaterThan,
        }
    }
}

impl<T> DynArray<T> {
    /// Stable in-place sort of the meaningful slots.
    ///
    /// A slot only moves left past a neighbour that compares
    /// `GreaterThan` it, so `Equal` and `Incomparable` pairs keep their
    /// relative order. Insertion sort: O(n²) comparisons worst case, no
    /// allocation, and never panics on an inconsistent comparator.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(Option<&T>, Option<&T>) -> Order,
    {
        let slots = &mut self.slots[..self.len];
        for i in 1..slots.len() {
            let mut j = i;
            while j > 0 && compare(slots[j - 1].as_ref(), slots[j].as_ref()) == Order::GreaterThan {
                slots.swap(j - 1, j);
                j -= 1;
            }
        }
    }

    /// Whether no adjacent pair compares `GreaterThan`.
    pub fn is_sorted_by<F>(&self, mut compare: F) -> bool
    where
        F: FnMut(Option<&T>, Option<&T>) -> Order,
    {
        self.as_slots()
            .windows(2)
            .all(|pair| compare(pair[0].as_ref(), pair[1].as_ref()) != Order::GreaterThan)
    }
}
