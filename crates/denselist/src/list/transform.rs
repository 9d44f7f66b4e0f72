use super::DenseList;
use crate::key::ListKey;
use rand::seq::{IndexedRandom, SliceRandom};
use std::{
    cmp::Ordering,
    ops::{Bound, RangeBounds},
};

///
/// Derived operations.
///
/// Every operation here leaves the receiver untouched and returns a new
/// list that owns fresh backing storage. The output key sequence is
/// `0..n-1` by construction, so none of these need an explicit re-index
/// step.
///

impl<T> DenseList<T> {
    /// Map every element through `f`.
    #[must_use]
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> DenseList<U> {
        DenseList(self.0.iter().map(f).collect())
    }

    /// Map every element to an iterable and concatenate the results.
    #[must_use]
    pub fn flat_map<U, I>(&self, f: impl FnMut(&T) -> I) -> DenseList<U>
    where
        I: IntoIterator<Item = U>,
    {
        DenseList(self.0.iter().flat_map(f).collect())
    }

    /// Partition into elements that satisfy the predicate and those that
    /// do not, preserving relative order on both sides.
    #[must_use]
    pub fn partition(&self, mut predicate: impl FnMut(&T) -> bool) -> (Self, Self)
    where
        T: Clone,
    {
        let (keep, drop): (Vec<T>, Vec<T>) =
            self.0.iter().cloned().partition(|value| predicate(value));

        (Self(keep), Self(drop))
    }

    /// Keep the elements that satisfy the predicate.
    #[must_use]
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Self
    where
        T: Clone,
    {
        Self(
            self.0
                .iter()
                .filter(|value| predicate(value))
                .cloned()
                .collect(),
        )
    }

    /// Drop the elements that satisfy the predicate.
    #[must_use]
    pub fn reject(&self, mut predicate: impl FnMut(&T) -> bool) -> Self
    where
        T: Clone,
    {
        self.filter(|value| !predicate(value))
    }

    /// Sort ascending.
    #[must_use]
    pub fn sorted(&self) -> Self
    where
        T: Clone + Ord,
    {
        let mut values = self.0.clone();
        values.sort();

        Self(values)
    }

    /// Sort descending. Stable: equal elements keep their relative order.
    #[must_use]
    pub fn sorted_desc(&self) -> Self
    where
        T: Clone + Ord,
    {
        self.sorted_by(|a, b| b.cmp(a))
    }

    /// Sort by a comparator.
    #[must_use]
    pub fn sorted_by(&self, cmp: impl FnMut(&T, &T) -> Ordering) -> Self
    where
        T: Clone,
    {
        let mut values = self.0.clone();
        values.sort_by(cmp);

        Self(values)
    }

    /// Keep the first occurrence of each distinct element.
    #[must_use]
    pub fn unique(&self) -> Self
    where
        T: Clone + PartialEq,
    {
        let mut out: Vec<T> = Vec::new();
        for value in &self.0 {
            if !out.contains(value) {
                out.push(value.clone());
            }
        }

        Self(out)
    }

    /// Keep the elements not present in `other`, preserving order.
    #[must_use]
    pub fn diff<I>(&self, other: I) -> Self
    where
        T: Clone + PartialEq,
        I: IntoIterator<Item = T>,
    {
        let other: Vec<T> = other.into_iter().collect();

        self.filter(|value| !other.contains(value))
    }

    /// Keep the elements also present in `other`, preserving order.
    #[must_use]
    pub fn intersect<I>(&self, other: I) -> Self
    where
        T: Clone + PartialEq,
        I: IntoIterator<Item = T>,
    {
        let other: Vec<T> = other.into_iter().collect();

        self.filter(|value| other.contains(value))
    }

    /// Copy the elements in `range`, clamping out-of-bounds ends.
    #[must_use]
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Self
    where
        T: Clone,
    {
        let len = self.0.len();
        let start = match range.start_bound() {
            Bound::Included(&bound) => bound,
            Bound::Excluded(&bound) => bound.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&bound) => bound.saturating_add(1),
            Bound::Excluded(&bound) => bound,
            Bound::Unbounded => len,
        }
        .clamp(start, len);

        Self(self.0[start..end].to_vec())
    }

    /// Copy the elements in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self
    where
        T: Clone,
    {
        Self(self.0.iter().rev().cloned().collect())
    }

    /// Copy the first `n` elements.
    #[must_use]
    pub fn take(&self, n: usize) -> Self
    where
        T: Clone,
    {
        Self(self.0.iter().take(n).cloned().collect())
    }

    /// Copy the last `n` elements, preserving their order.
    #[must_use]
    pub fn take_last(&self, n: usize) -> Self
    where
        T: Clone,
    {
        let start = self.0.len().saturating_sub(n);

        Self(self.0[start..].to_vec())
    }

    /// Copy everything after the first `n` elements.
    #[must_use]
    pub fn skip(&self, n: usize) -> Self
    where
        T: Clone,
    {
        Self(self.0.iter().skip(n).cloned().collect())
    }

    /// Copy the leading elements that satisfy the predicate.
    #[must_use]
    pub fn take_while(&self, mut predicate: impl FnMut(&T) -> bool) -> Self
    where
        T: Clone,
    {
        Self(
            self.0
                .iter()
                .take_while(|value| predicate(value))
                .cloned()
                .collect(),
        )
    }

    /// Copy the leading elements until the predicate first holds.
    #[must_use]
    pub fn take_until(&self, mut predicate: impl FnMut(&T) -> bool) -> Self
    where
        T: Clone,
    {
        self.take_while(|value| !predicate(value))
    }

    /// Drop the leading elements that satisfy the predicate, copy the rest.
    #[must_use]
    pub fn skip_while(&self, mut predicate: impl FnMut(&T) -> bool) -> Self
    where
        T: Clone,
    {
        Self(
            self.0
                .iter()
                .skip_while(|value| predicate(value))
                .cloned()
                .collect(),
        )
    }

    /// Drop the leading elements until the predicate first holds, copy the
    /// rest.
    #[must_use]
    pub fn skip_until(&self, mut predicate: impl FnMut(&T) -> bool) -> Self
    where
        T: Clone,
    {
        self.skip_while(|value| !predicate(value))
    }

    /// Copy every element except those at the given positions.
    #[must_use]
    pub fn except<I>(&self, indices: I) -> Self
    where
        T: Clone,
        I: IntoIterator<Item = usize>,
    {
        let skip: Vec<usize> = indices.into_iter().collect();

        Self(
            self.0
                .iter()
                .enumerate()
                .filter(|(index, _)| !skip.contains(index))
                .map(|(_, value)| value.clone())
                .collect(),
        )
    }

    /// Copy only the elements at the given positions, in list order.
    #[must_use]
    pub fn only<I>(&self, indices: I) -> Self
    where
        T: Clone,
        I: IntoIterator<Item = usize>,
    {
        let keep: Vec<usize> = indices.into_iter().collect();

        Self(
            self.0
                .iter()
                .enumerate()
                .filter(|(index, _)| keep.contains(index))
                .map(|(_, value)| value.clone())
                .collect(),
        )
    }

    /// Split into chunks of `size` elements; the final chunk may be
    /// shorter. A zero size yields an empty list.
    #[must_use]
    pub fn chunk(&self, size: usize) -> DenseList<Self>
    where
        T: Clone,
    {
        if size == 0 {
            return DenseList::new();
        }

        DenseList(self.0.chunks(size).map(|chunk| Self(chunk.to_vec())).collect())
    }

    /// Pair up with `other`, truncating at the shorter side.
    #[must_use]
    pub fn zip<U, I>(&self, other: I) -> DenseList<(T, U)>
    where
        T: Clone,
        I: IntoIterator<Item = U>,
    {
        DenseList(self.0.iter().cloned().zip(other).collect())
    }

    /// Copy the list with `other` appended.
    #[must_use]
    pub fn concat<I>(&self, other: I) -> Self
    where
        T: Clone,
        I: IntoIterator<Item = T>,
    {
        let mut values = self.0.clone();
        values.extend(other);

        Self(values)
    }

    /// Copy the list with each `(key, value)` entry applied through the
    /// `put` policy: in-range keys overwrite, everything else appends.
    #[must_use]
    pub fn replace<K, I>(&self, entries: I) -> Self
    where
        T: Clone,
        K: Into<ListKey>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut out = self.clone();
        for (key, value) in entries {
            out.put(key, value);
        }

        out
    }

    /// Copy the list right-padded with `value` up to `len` elements.
    #[must_use]
    pub fn pad(&self, len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut values = self.0.clone();
        while values.len() < len {
            values.push(value.clone());
        }

        Self(values)
    }

    /// Copy every `step`-th element, starting at position 0. A zero step
    /// yields an empty list.
    #[must_use]
    pub fn nth(&self, step: usize) -> Self
    where
        T: Clone,
    {
        if step == 0 {
            return Self::new();
        }

        Self(self.0.iter().step_by(step).cloned().collect())
    }

    /// Copy the list in a uniformly random order.
    #[must_use]
    pub fn shuffled(&self) -> Self
    where
        T: Clone,
    {
        let mut values = self.0.clone();
        values.shuffle(&mut rand::rng());

        Self(values)
    }

    /// Copy up to `n` distinct positions chosen uniformly at random.
    #[must_use]
    pub fn sample(&self, n: usize) -> Self
    where
        T: Clone,
    {
        Self(
            self.0
                .choose_multiple(&mut rand::rng(), n)
                .cloned()
                .collect(),
        )
    }
}

impl<T> DenseList<DenseList<T>> {
    /// Concatenate one level of nested lists.
    #[must_use]
    pub fn collapse(&self) -> DenseList<T>
    where
        T: Clone,
    {
        DenseList(
            self.0
                .iter()
                .flat_map(|inner| inner.iter().cloned())
                .collect(),
        )
    }
}
