// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Growable aggregate tree.
//!
//! A segment tree that grows one element at a time. Elements live at odd
//! coordinates of a flat `Vec<Option<T>>` and parents sit between their
//! children (see [`crate::index`]). Since no coordinate depends on the final
//! length, appending never moves existing slots: it adds one leaf and one
//! internal slot, then recomputes the ancestors the new leaf completes.
//!
//! For `n` elements the slots form a forest of complete subtrees, one per
//! set bit of `n`, just like the roots of an append-only merkle log. An
//! append merges subtrees the way incrementing a binary counter carries, so
//! it costs amortized O(1). `set` and `query` are O(log n), `get` is O(1).
//!
//! Internal slots whose subtree is not complete yet are `None`. Every other
//! internal slot holds the left-to-right fold of the leaves it covers.

use std::fmt;
use std::ops::Bound;
use std::ops::Index;
use std::ops::RangeBounds;

use crate::combine::Combine;
use crate::error::Error;
use crate::error::Result;
use crate::index;

/// A growable sequence supporting O(log n) range folds.
#[derive(Clone)]
pub struct AggTree<T, C> {
    /// Flat slot buffer, always `2 * len` long. Slot 0 is unused.
    pub(crate) slots: Vec<Option<T>>,
    /// Associative operator used for every aggregate.
    combine: C,
}

impl<T, C> AggTree<T, C> {
    /// Return the number of elements.
    pub fn len(&self) -> usize {
        return self.slots.len() >> 1;
    }

    /// Return true if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        return self.slots.is_empty();
    }

    /// Number of elements the tree can hold without reallocating.
    pub fn capacity(&self) -> usize {
        return self.slots.capacity() >> 1;
    }

    /// Get the element at `index`. O(1).
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        return self.node(index::leaf(index));
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        return Iter {
            leaves: self.slots.iter().skip(1).step_by(2),
        };
    }

    /// Consume the tree, returning its elements in order.
    pub fn into_values(self) -> Vec<T> {
        return self.slots.into_iter().skip(1).step_by(2).flatten().collect();
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.len();
        if index >= len {
            return Err(Error::OutOfRange { index, len });
        }
        return Ok(());
    }

    /// The aggregate stored at `coord`, which must be present.
    fn node(&self, coord: usize) -> Result<&T> {
        return self
            .slots
            .get(coord)
            .and_then(Option::as_ref)
            .ok_or(Error::InvariantViolation { slot: Some(coord) });
    }
}

impl<T, C: Combine<T>> AggTree<T, C> {
    /// Create an empty tree folding with `combine`.
    pub fn new(combine: C) -> Self {
        return AggTree {
            slots: Vec::new(),
            combine,
        };
    }

    /// Create an empty tree with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, combine: C) -> Self {
        return AggTree {
            slots: Vec::with_capacity(capacity << 1),
            combine,
        };
    }

    /// Build a tree from `values` in O(n).
    ///
    /// Each leaf is placed left to right. A leaf that finishes a right
    /// child completes its parent, whose left sibling was finished earlier
    /// in the scan, so the climb continues only while it keeps coming up
    /// from the right. Parents still waiting on a right child stay `None`.
    pub fn from_values<I>(values: I, combine: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        let mut tree = Self::with_capacity(values.size_hint().0, combine);

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("agg_tree_build", hint = tree.capacity()).entered();

        for value in values {
            tree.slots.push(None);
            let mut coord = tree.slots.len();
            tree.slots.push(Some(value));

            let mut k = 1;
            while index::is_right_child(coord, k) {
                let parent = index::parent(coord, k);
                let aggregate = tree.fold_pair(index::left_of_pair(coord, k), coord);
                tree.slots[parent] = aggregate;
                coord = parent;
                k <<= 1;
            }
        }

        return tree;
    }

    /// Replace the element at `index` and refresh its ancestors. O(log n).
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        let coord = index::leaf(index);
        self.slots[coord] = Some(value);
        self.refresh(coord);
        return Ok(());
    }

    /// Append an element. Amortized O(1), O(log n) worst case.
    pub fn append(&mut self, value: T) {
        let coord = self.slots.len() + 1;
        self.slots.push(None);
        self.slots.push(Some(value));
        let carries = self.refresh(coord);

        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len(), carries, "append");
        #[cfg(not(feature = "tracing"))]
        let _ = carries;
    }

    /// Alias for [`AggTree::append`], matching `Vec::push`.
    pub fn push(&mut self, value: T) {
        self.append(value);
    }

    /// Reserve room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional << 1);
    }

    /// Fold the elements in `start..end`, left to right. O(log n).
    ///
    /// Two boundaries walk up from the ends of the range. Whenever the left
    /// boundary is a right child its whole subtree lies inside the range, so
    /// it is folded onto the end of `left` and the boundary steps past it.
    /// Symmetrically, whenever the right boundary is a right child the
    /// subtree just before it is folded onto the front of `right`. Operand
    /// order always follows index order, so `combine` may be
    /// non-commutative.
    pub fn query(&self, start: usize, end: usize) -> Result<T>
    where
        T: Clone,
    {
        let len = self.len();
        if start >= end || end > len {
            return Err(Error::InvalidRange { start, end, len });
        }

        let mut lo = index::leaf(start);
        let mut hi = index::leaf(end);
        let mut left: Option<T> = None;
        let mut right: Option<T> = None;
        let mut k = 1;

        while lo < hi {
            if index::is_right_child(lo, k) {
                let node = self.node(lo)?;
                left = Some(match left {
                    Some(acc) => self.combine.combine(&acc, node),
                    None => node.clone(),
                });
                lo += k << 1;
            }
            if index::is_right_child(hi, k) {
                hi -= k << 1;
                let node = self.node(hi)?;
                right = Some(match right {
                    Some(acc) => self.combine.combine(node, &acc),
                    None => node.clone(),
                });
            }
            lo = index::parent(lo, k);
            hi = index::parent(hi, k);
            k <<= 1;
        }

        return match (left, right) {
            (Some(left), Some(right)) => Ok(self.combine.combine(&left, &right)),
            (Some(only), None) | (None, Some(only)) => Ok(only),
            (None, None) => Err(Error::InvariantViolation { slot: None }),
        };
    }

    /// Fold the elements in any Rust range form, e.g. `tree.range(2..)`.
    pub fn range<R>(&self, range: R) -> Result<T>
    where
        R: RangeBounds<usize>,
        T: Clone,
    {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len(),
        };
        return self.query(start, end);
    }

    /// Aggregates of the complete subtrees making up the forest, left to
    /// right. There is one per set bit of `len()`.
    pub fn roots(&self) -> Result<Vec<&T>> {
        let len = self.len();
        let mut roots = Vec::with_capacity(len.count_ones() as usize);
        let mut start = 0;
        for bit in (0..usize::BITS).rev() {
            let width = 1usize << bit;
            if len & width != 0 {
                roots.push(self.node((start << 1) + width)?);
                start += width;
            }
        }
        return Ok(roots);
    }

    /// Fold of every element, or `None` if the tree is empty. O(log n).
    pub fn total(&self) -> Result<Option<T>>
    where
        T: Clone,
    {
        let mut total: Option<T> = None;
        for root in self.roots()? {
            total = Some(match total {
                Some(acc) => self.combine.combine(&acc, root),
                None => root.clone(),
            });
        }
        return Ok(total);
    }

    /// Check every internal slot against the leaves it covers.
    ///
    /// Complete subtrees must hold the fold of their leaves and incomplete
    /// ones must be empty. Runs in O(n log n); meant for tests and
    /// debugging, not hot paths.
    pub fn validate(&self) -> Result<()>
    where
        T: PartialEq + Clone,
    {
        let slots = self.slots.len();
        for coord in 1..slots {
            let k = index::level(coord);
            let complete = index::is_complete(coord, k, slots);
            match (&self.slots[coord], complete) {
                (None, false) => {}
                (Some(stored), true) => {
                    let (start, end) = index::span(coord);
                    if *stored != self.fold_leaves(start, end)? {
                        return Err(Error::InvariantViolation { slot: Some(coord) });
                    }
                }
                _ => return Err(Error::InvariantViolation { slot: Some(coord) }),
            }
        }
        return Ok(());
    }

    /// Recompute every complete ancestor of `coord`, returning how many
    /// levels were rewritten.
    ///
    /// The climb stops at the first parent whose right child still has
    /// missing leaves. That parent and everything above it must stay `None`.
    fn refresh(&mut self, mut coord: usize) -> usize {
        let slots = self.slots.len();
        let mut k = 1;
        let mut levels = 0;
        while index::is_complete(index::right_of_pair(coord, k), k, slots) {
            let parent = index::parent(coord, k);
            // A missing operand clears the parent, and so every ancestor.
            let aggregate = self.fold_pair(
                index::left_of_pair(coord, k),
                index::right_of_pair(coord, k),
            );
            self.slots[parent] = aggregate;
            coord = parent;
            k <<= 1;
            levels += 1;
        }
        return levels;
    }

    fn fold_pair(&self, left: usize, right: usize) -> Option<T> {
        return match (&self.slots[left], &self.slots[right]) {
            (Some(left), Some(right)) => Some(self.combine.combine(left, right)),
            _ => None,
        };
    }

    /// Naive left-to-right fold over the leaves in `start..end`.
    fn fold_leaves(&self, start: usize, end: usize) -> Result<T>
    where
        T: Clone,
    {
        let mut acc = self.node(index::leaf(start))?.clone();
        for i in start + 1..end {
            acc = self.combine.combine(&acc, self.node(index::leaf(i))?);
        }
        return Ok(acc);
    }
}

impl<T, C: Combine<T>> Extend<T> for AggTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let values = values.into_iter();
        self.reserve(values.size_hint().0);
        for value in values {
            self.append(value);
        }
    }
}

impl<T, C> Index<usize> for AggTree<T, C> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        return match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        };
    }
}

impl<T: fmt::Debug, C> fmt::Debug for AggTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("AggTree")
            .field("len", &self.len())
            .field("slots", &self.slots)
            .finish();
    }
}

/// Iterator over the elements of an [`AggTree`].
pub struct Iter<'a, T> {
    leaves: std::iter::StepBy<std::iter::Skip<std::slice::Iter<'a, Option<T>>>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        return self.leaves.next()?.as_ref();
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return self.leaves.size_hint();
    }
}

impl<'a, T, C> IntoIterator for &'a AggTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        return self.iter();
    }
}
