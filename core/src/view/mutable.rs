use core::fmt;
use core::ops::{Index, IndexMut};

use crate::view::cmp::elements;
use crate::view::frozen::write_diagnostic;
use crate::{FrozenView, IndexRange, Iter, Operation, Sequence, SequenceMut, SliceArgs, Vec, ViewError};

/// A writable window onto an exclusively borrowed sequence.
///
/// Reads behave exactly like [`FrozenView`]. Writes go through to the
/// sequence at the mapped index, but never change how many elements there
/// are: sliced assignment must supply exactly one value per target position,
/// and the structural operations (`delete`, `insert`, `append`, `extend`,
/// `pop`, `remove`, `clear`) always fail with
/// [`ViewError::UnsupportedOperation`].
///
/// # Example
///
/// ```
/// use sliceview_core::{SliceArgs, View, ViewError};
///
/// let mut data: Vec<i32> = (10..30).collect();
/// let mut view = View::new(&mut data, 3..10).unwrap();
///
/// view.set(0, 0).unwrap();
/// view.set_slice(SliceArgs::from(-2..).step(-2), [1, 2, 3]).unwrap();
/// assert!(matches!(
///     view.set_slice(SliceArgs::from(-1..).step(-2), [1, 2, 3]),
///     Err(ViewError::ShapeMismatch { expected: 4, found: 3 })
/// ));
///
/// assert_eq!(data[..10], [10, 11, 12, 0, 3, 15, 2, 17, 1, 19]);
/// ```
pub struct View<'a, S: ?Sized> {
    seq: &'a mut S,
    range: IndexRange,
}

static_assertions::assert_impl_all!(View<'static, [i32]>: Send, Sync);
static_assertions::assert_not_impl_any!(View<'static, Vec<i32>>: Clone, Copy);

// --- Construction ---

impl<'a, S: Sequence + ?Sized> View<'a, S> {
    /// Creates a view of `seq` selected by slice arguments.
    pub fn new(seq: &'a mut S, args: impl Into<SliceArgs>) -> Result<Self, ViewError> {
        let range = IndexRange::resolve(seq.len(), args)?;
        Ok(Self::from_parts(seq, range))
    }

    /// Creates a view of every element of `seq`.
    pub fn full(seq: &'a mut S) -> Self {
        let range = IndexRange::full(seq.len());
        Self::from_parts(seq, range)
    }

    /// Creates a view over an already resolved range.
    ///
    /// Fails with [`ViewError::RangeOutOfBounds`] if the range visits an
    /// index the sequence does not have.
    pub fn with_range(seq: &'a mut S, range: IndexRange) -> Result<Self, ViewError> {
        let range = range.checked(seq.len())?;
        Ok(Self::from_parts(seq, range))
    }

    fn from_parts(seq: &'a mut S, range: IndexRange) -> Self {
        tracing::trace!(%range, seq_len = seq.len(), "mutable view");
        View { seq, range }
    }
}

// --- Reading ---

impl<'a, S: Sequence + ?Sized> View<'a, S> {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn range(&self) -> IndexRange {
        self.range
    }

    /// Re-borrows this view as a read-only one over the same range.
    pub fn as_frozen(&self) -> FrozenView<'_, S> {
        FrozenView::from_parts(&*self.seq, self.range)
    }

    /// Gives up write access, keeping the full borrow.
    pub fn into_frozen(self) -> FrozenView<'a, S> {
        FrozenView::from_parts(self.seq, self.range)
    }

    pub fn get(&self, p: usize) -> Result<&S::Item, ViewError> {
        self.as_frozen().get(p)
    }

    pub fn first(&self) -> Option<&S::Item> {
        self.as_frozen().first()
    }

    pub fn last(&self) -> Option<&S::Item> {
        self.as_frozen().last()
    }

    /// A read-only sub-view; see [`FrozenView::slice`].
    pub fn slice(&self, args: impl Into<SliceArgs>) -> Result<FrozenView<'_, S>, ViewError> {
        self.as_frozen().slice(args)
    }

    pub fn iter(&self) -> Iter<'_, S> {
        Iter::new(&*self.seq, self.range)
    }

    pub fn to_vec(&self) -> Vec<S::Item>
    where
        S::Item: Clone,
    {
        self.as_frozen().to_vec()
    }

    pub fn contains(&self, value: &S::Item) -> bool
    where
        S::Item: PartialEq,
    {
        self.as_frozen().contains(value)
    }

    pub fn index_of(&self, value: &S::Item) -> Option<usize>
    where
        S::Item: PartialEq,
    {
        self.as_frozen().index_of(value)
    }

    pub fn occurrences(&self, value: &S::Item) -> usize
    where
        S::Item: PartialEq,
    {
        self.as_frozen().occurrences(value)
    }
}

// --- Length-changing operations ---
//
// These exist so that callers get a specific error instead of a missing
// method. None of them touches the sequence.

impl<S: Sequence + ?Sized> View<'_, S> {
    pub fn delete(&mut self, _p: usize) -> Result<(), ViewError> {
        Err(ViewError::unsupported(Operation::Delete))
    }

    pub fn insert(&mut self, _p: usize, _value: S::Item) -> Result<(), ViewError> {
        Err(ViewError::unsupported(Operation::Insert))
    }

    pub fn append(&mut self, _value: S::Item) -> Result<(), ViewError> {
        Err(ViewError::unsupported(Operation::Append))
    }

    pub fn extend<I: IntoIterator<Item = S::Item>>(&mut self, _values: I) -> Result<(), ViewError> {
        Err(ViewError::unsupported(Operation::Extend))
    }

    pub fn pop(&mut self) -> Result<S::Item, ViewError> {
        Err(ViewError::unsupported(Operation::Pop))
    }

    pub fn remove(&mut self, _value: &S::Item) -> Result<(), ViewError> {
        Err(ViewError::unsupported(Operation::Remove))
    }

    pub fn clear(&mut self) -> Result<(), ViewError> {
        Err(ViewError::unsupported(Operation::Clear))
    }
}

// --- Writing ---

impl<'a, S: SequenceMut + ?Sized> View<'a, S> {
    pub fn get_mut(&mut self, p: usize) -> Result<&mut S::Item, ViewError> {
        let len = self.len();
        self.range
            .index(p)
            .and_then(|index| self.seq.get_mut(index))
            .ok_or(ViewError::IndexOutOfBounds { index: p, len })
    }

    /// Overwrites the element at position `p`.
    pub fn set(&mut self, p: usize, value: S::Item) -> Result<(), ViewError> {
        *self.get_mut(p)? = value;
        Ok(())
    }

    /// Overwrites the positions selected by `args`, in range order.
    ///
    /// `values` must yield exactly as many items as the selection holds,
    /// otherwise this fails with [`ViewError::ShapeMismatch`] before writing
    /// anything.
    pub fn set_slice(
        &mut self,
        args: impl Into<SliceArgs>,
        values: impl IntoIterator<Item = S::Item, IntoIter: ExactSizeIterator>,
    ) -> Result<(), ViewError> {
        let target = self.range.slice(args)?;
        let values = values.into_iter();
        if values.len() != target.len() {
            tracing::debug!(
                %target,
                expected = target.len(),
                found = values.len(),
                "rejected sliced assignment"
            );
            return Err(ViewError::ShapeMismatch {
                expected: target.len(),
                found: values.len(),
            });
        }

        let seq_len = self.seq.len();
        for (p, value) in values.enumerate() {
            let slot = target
                .index(p)
                .and_then(|index| self.seq.get_mut(index))
                .ok_or(ViewError::RangeOutOfBounds { range: target, len: seq_len })?;
            *slot = value;
        }
        Ok(())
    }

    /// Exchanges the elements at positions `a` and `b`.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), ViewError> {
        let i = self.underlying(a)?;
        let j = self.underlying(b)?;
        self.seq.swap(i, j);
        Ok(())
    }

    /// Reverses the viewed elements in place.
    ///
    /// Elements of the sequence outside the view stay where they are.
    pub fn reverse(&mut self) {
        let len = self.len();
        for p in 0..len / 2 {
            if let (Some(i), Some(j)) = (self.range.index(p), self.range.index(len - 1 - p)) {
                self.seq.swap(i, j);
            }
        }
    }

    /// A writable sub-view that re-borrows this one.
    pub fn slice_mut(&mut self, args: impl Into<SliceArgs>) -> Result<View<'_, S>, ViewError> {
        let range = self.range.slice(args)?;
        Ok(View::from_parts(&mut *self.seq, range))
    }

    /// Narrows this view to a writable sub-view, keeping the full borrow.
    pub fn into_slice(self, args: impl Into<SliceArgs>) -> Result<View<'a, S>, ViewError> {
        let range = self.range.slice(args)?;
        Ok(View::from_parts(self.seq, range))
    }

    fn underlying(&self, p: usize) -> Result<usize, ViewError> {
        self.range.index(p).ok_or(ViewError::IndexOutOfBounds {
            index: p,
            len: self.len(),
        })
    }
}

impl<S: Sequence + ?Sized> Sequence for View<'_, S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.range.len()
    }

    fn get(&self, index: usize) -> Option<&S::Item> {
        View::get(self, index).ok()
    }
}

impl<S: SequenceMut + ?Sized> SequenceMut for View<'_, S> {
    fn get_mut(&mut self, index: usize) -> Option<&mut S::Item> {
        View::get_mut(self, index).ok()
    }

    fn swap(&mut self, a: usize, b: usize) {
        if let Err(err) = View::swap(self, a, b) {
            panic!("{err}");
        }
    }
}

/// # Panics
///
/// Panics if `p` is out of bounds, like slice indexing.
impl<S: Sequence + ?Sized> Index<usize> for View<'_, S> {
    type Output = S::Item;

    fn index(&self, p: usize) -> &S::Item {
        match View::get(self, p) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

/// # Panics
///
/// Panics if `p` is out of bounds, like slice indexing.
impl<S: SequenceMut + ?Sized> IndexMut<usize> for View<'_, S> {
    fn index_mut(&mut self, p: usize) -> &mut S::Item {
        match View::get_mut(self, p) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'v, S: Sequence + ?Sized> IntoIterator for &'v View<'_, S> {
    type Item = &'v S::Item;
    type IntoIter = Iter<'v, S>;

    fn into_iter(self) -> Iter<'v, S> {
        self.iter()
    }
}

impl<S> fmt::Display for View<'_, S>
where
    S: Sequence + ?Sized,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(elements(self)).finish()
    }
}

impl<S: fmt::Debug + ?Sized> fmt::Debug for View<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_diagnostic(f, "View", &*self.seq, self.range)
    }
}

#[cfg(test)]
#[path = "mutable_test.rs"]
mod mutable_test;
