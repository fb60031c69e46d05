use core::fmt;
use core::ops::Index;

use crate::view::cmp::elements;
use crate::{IndexRange, Iter, Sequence, SequenceMut, SliceArgs, Vec, ViewError};

/// A read-only window onto a borrowed sequence.
///
/// Holds a shared borrow of the sequence plus an [`IndexRange`]; position `p`
/// reads the underlying element at `range.start() + p * range.step()`. Any
/// number of frozen views may borrow the same sequence at once, and copying a
/// view is as cheap as copying the reference.
///
/// # Example
///
/// ```
/// use sliceview_core::{FrozenView, SliceArgs};
///
/// let data: Vec<i32> = (10..30).collect();
/// let window = FrozenView::new(&data, 3..10).unwrap();
/// assert_eq!(window, [13, 14, 15, 16, 17, 18, 19]);
///
/// let reversed = window.slice(SliceArgs::full().step(-2)).unwrap();
/// assert_eq!(reversed, [19, 17, 15, 13]);
/// assert_eq!(reversed.to_string(), "[19, 17, 15, 13]");
/// ```
pub struct FrozenView<'a, S: ?Sized> {
    seq: &'a S,
    range: IndexRange,
}

static_assertions::assert_impl_all!(FrozenView<'static, [i32]>: Copy, Send, Sync);
static_assertions::assert_not_impl_any!(FrozenView<'static, Vec<i32>>: core::ops::IndexMut<usize>, SequenceMut);

// --- Manual Clone/Copy to avoid S: Clone bounds ---

impl<S: ?Sized> Clone for FrozenView<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for FrozenView<'_, S> {}

// --- Construction ---

impl<'a, S: Sequence + ?Sized> FrozenView<'a, S> {
    /// Creates a view of `seq` selected by slice arguments.
    ///
    /// Bounds resolve against the sequence's current length and clamp; only a
    /// zero step fails.
    pub fn new(seq: &'a S, args: impl Into<SliceArgs>) -> Result<Self, ViewError> {
        let range = IndexRange::resolve(seq.len(), args)?;
        Ok(Self::from_parts(seq, range))
    }

    /// Creates a view of every element of `seq`.
    pub fn full(seq: &'a S) -> Self {
        Self::from_parts(seq, IndexRange::full(seq.len()))
    }

    /// Creates a view over an already resolved range.
    ///
    /// The range is used as is, without re-resolving it against the sequence.
    /// It must only visit indices the sequence has, otherwise this fails with
    /// [`ViewError::RangeOutOfBounds`].
    pub fn with_range(seq: &'a S, range: IndexRange) -> Result<Self, ViewError> {
        let range = range.checked(seq.len())?;
        Ok(Self::from_parts(seq, range))
    }

    pub(crate) fn from_parts(seq: &'a S, range: IndexRange) -> Self {
        tracing::trace!(%range, seq_len = seq.len(), "frozen view");
        FrozenView { seq, range }
    }
}

// --- Reading ---

impl<'a, S: Sequence + ?Sized> FrozenView<'a, S> {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn range(&self) -> IndexRange {
        self.range
    }

    /// The borrowed sequence.
    pub fn sequence(&self) -> &'a S {
        self.seq
    }

    /// Returns the element at position `p`.
    ///
    /// Fails with [`ViewError::IndexOutOfBounds`] unless `p < self.len()`.
    pub fn get(&self, p: usize) -> Result<&'a S::Item, ViewError> {
        let seq = self.seq;
        self.range
            .index(p)
            .and_then(|index| seq.get(index))
            .ok_or(ViewError::IndexOutOfBounds { index: p, len: self.len() })
    }

    pub fn first(&self) -> Option<&'a S::Item> {
        self.get(0).ok()
    }

    pub fn last(&self) -> Option<&'a S::Item> {
        self.len().checked_sub(1).and_then(|p| self.get(p).ok())
    }

    /// Slices this view's own positions into a new view of the same sequence.
    ///
    /// The arguments resolve against `self.len()`, and the result composes
    /// with this view's range, so re-slicing never touches the sequence.
    pub fn slice(&self, args: impl Into<SliceArgs>) -> Result<FrozenView<'a, S>, ViewError> {
        let range = self.range.slice(args)?;
        Ok(Self::from_parts(self.seq, range))
    }

    pub fn iter(&self) -> Iter<'a, S> {
        Iter::new(self.seq, self.range)
    }

    /// Copies the viewed elements into a new `Vec`.
    pub fn to_vec(&self) -> Vec<S::Item>
    where
        S::Item: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn contains(&self, value: &S::Item) -> bool
    where
        S::Item: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: &S::Item) -> Option<usize>
    where
        S::Item: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Number of elements equal to `value`.
    pub fn occurrences(&self, value: &S::Item) -> usize
    where
        S::Item: PartialEq,
    {
        self.iter().filter(|item| *item == value).count()
    }
}

impl<S: Sequence + ?Sized> Sequence for FrozenView<'_, S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.range.len()
    }

    fn get(&self, index: usize) -> Option<&S::Item> {
        FrozenView::get(self, index).ok()
    }
}

/// # Panics
///
/// Panics if `p` is out of bounds, like slice indexing.
impl<S: Sequence + ?Sized> Index<usize> for FrozenView<'_, S> {
    type Output = S::Item;

    fn index(&self, p: usize) -> &S::Item {
        match FrozenView::get(self, p) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, S: Sequence + ?Sized> IntoIterator for FrozenView<'a, S> {
    type Item = &'a S::Item;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Iter<'a, S> {
        self.iter()
    }
}

impl<'a, S: Sequence + ?Sized> IntoIterator for &FrozenView<'a, S> {
    type Item = &'a S::Item;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Iter<'a, S> {
        self.iter()
    }
}

// --- Rendering ---

/// Renders the viewed elements as a list.
impl<S> fmt::Display for FrozenView<'_, S>
where
    S: Sequence + ?Sized,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(elements(self)).finish()
    }
}

/// Renders the borrowed sequence and the resolved `start, stop, step`.
impl<S: fmt::Debug + ?Sized> fmt::Debug for FrozenView<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_diagnostic(f, "FrozenView", self.seq, self.range)
    }
}

pub(crate) fn write_diagnostic<S: fmt::Debug + ?Sized>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    seq: &S,
    range: IndexRange,
) -> fmt::Result {
    write!(f, "{name}({seq:?}, {}, {}, {})", range.start(), range.stop(), range.step())
}

#[cfg(test)]
#[path = "frozen_test.rs"]
mod frozen_test;
