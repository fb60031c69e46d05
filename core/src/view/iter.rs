use core::fmt;
use core::iter::FusedIterator;

use crate::{IndexRange, Sequence};

/// Iterator over the elements of a view, in view order.
///
/// Created by [`FrozenView::iter`](crate::FrozenView::iter) and
/// [`View::iter`](crate::View::iter).
pub struct Iter<'a, S: ?Sized> {
    seq: &'a S,
    range: IndexRange,
    front: usize,
    back: usize,
}

impl<'a, S: Sequence + ?Sized> Iter<'a, S> {
    pub(crate) fn new(seq: &'a S, range: IndexRange) -> Self {
        Iter {
            seq,
            range,
            front: 0,
            back: range.len(),
        }
    }

    fn element(&self, p: usize) -> Option<&'a S::Item> {
        let seq = self.seq;
        self.range.index(p).and_then(|index| seq.get(index))
    }
}

impl<S: ?Sized> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Iter {
            seq: self.seq,
            range: self.range,
            front: self.front,
            back: self.back,
        }
    }
}

impl<S: ?Sized> fmt::Debug for Iter<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("range", &self.range)
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

impl<'a, S: Sequence + ?Sized> Iterator for Iter<'a, S> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<&'a S::Item> {
        if self.front == self.back {
            return None;
        }
        let p = self.front;
        self.front += 1;
        self.element(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<&'a S::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<S: Sequence + ?Sized> DoubleEndedIterator for Iter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.element(self.back)
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for Iter<'_, S> {}

impl<S: Sequence + ?Sized> FusedIterator for Iter<'_, S> {}
