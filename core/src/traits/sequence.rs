//! The collection protocol a view reads and writes through.

use crate::{Vec, VecDeque};

/// An indexable, length-bearing, ordered collection.
///
/// This is everything a [`FrozenView`](crate::FrozenView) needs from the
/// sequence it borrows. The trait is object safe, so `dyn Sequence<Item = T>`
/// can stand in for "any view or sequence of `T`".
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A [`Sequence`] whose elements can be replaced in place.
///
/// Nothing here changes the length: a [`View`](crate::View) only ever needs
/// to overwrite or exchange existing elements.
pub trait SequenceMut: Sequence {
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Exchanges two elements.
    ///
    /// Callers guarantee both indices are in bounds; implementations may panic
    /// otherwise, as [`slice::swap`] does.
    fn swap(&mut self, a: usize, b: usize);
}

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> SequenceMut for [T] {
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T, const N: usize> SequenceMut for [T; N] {
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> SequenceMut for Vec<T> {
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

impl<T> SequenceMut for VecDeque<T> {
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }

    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec;

    fn total<S: Sequence<Item = i32> + ?Sized>(seq: &S) -> i32 {
        (0..seq.len()).filter_map(|i| seq.get(i)).sum()
    }

    #[test]
    fn sequences_agree() {
        let v = vec![1, 2, 3];
        let a = [1, 2, 3];
        let d: VecDeque<i32> = v.iter().copied().collect();
        assert_eq!(total(&v), 6);
        assert_eq!(total(&a), 6);
        assert_eq!(total(v.as_slice()), 6);
        assert_eq!(total(&d), 6);
        assert_eq!(Sequence::get(&d, 3), None);
        assert!(Sequence::is_empty(&Vec::<i32>::new()));
    }

    #[test]
    fn swap_and_write() {
        let mut d: VecDeque<i32> = (0..4).collect();
        SequenceMut::swap(&mut d, 0, 3);
        *SequenceMut::get_mut(&mut d, 1).unwrap() = 9;
        assert_eq!(d, [3, 9, 2, 0]);
    }
}
