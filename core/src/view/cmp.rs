//! Equality and lexicographic ordering between views and sequences.
//!
//! Both are defined over [`Sequence`], so a view compares against another view
//! (of any sequence type), a slice, an array, a `Vec` or a `VecDeque`, as long
//! as the element types compare. Equality checks lengths before looking at any
//! element. Ordering is lexicographic: the first differing pair decides, and a
//! proper prefix sorts before the longer sequence.

use core::cmp::Ordering;

use crate::{FrozenView, Sequence, Vec, View, ViewError};

/// The elements of a sequence, in order.
pub(crate) fn elements<S: Sequence + ?Sized>(seq: &S) -> impl Iterator<Item = &S::Item> {
    (0..seq.len()).map_while(move |i| seq.get(i))
}

pub(crate) fn seq_eq<A, B>(a: &A, b: &B) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    A::Item: PartialEq<B::Item>,
{
    a.len() == b.len() && elements(a).eq(elements(b))
}

pub(crate) fn seq_partial_cmp<A, B>(a: &A, b: &B) -> Option<Ordering>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    A::Item: PartialOrd<B::Item>,
{
    elements(a).partial_cmp(elements(b))
}

pub(crate) fn seq_cmp<A, B>(a: &A, b: &B) -> Ordering
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: Ord,
{
    elements(a).cmp(elements(b))
}

/// The right-hand side of a comparison whose type is only known at runtime.
///
/// Only two shapes compare against a view: another view over elements of the
/// same type, or a concrete sequence of that type. Everything else is
/// [`Operand::Foreign`], which is never equal to a view and cannot be ordered
/// against one.
///
/// ```
/// use sliceview_core::{FrozenView, Operand, ViewError};
///
/// let data = vec![3, 1, 2];
/// let view = FrozenView::full(&data);
///
/// assert!(view.eq_operand(Operand::from(&data)));
/// assert!(!view.eq_operand(Operand::foreign::<str>()));
/// assert!(matches!(
///     view.cmp_operand(Operand::foreign::<str>()),
///     Err(ViewError::TypeMismatch { .. })
/// ));
/// ```
pub enum Operand<'o, T> {
    View(&'o dyn Sequence<Item = T>),
    Sequence(&'o [T]),
    Foreign { type_name: &'static str },
}

impl<T> Operand<'_, T> {
    /// An operand of some other type `X`.
    pub fn foreign<X: ?Sized>() -> Self {
        Operand::Foreign {
            type_name: core::any::type_name::<X>(),
        }
    }
}

impl<T> Clone for Operand<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Operand<'_, T> {}

impl<T> core::fmt::Debug for Operand<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operand::View(view) => f.debug_tuple("View").field(&view.len()).finish(),
            Operand::Sequence(seq) => f.debug_tuple("Sequence").field(&seq.len()).finish(),
            Operand::Foreign { type_name } => f.debug_struct("Foreign").field("type_name", type_name).finish(),
        }
    }
}

impl<'o, 'a: 'o, S, T: 'o> From<&'o FrozenView<'a, S>> for Operand<'o, T>
where
    S: Sequence<Item = T> + ?Sized + 'o,
{
    fn from(view: &'o FrozenView<'a, S>) -> Self {
        Operand::View(view)
    }
}

impl<'o, 'a: 'o, S, T: 'o> From<&'o View<'a, S>> for Operand<'o, T>
where
    S: Sequence<Item = T> + ?Sized + 'o,
{
    fn from(view: &'o View<'a, S>) -> Self {
        Operand::View(view)
    }
}

impl<'o, T> From<&'o [T]> for Operand<'o, T> {
    fn from(seq: &'o [T]) -> Self {
        Operand::Sequence(seq)
    }
}

impl<'o, T, const N: usize> From<&'o [T; N]> for Operand<'o, T> {
    fn from(seq: &'o [T; N]) -> Self {
        Operand::Sequence(seq)
    }
}

impl<'o, T> From<&'o Vec<T>> for Operand<'o, T> {
    fn from(seq: &'o Vec<T>) -> Self {
        Operand::Sequence(seq)
    }
}

impl<'a, S: Sequence + ?Sized> FrozenView<'a, S> {
    /// Equality against a runtime operand. Never fails: a foreign operand is
    /// simply unequal.
    pub fn eq_operand(&self, other: Operand<'_, S::Item>) -> bool
    where
        S::Item: PartialEq,
    {
        match other {
            Operand::View(view) => seq_eq(self, view),
            Operand::Sequence(seq) => seq_eq(self, seq),
            Operand::Foreign { .. } => false,
        }
    }

    /// Lexicographic ordering against a runtime operand.
    ///
    /// Fails with [`ViewError::TypeMismatch`] for a foreign operand.
    pub fn cmp_operand(&self, other: Operand<'_, S::Item>) -> Result<Ordering, ViewError>
    where
        S::Item: Ord,
    {
        match other {
            Operand::View(view) => Ok(seq_cmp(self, view)),
            Operand::Sequence(seq) => Ok(seq_cmp(self, seq)),
            Operand::Foreign { type_name } => Err(ViewError::TypeMismatch { found: type_name }),
        }
    }
}

macro_rules! impl_view_cmp {
    ($view:ident) => {
        impl<S, O> PartialEq<O> for $view<'_, S>
        where
            S: Sequence + ?Sized,
            O: Sequence + ?Sized,
            S::Item: PartialEq<O::Item>,
        {
            fn eq(&self, other: &O) -> bool {
                seq_eq(self, other)
            }
        }

        impl<S> Eq for $view<'_, S>
        where
            S: Sequence + ?Sized,
            S::Item: Eq,
        {
        }

        impl<S, O> PartialOrd<O> for $view<'_, S>
        where
            S: Sequence + ?Sized,
            O: Sequence + ?Sized,
            S::Item: PartialOrd<O::Item>,
        {
            fn partial_cmp(&self, other: &O) -> Option<Ordering> {
                seq_partial_cmp(self, other)
            }
        }

        impl<S> Ord for $view<'_, S>
        where
            S: Sequence + ?Sized,
            S::Item: Ord,
        {
            fn cmp(&self, other: &Self) -> Ordering {
                seq_cmp(self, other)
            }
        }

        impl<S, T> PartialEq<$view<'_, S>> for [T]
        where
            S: Sequence + ?Sized,
            T: PartialEq<S::Item>,
        {
            fn eq(&self, other: &$view<'_, S>) -> bool {
                seq_eq(self, other)
            }
        }

        impl<S, T, const N: usize> PartialEq<$view<'_, S>> for [T; N]
        where
            S: Sequence + ?Sized,
            T: PartialEq<S::Item>,
        {
            fn eq(&self, other: &$view<'_, S>) -> bool {
                seq_eq(self, other)
            }
        }

        impl<S, T> PartialEq<$view<'_, S>> for Vec<T>
        where
            S: Sequence + ?Sized,
            T: PartialEq<S::Item>,
        {
            fn eq(&self, other: &$view<'_, S>) -> bool {
                seq_eq(self, other)
            }
        }

        impl<S, T> PartialOrd<$view<'_, S>> for Vec<T>
        where
            S: Sequence + ?Sized,
            T: PartialOrd<S::Item>,
        {
            fn partial_cmp(&self, other: &$view<'_, S>) -> Option<Ordering> {
                seq_partial_cmp(self, other)
            }
        }
    };
}

impl_view_cmp!(FrozenView);
impl_view_cmp!(View);
