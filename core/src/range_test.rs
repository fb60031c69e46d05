//! Tests for slice resolution and range composition

use super::{IndexRange, SliceArgs};
use crate::{ViewError, Vec, vec};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Walks a slice the long way: normalize negative bounds, clamp, then step
/// one index at a time.
fn model(len: usize, start: Option<isize>, stop: Option<isize>, step: isize) -> Vec<isize> {
    let len = len as isize;
    let norm = |v: isize| if v < 0 { v + len } else { v };
    let mut out = vec![];
    if step > 0 {
        let mut i = start.map_or(0, norm).max(0);
        let stop = stop.map_or(len, norm).min(len);
        while i < stop {
            out.push(i);
            i += step;
        }
    } else {
        let mut i = start.map_or(len - 1, norm).min(len - 1);
        let stop = stop.map_or(-1, norm).max(-1);
        while i > stop {
            out.push(i);
            i += step;
        }
    }
    out
}

fn triple(range: IndexRange) -> (isize, isize, isize, usize) {
    (range.start(), range.stop(), range.step(), range.len())
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_resolve_defaults() {
    assert_eq!(triple(IndexRange::resolve(20, ..).unwrap()), (0, 20, 1, 20));
    assert_eq!(triple(IndexRange::resolve(20, SliceArgs::reversed()).unwrap()), (19, -1, -1, 20));
    assert_eq!(triple(IndexRange::resolve(0, ..).unwrap()), (0, 0, 1, 0));
    assert_eq!(triple(IndexRange::resolve(0, SliceArgs::reversed()).unwrap()), (-1, -1, -1, 0));
}

#[test]
fn test_resolve_window() {
    assert_eq!(triple(IndexRange::resolve(20, 3..10).unwrap()), (3, 10, 1, 7));
    assert_eq!(triple(IndexRange::resolve(20, SliceArgs::from(3..10).step(3)).unwrap()), (3, 10, 3, 3));
}

#[test]
fn test_resolve_negative_bounds() {
    // -2.. on 7 elements starts at 5
    assert_eq!(triple(IndexRange::resolve(7, SliceArgs::from(-2..).step(-2)).unwrap()), (5, -1, -2, 3));
    assert_eq!(triple(IndexRange::resolve(7, SliceArgs::from(-1..).step(-2)).unwrap()), (6, -1, -2, 4));
    assert_eq!(triple(IndexRange::resolve(10, -3..-1).unwrap()), (7, 9, 1, 2));
    assert_eq!(triple(IndexRange::resolve(10, ..=-1).unwrap()), (0, 10, 1, 10));
    assert_eq!(triple(IndexRange::resolve(10, 2..=4).unwrap()), (2, 5, 1, 3));
}

#[test]
fn test_resolve_clamps_out_of_range() {
    assert_eq!(triple(IndexRange::resolve(5, -100..100).unwrap()), (0, 5, 1, 5));
    assert_eq!(triple(IndexRange::resolve(5, SliceArgs::from(100..-100).step(-1)).unwrap()), (4, -1, -1, 5));
    assert_eq!(triple(IndexRange::resolve(5, SliceArgs::from(-100..).step(-1)).unwrap()), (-1, -1, -1, 0));
    assert_eq!(triple(IndexRange::resolve(5, 7..9).unwrap()), (5, 5, 1, 0));
    // start past stop is empty, never negative
    assert_eq!(IndexRange::resolve(5, 4..1).unwrap().len(), 0);
    assert_eq!(IndexRange::resolve(5, SliceArgs::from(1..4).step(-1)).unwrap().len(), 0);
}

#[test]
fn test_resolve_zero_step() {
    assert_eq!(IndexRange::resolve(5, SliceArgs::full().step(0)), Err(ViewError::InvalidStep));
    assert_eq!(IndexRange::resolve(0, SliceArgs::new(Some(1), None, Some(0))), Err(ViewError::InvalidStep));
    assert_eq!(IndexRange::new(0, 3, 0), Err(ViewError::InvalidStep));
}

#[test]
fn test_resolve_extreme_steps() {
    let forward = IndexRange::resolve(5, SliceArgs::full().step(isize::MAX)).unwrap();
    assert_eq!(forward.iter().collect::<Vec<_>>(), [0]);
    let backward = IndexRange::resolve(5, SliceArgs::full().step(isize::MIN)).unwrap();
    assert_eq!(backward.iter().collect::<Vec<_>>(), [4]);
}

// ============================================================================
// Pre-resolved ranges
// ============================================================================

#[test]
fn test_new_skips_normalization() {
    let range = IndexRange::new(0, 10, 3).unwrap();
    assert_eq!(range.len(), 4);
    assert_eq!(range.iter().collect::<Vec<_>>(), [0, 3, 6, 9]);

    // Negative values are taken literally, not counted from the end.
    let range = IndexRange::new(2, -3, -1).unwrap();
    assert_eq!(range.len(), 5);
    assert_eq!(range.index(2), Some(0));
    assert_eq!(range.index(3), None);
    assert!(!range.fits(100));
}

#[test]
fn test_full() {
    let range = IndexRange::full(4);
    assert_eq!(range, IndexRange::resolve(4, ..).unwrap());
    assert!(range.fits(4));
    assert!(!range.fits(3));
}

#[test]
fn test_index_mapping() {
    let range = IndexRange::resolve(20, SliceArgs::from(3..10).step(2)).unwrap();
    assert_eq!(range.index(0), Some(3));
    assert_eq!(range.index(3), Some(9));
    assert_eq!(range.index(4), None);
    assert_eq!(range.bounds(), Some((3, 9)));

    let reversed = IndexRange::resolve(20, SliceArgs::reversed().step(-3)).unwrap();
    assert_eq!(reversed.bounds(), Some((1, 19)));
    assert_eq!(IndexRange::resolve(3, 2..2).unwrap().bounds(), None);
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn test_slice_composes_reversed_window() {
    let window = IndexRange::resolve(20, 3..10).unwrap();
    let reversed = window.slice(SliceArgs::full().step(-2)).unwrap();
    assert_eq!(triple(reversed), (9, 2, -2, 4));
    assert_eq!(reversed.iter().collect::<Vec<_>>(), [9, 7, 5, 3]);
}

#[test]
fn test_slice_resolves_against_own_length() {
    let window = IndexRange::resolve(20, 3..10).unwrap();
    // 100 clamps to the window's 7 positions, not the sequence's 20.
    let tail = window.slice(5..100).unwrap();
    assert_eq!(tail.iter().collect::<Vec<_>>(), [8, 9]);
    let target = window.slice(SliceArgs::from(-2..).step(-2)).unwrap();
    assert_eq!(target.iter().collect::<Vec<_>>(), [8, 6, 4]);
}

#[test]
fn test_slice_of_reversed() {
    let reversed = IndexRange::resolve(10, SliceArgs::reversed()).unwrap();
    let again = reversed.slice(SliceArgs::reversed()).unwrap();
    assert_eq!(again.iter().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
    assert_eq!(reversed.slice(1..3).unwrap().iter().collect::<Vec<_>>(), [8, 7]);
    assert_eq!(reversed.slice(SliceArgs::full().step(0)), Err(ViewError::InvalidStep));
}

#[test]
fn test_slice_empty() {
    let empty = IndexRange::resolve(10, 4..4).unwrap();
    let sub = empty.slice(SliceArgs::reversed()).unwrap();
    assert!(sub.is_empty());
    assert!(sub.fits(0));
}

// ============================================================================
// Iteration and rendering
// ============================================================================

#[test]
fn test_indices_double_ended() {
    let range = IndexRange::resolve(10, SliceArgs::from(1..).step(3)).unwrap();
    let mut it = range.iter();
    assert_eq!(it.len(), 3);
    assert_eq!(it.next_back(), Some(7));
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.next(), Some(4));
    assert_eq!(it.next_back(), None);
    assert_eq!(it.next(), None);
    assert_eq!(range.iter().rev().collect::<Vec<_>>(), [7, 4, 1]);
}

#[test]
fn test_display() {
    assert_eq!(IndexRange::resolve(7, SliceArgs::from(-2..).step(-2)).unwrap().to_string(), "5:-1:-2");
    assert_eq!(SliceArgs::from(3..10).to_string(), "3:10");
    assert_eq!(SliceArgs::full().to_string(), ":");
    assert_eq!(SliceArgs::new(None, Some(-1), Some(-2)).to_string(), ":-1:-2");
}

// ============================================================================
// Properties
// ============================================================================

fn arb_args() -> impl Strategy<Value = (Option<isize>, Option<isize>, isize)> {
    (
        prop::option::of(-50isize..50),
        prop::option::of(-50isize..50),
        (-7isize..=7).prop_filter("step must be nonzero", |s| *s != 0),
    )
}

proptest! {
    #[test]
    fn prop_resolve_matches_slice_semantics(len in 0usize..40, (start, stop, step) in arb_args()) {
        let range = IndexRange::resolve(len, SliceArgs::new(start, stop, Some(step))).unwrap();
        let expected = model(len, start, stop, step);
        prop_assert_eq!(range.len(), expected.len());
        prop_assert_eq!(range.iter().collect::<Vec<_>>(), expected);
        prop_assert!(range.fits(len));
    }

    #[test]
    fn prop_slice_composes(len in 0usize..40, outer in arb_args(), inner in arb_args()) {
        let (a, b, c) = outer;
        let (x, y, z) = inner;
        let composed = IndexRange::resolve(len, SliceArgs::new(a, b, Some(c)))
            .unwrap()
            .slice(SliceArgs::new(x, y, Some(z)))
            .unwrap();

        let window = model(len, a, b, c);
        let expected: Vec<isize> = model(window.len(), x, y, z)
            .into_iter()
            .map(|p| window[p as usize])
            .collect();
        prop_assert_eq!(composed.len(), expected.len());
        prop_assert_eq!(composed.iter().collect::<Vec<_>>(), expected);
        prop_assert!(composed.fits(len));
    }
}

#[test]
fn test_checked() {
    let range = IndexRange::new(0, 10, 1).unwrap();
    assert_eq!(range.checked(10), Ok(range));
    assert_eq!(range.checked(9), Err(ViewError::RangeOutOfBounds { range, len: 9 }));
    let backward = IndexRange::new(3, -2, -1).unwrap();
    assert_eq!(backward.checked(10), Err(ViewError::RangeOutOfBounds { range: backward, len: 10 }));
}
