//! Slice arguments and their resolution into canonical index ranges.
//!
//! [`SliceArgs`] is what a caller writes: an optional start, stop and step,
//! where negative start/stop count from the end. [`IndexRange`] is what a view
//! stores: the clamped `(start, stop, step)` triple plus the number of indices
//! it visits. Resolution follows half-open slice semantics, so
//! `IndexRange::resolve(n, args).len()` is always the length a slice with the
//! same arguments would have over `n` elements.

use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::ViewError;

/// Unresolved slice arguments.
///
/// Any part may be left unspecified. Rust range syntax converts into
/// `SliceArgs` with a step of one; use [`SliceArgs::step`] to add a stride:
///
/// ```
/// use sliceview_core::SliceArgs;
///
/// assert_eq!(SliceArgs::from(3..10), SliceArgs::new(Some(3), Some(10), None));
/// assert_eq!(SliceArgs::from(..).step(-2).to_string(), "::-2");
/// assert_eq!(SliceArgs::from(-2..).step(-2).to_string(), "-2::-2");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SliceArgs {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl SliceArgs {
    pub const fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// Every element, in order.
    pub const fn full() -> Self {
        Self::new(None, None, None)
    }

    /// Every element, last to first.
    pub const fn reversed() -> Self {
        Self::new(None, None, Some(-1))
    }

    /// Replaces the step, keeping start and stop.
    pub const fn step(self, step: isize) -> Self {
        Self {
            step: Some(step),
            ..self
        }
    }

    /// Resolves these arguments against a sequence of `len` elements.
    ///
    /// Returns the clamped `(start, stop, step)`. Out-of-range bounds never
    /// fail; only a zero step does.
    pub fn indices(&self, len: usize) -> Result<(isize, isize, isize), ViewError> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(ViewError::InvalidStep);
        }

        // Sequences never hold more than isize::MAX elements.
        let len = isize::try_from(len).unwrap_or(isize::MAX);
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };

        let start = self.start.map_or(if step < 0 { upper } else { lower }, clamp);
        let stop = self.stop.map_or(if step < 0 { lower } else { upper }, clamp);
        Ok((start, stop, step))
    }
}

impl fmt::Display for SliceArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{start}")?;
        }
        f.write_str(":")?;
        if let Some(stop) = self.stop {
            write!(f, "{stop}")?;
        }
        if let Some(step) = self.step {
            write!(f, ":{step}")?;
        }
        Ok(())
    }
}

impl From<Range<isize>> for SliceArgs {
    fn from(r: Range<isize>) -> Self {
        Self::new(Some(r.start), Some(r.end), None)
    }
}

impl From<RangeFrom<isize>> for SliceArgs {
    fn from(r: RangeFrom<isize>) -> Self {
        Self::new(Some(r.start), None, None)
    }
}

impl From<RangeTo<isize>> for SliceArgs {
    fn from(r: RangeTo<isize>) -> Self {
        Self::new(None, Some(r.end), None)
    }
}

impl From<RangeFull> for SliceArgs {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

impl From<RangeInclusive<isize>> for SliceArgs {
    fn from(r: RangeInclusive<isize>) -> Self {
        Self::new(Some(*r.start()), inclusive_end(*r.end()), None)
    }
}

impl From<RangeToInclusive<isize>> for SliceArgs {
    fn from(r: RangeToInclusive<isize>) -> Self {
        Self::new(None, inclusive_end(r.end), None)
    }
}

impl From<(Option<isize>, Option<isize>, Option<isize>)> for SliceArgs {
    fn from((start, stop, step): (Option<isize>, Option<isize>, Option<isize>)) -> Self {
        Self::new(start, stop, step)
    }
}

// `..=-1` runs through the last element, which no finite stop can express.
fn inclusive_end(end: isize) -> Option<isize> {
    match end {
        -1 => None,
        end => Some(end.saturating_add(1)),
    }
}

/// A canonical index range: the underlying indices a view visits, in order.
///
/// Position `p` of the range (for `p < len`) maps to `start + p * step`.
/// `stop` is exclusive and may be `-1` for a backward range that runs through
/// index zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexRange {
    start: isize,
    stop: isize,
    step: isize,
    len: usize,
}

static_assertions::assert_eq_size!(IndexRange, [usize; 4]);

impl IndexRange {
    /// Builds a range from an already resolved triple, without clamping.
    pub fn new(start: isize, stop: isize, step: isize) -> Result<Self, ViewError> {
        if step == 0 {
            return Err(ViewError::InvalidStep);
        }
        Ok(Self {
            start,
            stop,
            step,
            len: span_len(start, stop, step),
        })
    }

    /// The identity range over `len` elements.
    pub fn full(len: usize) -> Self {
        Self {
            start: 0,
            stop: isize::try_from(len).unwrap_or(isize::MAX),
            step: 1,
            len,
        }
    }

    /// Resolves slice arguments against a sequence of `len` elements.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceview_core::{IndexRange, SliceArgs};
    ///
    /// let range = IndexRange::resolve(20, 3..10).unwrap();
    /// assert_eq!((range.start(), range.stop(), range.step(), range.len()), (3, 10, 1, 7));
    ///
    /// let reversed = IndexRange::resolve(5, SliceArgs::reversed()).unwrap();
    /// assert_eq!(reversed.iter().collect::<Vec<_>>(), [4, 3, 2, 1, 0]);
    /// ```
    pub fn resolve(len: usize, args: impl Into<SliceArgs>) -> Result<Self, ViewError> {
        let args = args.into();
        let (start, stop, step) = args.indices(len)?;
        let range = Self {
            start,
            stop,
            step,
            len: span_len(start, stop, step),
        };
        tracing::trace!(%args, len, %range, count = range.len, "resolved slice");
        Ok(range)
    }

    /// Slices this range's own positions and maps the result back onto the
    /// underlying indices.
    ///
    /// The arguments resolve against `self.len()`, never against the length of
    /// whatever sequence the range was built for.
    pub fn slice(&self, args: impl Into<SliceArgs>) -> Result<Self, ViewError> {
        let args = args.into();
        let (start, stop, step) = args.indices(self.len)?;
        let composed = Self {
            start: saturate(self.underlying(start as i128)),
            stop: saturate(self.underlying(stop as i128)),
            step: saturate(self.step as i128 * step as i128),
            len: span_len(start, stop, step),
        };
        tracing::trace!(outer = %self, %args, %composed, "composed slice");
        Ok(composed)
    }

    pub const fn start(&self) -> isize {
        self.start
    }

    pub const fn stop(&self) -> isize {
        self.stop
    }

    pub const fn step(&self) -> isize {
        self.step
    }

    /// Number of indices visited.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maps position `p` to its underlying index.
    ///
    /// Returns `None` when `p` is past the end, or when a range built with
    /// [`IndexRange::new`] maps it below zero.
    pub fn index(&self, p: usize) -> Option<usize> {
        if p >= self.len {
            return None;
        }
        usize::try_from(self.underlying(p as i128)).ok()
    }

    /// Smallest and largest visited index, or `None` for an empty range.
    pub fn bounds(&self) -> Option<(i128, i128)> {
        if self.len == 0 {
            return None;
        }
        let first = self.start as i128;
        let last = self.underlying(self.len as i128 - 1);
        Some((first.min(last), first.max(last)))
    }

    /// Whether every visited index is a valid index into `seq_len` elements.
    pub fn fits(&self, seq_len: usize) -> bool {
        match self.bounds() {
            None => true,
            Some((lo, hi)) => lo >= 0 && hi < seq_len as i128,
        }
    }

    /// Returns this range if it [fits](Self::fits) `seq_len` elements.
    pub fn checked(self, seq_len: usize) -> Result<Self, ViewError> {
        if self.fits(seq_len) {
            Ok(self)
        } else {
            Err(ViewError::RangeOutOfBounds {
                range: self,
                len: seq_len,
            })
        }
    }

    /// The visited indices, in range order.
    pub fn iter(&self) -> Indices {
        Indices {
            front: self.start,
            step: self.step,
            remaining: self.len,
        }
    }

    // Computed in i128 so that ranges built by `new` with extreme bounds cannot overflow.
    fn underlying(&self, position: i128) -> i128 {
        self.start as i128 + position * self.step as i128
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.stop, self.step)
    }
}

impl IntoIterator for IndexRange {
    type Item = isize;
    type IntoIter = Indices;

    fn into_iter(self) -> Indices {
        self.iter()
    }
}

impl IntoIterator for &IndexRange {
    type Item = isize;
    type IntoIter = Indices;

    fn into_iter(self) -> Indices {
        self.iter()
    }
}

/// Iterator over the indices an [`IndexRange`] visits.
#[derive(Debug, Clone)]
pub struct Indices {
    front: isize,
    step: isize,
    remaining: usize,
}

impl Iterator for Indices {
    type Item = isize;

    fn next(&mut self) -> Option<isize> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.front;
        self.remaining -= 1;
        // Past the last element the value is never read.
        self.front = self.front.wrapping_add(self.step);
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Indices {
    fn next_back(&mut self) -> Option<isize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let back = self.front as i128 + self.remaining as i128 * self.step as i128;
        Some(saturate(back))
    }
}

impl ExactSizeIterator for Indices {}

impl FusedIterator for Indices {}

/// Number of indices visited stepping from `start` toward `stop` (exclusive).
fn span_len(start: isize, stop: isize, step: isize) -> usize {
    let stride = step.unsigned_abs();
    if step > 0 && start < stop {
        (stop.abs_diff(start) - 1) / stride + 1
    } else if step < 0 && stop < start {
        (start.abs_diff(stop) - 1) / stride + 1
    } else {
        0
    }
}

fn saturate(value: i128) -> isize {
    value.clamp(isize::MIN as i128, isize::MAX as i128) as isize
}

#[cfg(test)]
#[path = "range_test.rs"]
mod range_test;
