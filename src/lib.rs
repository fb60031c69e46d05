//! Sliceview - lazily evaluated windows onto borrowed sequences
//!
//! # Overview
//!
//! A view maps its own positions onto the indices of an existing sequence
//! through a `start:stop:step` range, without owning or copying any element.
//! Common use cases include:
//!
//! - Walking part of a buffer backwards or with a stride
//! - Handing out a sub-range of a `Vec` to code that must not resize it
//! - Re-slicing a window repeatedly without touching the data
//!
//! # Quick Start
//!
//! ```
//! use sliceview::{FrozenView, SliceArgs};
//!
//! let data: Vec<i32> = (10..30).collect();
//!
//! // A window over indices 3..10
//! let window = FrozenView::new(&data, 3..10).unwrap();
//! assert_eq!(window.len(), 7);
//!
//! // Every other element of the window, last to first
//! let reversed = window.slice(SliceArgs::full().step(-2)).unwrap();
//! assert_eq!(reversed, [19, 17, 15, 13]);
//! ```
//!
//! # Writing Through a View
//!
//! A [`View`] borrows its sequence exclusively and writes through to it, but
//! never changes how many elements the sequence holds:
//!
//! ```
//! use sliceview::{Operation, SliceArgs, View, ViewError};
//!
//! let mut data: Vec<i32> = (10..30).collect();
//! let mut view = View::new(&mut data, 3..10).unwrap();
//!
//! view[0] = 0;
//! view.set_slice(SliceArgs::from(-2..).step(-2), [1, 2, 3]).unwrap();
//!
//! // Wrong number of values
//! assert_eq!(
//!     view.set_slice(SliceArgs::from(-1..).step(-2), [1, 2, 3]),
//!     Err(ViewError::ShapeMismatch { expected: 4, found: 3 })
//! );
//! // Anything that would resize
//! assert_eq!(
//!     view.insert(0, 99),
//!     Err(ViewError::UnsupportedOperation { operation: Operation::Insert })
//! );
//!
//! assert_eq!(data[..10], [10, 11, 12, 0, 3, 15, 2, 17, 1, 19]);
//! ```

// Error rendering utilities
#[cfg(feature = "std")]
pub mod error_renderer;
#[cfg(feature = "std")]
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export public API from sliceview_core
pub use sliceview_core::{
    FrozenView, IndexRange, Indices, Iter, Operand, Operation, Sequence, SequenceMut, SliceArgs,
    View, ViewError,
};
pub use sliceview_core::{range, traits};
