#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Index-mapping views over borrowed sequences.
//!
//! A view is a lazily-evaluated window onto an existing ordered sequence. It
//! never owns or copies the elements; it holds a borrow plus an [`IndexRange`]
//! that translates view positions into sequence indices. Ranges support any
//! start/stop/step triple, including negative steps (reversed views), and
//! slicing a view composes ranges instead of re-resolving against the
//! sequence.
//!
//! Two kinds exist:
//!
//! - [`FrozenView`] borrows the sequence immutably and can be copied freely.
//! - [`View`] borrows the sequence exclusively and adds shape-preserving
//!   writes. Anything that would change the number of elements is rejected
//!   with [`ViewError::UnsupportedOperation`] or [`ViewError::ShapeMismatch`].

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly so that downstream crates agree on the alloc types.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{collections::VecDeque, format, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod error;
pub mod range;
pub mod traits;
pub mod view;

pub use error::{Operation, ViewError};
pub use range::{IndexRange, Indices, SliceArgs};
pub use traits::{Sequence, SequenceMut};
pub use view::{FrozenView, Iter, Operand, View};
