//! Error taxonomy for range resolution and view access.
//!
//! Every failure is synchronous and local to the call that produced it. The
//! variants are distinct so callers can match on the kind of failure rather
//! than on a message.

use core::fmt;

use thiserror::Error;

use crate::IndexRange;

/// Structural operations a [`View`](crate::View) refuses to perform.
///
/// Each of these would change the number of elements seen through the view,
/// and therefore the length of the underlying sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Delete,
    Insert,
    Append,
    Extend,
    Pop,
    Remove,
    Clear,
}

impl Operation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Operation::Delete => "delete",
            Operation::Insert => "insert",
            Operation::Append => "append",
            Operation::Extend => "extend",
            Operation::Pop => "pop",
            Operation::Remove => "remove",
            Operation::Clear => "clear",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "std", derive(miette::Diagnostic))]
pub enum ViewError {
    /// The slice step resolved to zero.
    #[cfg_attr(
        feature = "std",
        diagnostic(code(sliceview::invalid_step), help("use a positive step to walk forward or a negative one to walk backward"))
    )]
    #[error("slice step cannot be zero")]
    InvalidStep,

    /// A position outside `[0, len)`.
    #[cfg_attr(feature = "std", diagnostic(code(sliceview::index_out_of_bounds)))]
    #[error("index {index} out of range for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A pre-resolved range visits indices the sequence does not have.
    #[cfg_attr(feature = "std", diagnostic(code(sliceview::range_out_of_bounds)))]
    #[error("range {range} visits indices outside a sequence of length {len}")]
    RangeOutOfBounds { range: IndexRange, len: usize },

    /// A sliced assignment whose value count differs from the target range.
    #[cfg_attr(
        feature = "std",
        diagnostic(code(sliceview::shape_mismatch), help("supply exactly one value per target position"))
    )]
    #[error("view cannot insert or delete items: target holds {expected} items, got {found} values")]
    ShapeMismatch { expected: usize, found: usize },

    /// Ordering requested against an operand that is neither a view nor a
    /// sequence of the same element type.
    #[cfg_attr(feature = "std", diagnostic(code(sliceview::type_mismatch)))]
    #[error("ordering not supported between a view and `{found}`")]
    TypeMismatch { found: &'static str },

    /// A length-changing operation attempted on a mutable view.
    #[cfg_attr(feature = "std", diagnostic(code(sliceview::unsupported_operation)))]
    #[error("view cannot {operation} items")]
    UnsupportedOperation { operation: Operation },
}

impl ViewError {
    pub(crate) fn unsupported(operation: Operation) -> Self {
        tracing::debug!(%operation, "rejected length-changing operation");
        ViewError::UnsupportedOperation { operation }
    }
}
