//! Frozen and mutable views, their iterator, and comparisons.

mod cmp;
mod frozen;
mod iter;
mod mutable;

pub use cmp::Operand;
pub use frozen::FrozenView;
pub use iter::Iter;
pub use mutable::View;
