//! Reorder engine: drag repositioning, neighbour swaps and row promotion.
//!
//! All operations work on one group's entries and finish by repacking. Invalid
//! targets leave the input untouched.

mod core;

pub use core::{move_horizontal, move_vertical, reposition};
