//! Placement engine: adds fields to and removes fields from a group's grid.

mod core;

pub use core::{add_field, remove_field};
