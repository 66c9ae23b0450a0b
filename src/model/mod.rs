//! Data model shared by every allocator module.
//!
//! Downstream crates import the entry and identity types from here while the
//! definitions live in the private `core` module.

mod core;

pub use core::{
    Field, FieldGroup, FieldId, GRID_COLUMNS, GroupId, HorizontalDirection, LayoutEntry,
    VerticalDirection, Viewport,
};
