//! Repacking engine: normalization primitives, auto-sizing and row checks.
//!
//! Every mutating command funnels its candidate entries through [`normalize`]
//! so row and column contiguity is enforced in exactly one place.

mod core;
mod overflow;
mod validate;

pub use core::{
    AutoSize, calculate_auto_size, calculate_available_columns, normalize, normalize_columns,
    normalize_rows, row_width,
};
pub use overflow::{RowOverflow, group_overflows, row_overflows};
pub use validate::validate_group;
