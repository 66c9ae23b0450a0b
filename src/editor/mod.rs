//! Command facade the form editor drives: add, remove, drag and nudge fields.

mod core;

pub use core::LayoutEditor;
