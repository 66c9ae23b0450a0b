//! Editor configuration: sizing constants, logging and metrics knobs.

mod core;

pub use core::{EditorConfig, EditorSettings, SizingPolicy};
