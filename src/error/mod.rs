//! Error types for the allocator's load, configuration and validation boundaries.

mod types;

pub use types::{InvariantViolation, LayoutError, Result};
