//! Layout store: the field directory plus every group's placement entries.

mod core;
mod snapshot;

pub use core::{LayoutChange, LayoutObserver, LayoutStore, layout_fingerprint};
pub use snapshot::LayoutSnapshot;
