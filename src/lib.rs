//! Responsive grid layout allocator for form editors.
//!
//! Fields of a field-group are placed on a 12-column grid across any number
//! of rows, with independent desktop and mobile spans. The editor facade
//! applies add, remove, drag and nudge commands one group at a time and keeps
//! row and column indices dense after every change.

pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod placement;
pub mod reorder;
pub mod repack;
pub mod store;

pub use config::{EditorConfig, EditorSettings, SizingPolicy};
pub use editor::LayoutEditor;
pub use error::{InvariantViolation, LayoutError, Result};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{CommandKind, EditorMetrics, MetricSnapshot};
pub use model::{
    Field, FieldGroup, FieldId, GRID_COLUMNS, GroupId, HorizontalDirection, LayoutEntry,
    VerticalDirection, Viewport,
};
pub use repack::{
    AutoSize, RowOverflow, calculate_auto_size, calculate_available_columns, group_overflows,
    normalize, normalize_columns, normalize_rows, row_overflows, validate_group,
};
pub use store::{LayoutChange, LayoutObserver, LayoutSnapshot, LayoutStore, layout_fingerprint};
