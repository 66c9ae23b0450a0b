use thiserror::Error;

use crate::logging::LoggingError;
use crate::model::{FieldId, GroupId, Viewport};

/// Unified result type for the formgrid crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced at the allocator's boundaries.
///
/// Layout commands themselves never fail; invalid commands degrade to no-ops.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("field `{0}` not found")]
    UnknownField(FieldId),
    #[error("field group `{0}` not found")]
    UnknownGroup(GroupId),
    #[error("field `{0}` is placed and cannot change group")]
    FieldPlaced(FieldId),
    #[error("field `{0}` has more than one layout entry")]
    DuplicateEntry(FieldId),
    #[error("layout invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("logging failure: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Broken placement invariant detected by `validate_group`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("row indices are not dense: expected {expected}, found {found}")]
    RowGap { expected: u32, found: u32 },
    #[error("row {row} column indices are not dense: expected {expected}, found {found}")]
    ColumnGap { row: u32, expected: u32, found: u32 },
    #[error("cell ({row}, {column}) is occupied more than once")]
    DuplicateCell { row: u32, column: u32 },
    #[error("field `{field_id}` has {viewport:?} width {width} outside 1..=12")]
    WidthOutOfBounds {
        field_id: FieldId,
        viewport: Viewport,
        width: u8,
    },
}
