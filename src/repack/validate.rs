use std::collections::{BTreeMap, HashSet};

use crate::error::{InvariantViolation, Result};
use crate::model::{GRID_COLUMNS, LayoutEntry, Viewport};

/// Check row/column density, cell uniqueness and width bounds for one group.
pub fn validate_group(entries: &[LayoutEntry]) -> Result<()> {
    let mut seen = HashSet::new();
    let mut rows: BTreeMap<u32, Vec<u32>> = BTreeMap::new();

    for entry in entries {
        for viewport in Viewport::ALL {
            let width = entry.width(viewport);
            if width == 0 || width > GRID_COLUMNS {
                return Err(InvariantViolation::WidthOutOfBounds {
                    field_id: entry.field_id.clone(),
                    viewport,
                    width,
                }
                .into());
            }
        }
        if !seen.insert(entry.cell()) {
            return Err(InvariantViolation::DuplicateCell {
                row: entry.row_index,
                column: entry.column_index,
            }
            .into());
        }
        rows.entry(entry.row_index)
            .or_default()
            .push(entry.column_index);
    }

    for (expected, (row, mut columns)) in (0..).zip(rows) {
        if row != expected {
            return Err(InvariantViolation::RowGap {
                expected,
                found: row,
            }
            .into());
        }
        columns.sort_unstable();
        for (expected, found) in (0..).zip(columns) {
            if found != expected {
                return Err(InvariantViolation::ColumnGap {
                    row,
                    expected,
                    found,
                }
                .into());
            }
        }
    }

    Ok(())
}
