use std::collections::{BTreeMap, BTreeSet};

use crate::model::{FieldId, GRID_COLUMNS, LayoutEntry, Viewport};

/// Widths assigned to an entry that changes rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoSize {
    pub width_columns: u8,
    pub mobile_width_columns: u8,
}

/// Rewrite row indices to their dense rank, preserving relative order.
pub fn normalize_rows(entries: &[LayoutEntry]) -> Vec<LayoutEntry> {
    let ranks: BTreeMap<u32, u32> = entries
        .iter()
        .map(|entry| entry.row_index)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .zip(0..)
        .collect();

    entries
        .iter()
        .map(|entry| {
            let mut entry = entry.clone();
            entry.row_index = ranks[&entry.row_index];
            entry
        })
        .collect()
}

/// Rewrite column indices within each row to `0..C-1`, ordered by current column.
///
/// Entries sharing a column keep their input order. The result is sorted by
/// `(row_index, column_index)`.
pub fn normalize_columns(entries: &[LayoutEntry]) -> Vec<LayoutEntry> {
    let mut rows: BTreeMap<u32, Vec<LayoutEntry>> = BTreeMap::new();
    for entry in entries {
        rows.entry(entry.row_index).or_default().push(entry.clone());
    }

    let mut packed = Vec::with_capacity(entries.len());
    for (_, mut row) in rows {
        row.sort_by_key(|entry| entry.column_index);
        for (column, mut entry) in (0..).zip(row) {
            entry.column_index = column;
            packed.push(entry);
        }
    }
    packed
}

/// Rows first, then columns.
pub fn normalize(entries: &[LayoutEntry]) -> Vec<LayoutEntry> {
    normalize_columns(&normalize_rows(entries))
}

/// Sum of widths on `row_index` for one viewport, skipping `exclude`.
pub fn row_width(
    row_index: u32,
    entries: &[LayoutEntry],
    viewport: Viewport,
    exclude: Option<&FieldId>,
) -> u32 {
    entries
        .iter()
        .filter(|entry| entry.row_index == row_index)
        .filter(|entry| Some(&entry.field_id) != exclude)
        .map(|entry| u32::from(entry.width(viewport)))
        .sum()
}

/// Columns left free on `row_index`, never below zero.
pub fn calculate_available_columns(
    row_index: u32,
    entries: &[LayoutEntry],
    viewport: Viewport,
    exclude: Option<&FieldId>,
) -> u8 {
    let used = row_width(row_index, entries, viewport, exclude);
    u32::from(GRID_COLUMNS).saturating_sub(used) as u8
}

/// Size `moving` to fill the free space of `target_row`.
///
/// A viewport with no free space keeps the entry's current width, so a full
/// row overflows instead of collapsing the entry to zero.
pub fn calculate_auto_size(
    target_row: u32,
    entries: &[LayoutEntry],
    moving: &LayoutEntry,
) -> AutoSize {
    let pick = |viewport: Viewport| {
        match calculate_available_columns(target_row, entries, viewport, Some(&moving.field_id)) {
            0 => moving.width(viewport).max(1),
            available => available,
        }
    };

    AutoSize {
        width_columns: pick(Viewport::Desktop),
        mobile_width_columns: pick(Viewport::Mobile),
    }
}
