use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{GRID_COLUMNS, LayoutEntry, Viewport};

/// Row whose summed widths exceed the grid in one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowOverflow {
    pub row_index: u32,
    pub viewport: Viewport,
    pub total_columns: u32,
}

impl RowOverflow {
    /// Columns past the right edge of the grid.
    pub fn excess(&self) -> u32 {
        self.total_columns.saturating_sub(u32::from(GRID_COLUMNS))
    }
}

/// Overflowing rows for one viewport, ascending by row.
pub fn row_overflows(entries: &[LayoutEntry], viewport: Viewport) -> Vec<RowOverflow> {
    let mut totals: BTreeMap<u32, u32> = BTreeMap::new();
    for entry in entries {
        *totals.entry(entry.row_index).or_default() += u32::from(entry.width(viewport));
    }

    totals
        .into_iter()
        .filter(|(_, total)| *total > u32::from(GRID_COLUMNS))
        .map(|(row_index, total_columns)| RowOverflow {
            row_index,
            viewport,
            total_columns,
        })
        .collect()
}

/// Overflowing rows across both viewports, desktop first.
pub fn group_overflows(entries: &[LayoutEntry]) -> Vec<RowOverflow> {
    Viewport::ALL
        .iter()
        .flat_map(|viewport| row_overflows(entries, *viewport))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_fit_is_not_an_overflow() {
        let entries = vec![
            LayoutEntry::new("a", 0, 0, 6, 12),
            LayoutEntry::new("b", 0, 1, 6, 12),
        ];
        assert!(row_overflows(&entries, Viewport::Desktop).is_empty());
        let mobile = row_overflows(&entries, Viewport::Mobile);
        assert_eq!(mobile.len(), 1);
        assert_eq!(mobile[0].total_columns, 24);
        assert_eq!(mobile[0].excess(), 12);
    }

    #[test]
    fn group_overflows_reports_each_viewport() {
        let entries = vec![
            LayoutEntry::new("a", 0, 0, 8, 8),
            LayoutEntry::new("b", 0, 1, 8, 8),
            LayoutEntry::new("c", 1, 0, 12, 12),
        ];
        let overflows = group_overflows(&entries);
        assert_eq!(overflows.len(), 2);
        assert_eq!(overflows[0].viewport, Viewport::Desktop);
        assert_eq!(overflows[1].viewport, Viewport::Mobile);
        assert!(overflows.iter().all(|o| o.row_index == 0));
    }
}
