use crate::config::SizingPolicy;
use crate::model::{FieldId, HorizontalDirection, LayoutEntry, VerticalDirection};
use crate::repack::{calculate_auto_size, normalize};

fn position(entries: &[LayoutEntry], field_id: &FieldId) -> Option<usize> {
    entries.iter().position(|entry| &entry.field_id == field_id)
}

/// Drop `active` onto the cell of `over`, inserting before it.
///
/// Moving into another row resizes the active entry to the target row's free
/// space, measured before the insert.
pub fn reposition(
    group: &[LayoutEntry],
    active_id: &FieldId,
    over_id: &FieldId,
) -> Vec<LayoutEntry> {
    if active_id == over_id {
        return group.to_vec();
    }
    let (Some(active_idx), Some(over_idx)) = (position(group, active_id), position(group, over_id))
    else {
        return group.to_vec();
    };

    let target_row = group[over_idx].row_index;
    let target_column = group[over_idx].column_index;
    let active = &group[active_idx];
    let resize = (active.row_index != target_row)
        .then(|| calculate_auto_size(target_row, group, active));

    let mut entries = group.to_vec();
    for (idx, entry) in entries.iter_mut().enumerate() {
        if idx != active_idx
            && entry.row_index == target_row
            && entry.column_index >= target_column
        {
            entry.column_index = entry.column_index.saturating_add(1);
        }
    }

    let moved = &mut entries[active_idx];
    moved.row_index = target_row;
    moved.column_index = target_column;
    if let Some(size) = resize {
        moved.set_widths(size.width_columns, size.mobile_width_columns);
    }

    normalize(&entries)
}

/// Swap a field with its neighbour in `direction` within its row.
pub fn move_horizontal(
    group: &[LayoutEntry],
    field_id: &FieldId,
    direction: HorizontalDirection,
) -> Vec<LayoutEntry> {
    let Some(idx) = position(group, field_id) else {
        return group.to_vec();
    };
    let row = group[idx].row_index;

    let mut siblings: Vec<usize> = (0..group.len())
        .filter(|i| group[*i].row_index == row)
        .collect();
    siblings.sort_by_key(|i| group[*i].column_index);

    let Some(slot) = siblings.iter().position(|i| *i == idx) else {
        return group.to_vec();
    };
    let neighbour = match direction {
        HorizontalDirection::Left => slot.checked_sub(1),
        HorizontalDirection::Right => Some(slot + 1).filter(|next| *next < siblings.len()),
    };
    let Some(neighbour) = neighbour.map(|slot| siblings[slot]) else {
        return group.to_vec();
    };

    let mut entries = group.to_vec();
    let column = entries[idx].column_index;
    entries[idx].column_index = entries[neighbour].column_index;
    entries[neighbour].column_index = column;
    normalize(&entries)
}

/// Move a field one row up or down.
///
/// A field sharing its row is promoted onto a new full-width row of its own,
/// inserted at its current row (`Up`) or right after it (`Down`). A field
/// alone on its row joins the adjacent row as its last column, sized to that
/// row's free space.
pub fn move_vertical(
    group: &[LayoutEntry],
    field_id: &FieldId,
    direction: VerticalDirection,
    policy: &SizingPolicy,
) -> Vec<LayoutEntry> {
    let Some(idx) = position(group, field_id) else {
        return group.to_vec();
    };
    let current_row = group[idx].row_index;
    let shares_row = group
        .iter()
        .enumerate()
        .any(|(i, entry)| i != idx && entry.row_index == current_row);

    let mut entries = group.to_vec();

    if shares_row {
        let new_row = match direction {
            VerticalDirection::Up => current_row,
            VerticalDirection::Down => current_row.saturating_add(1),
        };
        for (i, entry) in entries.iter_mut().enumerate() {
            if i != idx && entry.row_index >= new_row {
                entry.row_index = entry.row_index.saturating_add(1);
            }
        }
        let promoted = &mut entries[idx];
        promoted.row_index = new_row;
        promoted.column_index = 0;
        promoted.set_widths(policy.default_width, policy.default_mobile_width);
        return normalize(&entries);
    }

    let adjacent = match direction {
        VerticalDirection::Up => group
            .iter()
            .map(|entry| entry.row_index)
            .filter(|row| *row < current_row)
            .max(),
        VerticalDirection::Down => group
            .iter()
            .map(|entry| entry.row_index)
            .filter(|row| *row > current_row)
            .min(),
    };
    let Some(target_row) = adjacent else {
        return group.to_vec();
    };

    let next_column = group
        .iter()
        .filter(|entry| entry.row_index == target_row)
        .map(|entry| entry.column_index.saturating_add(1))
        .max()
        .unwrap_or(0);
    let size = calculate_auto_size(target_row, group, &group[idx]);

    let moved = &mut entries[idx];
    moved.row_index = target_row;
    moved.column_index = next_column;
    moved.set_widths(size.width_columns, size.mobile_width_columns);
    normalize(&entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repack::validate_group;
    use std::collections::BTreeSet;

    fn id(value: &str) -> FieldId {
        value.to_string()
    }

    fn find<'a>(entries: &'a [LayoutEntry], field: &str) -> &'a LayoutEntry {
        entries
            .iter()
            .find(|e| e.field_id == field)
            .expect("entry present")
    }

    fn order(entries: &[LayoutEntry]) -> Vec<(&str, u32, u32)> {
        entries
            .iter()
            .map(|e| (e.field_id.as_str(), e.row_index, e.column_index))
            .collect()
    }

    fn three_in_a_row() -> Vec<LayoutEntry> {
        vec![
            LayoutEntry::new("a", 0, 0, 4, 12),
            LayoutEntry::new("b", 0, 1, 4, 12),
            LayoutEntry::new("c", 0, 2, 4, 12),
        ]
    }

    #[test]
    fn drag_within_row_inserts_before_target() {
        let entries = reposition(&three_in_a_row(), &id("c"), &id("a"));
        assert_eq!(
            order(&entries),
            vec![("c", 0, 0), ("a", 0, 1), ("b", 0, 2)]
        );

        let entries = reposition(&three_in_a_row(), &id("a"), &id("c"));
        assert_eq!(
            order(&entries),
            vec![("b", 0, 0), ("a", 0, 1), ("c", 0, 2)]
        );
        // Same row keeps widths.
        assert!(entries.iter().all(|e| e.width_columns == 4));
    }

    #[test]
    fn drag_across_rows_auto_sizes_and_closes_source_row() {
        let group = vec![
            LayoutEntry::new("a", 0, 0, 8, 6),
            LayoutEntry::new("b", 1, 0, 12, 12),
            LayoutEntry::new("c", 2, 0, 12, 12),
        ];
        let entries = reposition(&group, &id("b"), &id("a"));
        assert_eq!(find(&entries, "b"), &LayoutEntry::new("b", 0, 0, 4, 6));
        assert_eq!(find(&entries, "a").cell(), (0, 1));
        assert_eq!(find(&entries, "c").cell(), (1, 0));
    }

    #[test]
    fn drag_into_full_row_keeps_previous_width() {
        let group = vec![
            LayoutEntry::new("a", 0, 0, 12, 12),
            LayoutEntry::new("b", 1, 0, 5, 9),
        ];
        let entries = reposition(&group, &id("b"), &id("a"));
        assert_eq!(find(&entries, "b"), &LayoutEntry::new("b", 0, 0, 5, 9));
    }

    #[test]
    fn drag_with_unknown_or_same_field_is_a_no_op() {
        let group = three_in_a_row();
        assert_eq!(reposition(&group, &id("a"), &id("a")), group);
        assert_eq!(reposition(&group, &id("a"), &id("nope")), group);
        assert_eq!(reposition(&group, &id("nope"), &id("a")), group);
    }

    #[test]
    fn horizontal_move_swaps_columns_only() {
        let entries = move_horizontal(&three_in_a_row(), &id("b"), HorizontalDirection::Right);
        assert_eq!(
            order(&entries),
            vec![("a", 0, 0), ("c", 0, 1), ("b", 0, 2)]
        );

        let entries = move_horizontal(&three_in_a_row(), &id("b"), HorizontalDirection::Left);
        assert_eq!(
            order(&entries),
            vec![("b", 0, 0), ("a", 0, 1), ("c", 0, 2)]
        );
    }

    #[test]
    fn horizontal_move_at_row_edge_is_a_no_op() {
        let group = three_in_a_row();
        assert_eq!(
            move_horizontal(&group, &id("a"), HorizontalDirection::Left),
            group
        );
        assert_eq!(
            move_horizontal(&group, &id("c"), HorizontalDirection::Right),
            group
        );
    }

    #[test]
    fn solo_row_moves_up_into_previous_row() {
        let policy = SizingPolicy::default();
        let group = vec![
            LayoutEntry::new("a", 0, 0, 12, 12),
            LayoutEntry::new("b", 1, 0, 6, 12),
            LayoutEntry::new("c", 2, 0, 12, 12),
        ];
        let entries = move_vertical(&group, &id("c"), VerticalDirection::Up, &policy);
        assert_eq!(find(&entries, "c"), &LayoutEntry::new("c", 1, 1, 6, 12));
        let rows: BTreeSet<u32> = entries.iter().map(|e| e.row_index).collect();
        assert_eq!(rows, BTreeSet::from([0, 1]));
    }

    #[test]
    fn solo_row_at_boundary_is_a_no_op() {
        let policy = SizingPolicy::default();
        let group = vec![
            LayoutEntry::new("a", 0, 0, 12, 12),
            LayoutEntry::new("b", 1, 0, 12, 12),
        ];
        assert_eq!(
            move_vertical(&group, &id("a"), VerticalDirection::Up, &policy),
            group
        );
        assert_eq!(
            move_vertical(&group, &id("b"), VerticalDirection::Down, &policy),
            group
        );
    }

    #[test]
    fn shared_row_moves_down_onto_new_row() {
        let policy = SizingPolicy::default();
        let group = vec![
            LayoutEntry::new("a", 0, 0, 12, 12),
            LayoutEntry::new("b", 1, 0, 6, 12),
            LayoutEntry::new("c", 1, 1, 6, 12),
            LayoutEntry::new("d", 2, 0, 12, 12),
            LayoutEntry::new("e", 3, 0, 12, 12),
        ];
        let entries = move_vertical(&group, &id("b"), VerticalDirection::Down, &policy);
        assert_eq!(find(&entries, "b"), &LayoutEntry::new("b", 2, 0, 12, 12));
        assert_eq!(find(&entries, "c").cell(), (1, 0));
        assert_eq!(find(&entries, "d").row_index, 3);
        assert_eq!(find(&entries, "e").row_index, 4);
        assert_eq!(find(&entries, "a").row_index, 0);
    }

    #[test]
    fn moves_at_maximum_indices_stay_dense() {
        let policy = SizingPolicy::default();
        let group = vec![
            LayoutEntry::new("a", u32::MAX, u32::MAX - 1, 6, 12),
            LayoutEntry::new("b", u32::MAX, u32::MAX, 6, 12),
        ];
        let down = move_vertical(&group, &id("a"), VerticalDirection::Down, &policy);
        assert!(validate_group(&down).is_ok());
        let dragged = reposition(&group, &id("b"), &id("a"));
        assert!(validate_group(&dragged).is_ok());
        assert_eq!(dragged[0].field_id, "b");
    }

    #[test]
    fn shared_row_moves_up_onto_new_row() {
        let policy = SizingPolicy::default();
        let group = vec![
            LayoutEntry::new("a", 0, 0, 12, 12),
            LayoutEntry::new("b", 1, 0, 6, 12),
            LayoutEntry::new("c", 1, 1, 6, 12),
        ];
        let entries = move_vertical(&group, &id("c"), VerticalDirection::Up, &policy);
        assert_eq!(
            order(&entries),
            vec![("a", 0, 0), ("c", 1, 0), ("b", 2, 0)]
        );
        assert_eq!(find(&entries, "c").width_columns, 12);
        assert_eq!(find(&entries, "b").width_columns, 6);
    }
}
