use crate::config::SizingPolicy;
use crate::model::{FieldId, LayoutEntry};
use crate::repack::normalize;

/// Place `field_id` into a group's entries.
///
/// Ordinary fields get a full-width row of their own below the existing rows.
/// Array-group fields share the row of the group's first entry and every
/// field on that row is resized to an equal share. Array groups are assumed
/// to keep all their fields on one row.
///
/// Returns the input unchanged if the field already has an entry.
pub fn add_field(
    group: &[LayoutEntry],
    field_id: &FieldId,
    is_array_group: bool,
    policy: &SizingPolicy,
) -> Vec<LayoutEntry> {
    if group.iter().any(|entry| &entry.field_id == field_id) {
        return group.to_vec();
    }

    let next_row = group
        .iter()
        .map(|entry| entry.row_index.saturating_add(1))
        .max()
        .unwrap_or(0);
    let mut entries = group.to_vec();

    if !is_array_group {
        entries.push(LayoutEntry::new(
            field_id.clone(),
            next_row,
            0,
            policy.default_width,
            policy.default_mobile_width,
        ));
        return normalize(&entries);
    }

    let Some(anchor_row) = group
        .iter()
        .min_by_key(|entry| entry.cell())
        .map(|entry| entry.row_index)
    else {
        entries.push(LayoutEntry::new(
            field_id.clone(),
            next_row,
            0,
            policy.array_first_width,
            policy.array_first_mobile_width,
        ));
        return normalize(&entries);
    };

    let on_row = group
        .iter()
        .filter(|entry| entry.row_index == anchor_row)
        .count()
        + 1;
    let (width, mobile_width) = policy.array_share(on_row);
    let next_column = group
        .iter()
        .filter(|entry| entry.row_index == anchor_row)
        .map(|entry| entry.column_index.saturating_add(1))
        .max()
        .unwrap_or(0);

    for entry in entries
        .iter_mut()
        .filter(|entry| entry.row_index == anchor_row)
    {
        entry.set_widths(width, mobile_width);
    }
    entries.push(LayoutEntry::new(
        field_id.clone(),
        anchor_row,
        next_column,
        width,
        mobile_width,
    ));

    normalize(&entries)
}

/// Drop the entry for `field_id` and repack the survivors.
///
/// Returns the input unchanged if the field has no entry.
pub fn remove_field(group: &[LayoutEntry], field_id: &FieldId) -> Vec<LayoutEntry> {
    if !group.iter().any(|entry| &entry.field_id == field_id) {
        return group.to_vec();
    }

    let remaining: Vec<LayoutEntry> = group
        .iter()
        .filter(|entry| &entry.field_id != field_id)
        .cloned()
        .collect();
    normalize(&remaining)
}
