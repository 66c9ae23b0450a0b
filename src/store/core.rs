use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use blake3::Hash;

use super::snapshot::LayoutSnapshot;
use crate::error::{LayoutError, Result};
use crate::model::{Field, FieldGroup, FieldId, GroupId, LayoutEntry};
use crate::repack::{RowOverflow, group_overflows, normalize, validate_group};

/// Notification emitted once per [`LayoutStore::replace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutChange {
    /// Group whose entries were swapped.
    pub group_id: GroupId,
    /// Every entry across all groups after the swap.
    pub entries: Vec<LayoutEntry>,
    /// Rows of the swapped group wider than the grid.
    pub overflows: Vec<RowOverflow>,
    /// Digest of `entries`, for skipping identical persistence payloads.
    pub fingerprint: Hash,
}

/// Receives the full entry list whenever a group is replaced.
pub trait LayoutObserver: Send + Sync {
    fn layout_changed(&self, change: &LayoutChange);
}

/// Digest over every entry's identity and geometry, in list order.
pub fn layout_fingerprint(entries: &[LayoutEntry]) -> Hash {
    let mut hasher = blake3::Hasher::new();
    for entry in entries {
        hasher.update(&(entry.field_id.len() as u64).to_le_bytes());
        hasher.update(entry.field_id.as_bytes());
        hasher.update(&entry.row_index.to_le_bytes());
        hasher.update(&entry.column_index.to_le_bytes());
        hasher.update(&[entry.width_columns, entry.mobile_width_columns]);
    }
    hasher.finalize()
}

/// In-memory store of placement entries keyed by field-group.
#[derive(Default)]
pub struct LayoutStore {
    groups: HashMap<GroupId, FieldGroup>,
    fields: HashMap<FieldId, GroupId>,
    entries: Vec<LayoutEntry>,
    observers: Vec<Arc<dyn LayoutObserver>>,
}

impl LayoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from persisted state.
    ///
    /// Each group's entries are repacked to dense indices and checked against
    /// the width bounds before they are accepted.
    pub fn from_snapshot(snapshot: LayoutSnapshot) -> Result<Self> {
        let mut store = Self::new();
        for group in snapshot.groups {
            store.register_group(group);
        }
        for field in snapshot.fields {
            store.register_field(field)?;
        }

        let mut placed = HashSet::new();
        for entry in &snapshot.entries {
            if !store.fields.contains_key(&entry.field_id) {
                return Err(LayoutError::UnknownField(entry.field_id.clone()));
            }
            if !placed.insert(entry.field_id.clone()) {
                return Err(LayoutError::DuplicateEntry(entry.field_id.clone()));
            }
        }

        let mut group_ids: Vec<GroupId> = store.groups.keys().cloned().collect();
        group_ids.sort();
        for group_id in group_ids {
            let raw: Vec<LayoutEntry> = snapshot
                .entries
                .iter()
                .filter(|entry| store.in_group(entry, &group_id))
                .cloned()
                .collect();
            let packed = normalize(&raw);
            validate_group(&packed)?;
            store.entries.extend(packed);
        }
        Ok(store)
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        let mut groups: Vec<FieldGroup> = self.groups.values().cloned().collect();
        groups.sort_by(|a, b| a.group_id.cmp(&b.group_id));
        let mut fields: Vec<Field> = self
            .fields
            .iter()
            .map(|(field_id, group_id)| Field::new(field_id.clone(), group_id.clone()))
            .collect();
        fields.sort_by(|a, b| a.field_id.cmp(&b.field_id));

        LayoutSnapshot {
            groups,
            fields,
            entries: self.entries.clone(),
        }
    }

    pub fn register_group(&mut self, group: FieldGroup) {
        self.groups.insert(group.group_id.clone(), group);
    }

    /// Add a field to the directory.
    ///
    /// A field that already has an entry cannot be moved to another group.
    pub fn register_field(&mut self, field: Field) -> Result<()> {
        if !self.groups.contains_key(&field.field_group_id) {
            return Err(LayoutError::UnknownGroup(field.field_group_id));
        }
        let regrouped = self
            .fields
            .get(&field.field_id)
            .is_some_and(|group_id| group_id != &field.field_group_id);
        if regrouped && self.entry(&field.field_id).is_some() {
            return Err(LayoutError::FieldPlaced(field.field_id));
        }
        self.fields.insert(field.field_id, field.field_group_id);
        Ok(())
    }

    pub fn subscribe(&mut self, observer: Arc<dyn LayoutObserver>) {
        self.observers.push(observer);
    }

    pub fn group(&self, group_id: &GroupId) -> Option<&FieldGroup> {
        self.groups.get(group_id)
    }

    pub fn group_of(&self, field_id: &FieldId) -> Option<&GroupId> {
        self.fields.get(field_id)
    }

    /// All entries across groups.
    pub fn all_entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn entry(&self, field_id: &FieldId) -> Option<&LayoutEntry> {
        self.entries.iter().find(|entry| &entry.field_id == field_id)
    }

    fn in_group(&self, entry: &LayoutEntry, group_id: &GroupId) -> bool {
        self.fields.get(&entry.field_id) == Some(group_id)
    }

    /// Entries of one group ordered by `(row_index, column_index)`.
    pub fn entries(&self, group_id: &GroupId) -> Vec<LayoutEntry> {
        let mut entries: Vec<LayoutEntry> = self
            .entries
            .iter()
            .filter(|entry| self.in_group(entry, group_id))
            .cloned()
            .collect();
        entries.sort_by_key(|entry| entry.cell());
        entries
    }

    /// Fields among `all_field_ids` that belong to the group and have no entry.
    pub fn unplaced(&self, group_id: &GroupId, all_field_ids: &[FieldId]) -> Vec<Field> {
        let placed: HashSet<&FieldId> = self.entries.iter().map(|entry| &entry.field_id).collect();
        all_field_ids
            .iter()
            .filter(|field_id| self.fields.get(*field_id) == Some(group_id))
            .filter(|field_id| !placed.contains(field_id))
            .map(|field_id| Field::new(field_id.clone(), group_id.clone()))
            .collect()
    }

    /// Swap one group's entries, leaving every other group's entries untouched.
    ///
    /// Observers receive exactly one [`LayoutChange`], which is also returned.
    pub fn replace(&mut self, group_id: &GroupId, new_entries: Vec<LayoutEntry>) -> LayoutChange {
        let mut group_entries = new_entries;
        group_entries.sort_by_key(|entry| entry.cell());
        let overflows = group_overflows(&group_entries);

        let mut entries: Vec<LayoutEntry> = self
            .entries
            .iter()
            .filter(|entry| !self.in_group(entry, group_id))
            .cloned()
            .collect();
        entries.extend(group_entries);
        self.entries = entries;

        let change = LayoutChange {
            group_id: group_id.clone(),
            fingerprint: layout_fingerprint(&self.entries),
            entries: self.entries.clone(),
            overflows,
        };
        for observer in &self.observers {
            observer.layout_changed(&change);
        }
        change
    }

    /// Delete every entry referencing a field of the group.
    pub fn remove_group(&mut self, group_id: &GroupId) -> LayoutChange {
        self.replace(group_id, Vec::new())
    }
}
