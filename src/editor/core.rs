use serde_json::Value;

use crate::config::EditorConfig;
use crate::logging::{LogLevel, event_with_fields, json_kv, json_str};
use crate::metrics::{CommandKind, MetricSnapshot};
use crate::model::{FieldId, GroupId, HorizontalDirection, LayoutEntry, VerticalDirection};
use crate::placement;
use crate::reorder;
use crate::repack::{RowOverflow, group_overflows, validate_group};
use crate::store::LayoutStore;

/// Applies layout commands to a [`LayoutStore`], one field-group at a time.
///
/// Every command returns the full entry list across all groups. Commands that
/// do not apply (unknown fields, cross-group drags, moves past a boundary)
/// return the current list and leave the store untouched.
pub struct LayoutEditor {
    store: LayoutStore,
    config: EditorConfig,
}

impl LayoutEditor {
    pub fn new(store: LayoutStore) -> Self {
        Self::with_config(store, EditorConfig::default())
    }

    pub fn with_config(store: LayoutStore, config: EditorConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &LayoutStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut LayoutStore {
        &mut self.store
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EditorConfig {
        &mut self.config
    }

    pub fn into_store(self) -> LayoutStore {
        self.store
    }

    /// Rows of the group that are wider than the grid in either viewport.
    pub fn overflows(&self, group_id: &GroupId) -> Vec<RowOverflow> {
        group_overflows(&self.store.entries(group_id))
    }

    pub fn add_field(&mut self, field_id: &FieldId, group_id: &GroupId) -> Vec<LayoutEntry> {
        let kind = CommandKind::Add;
        self.record_command(kind);
        if self.store.group_of(field_id) != Some(group_id) {
            return self.skip(kind, field_id, "field_not_in_group");
        }
        if self.store.entry(field_id).is_some() {
            return self.skip(kind, field_id, "already_placed");
        }
        let Some(is_array_group) = self.store.group(group_id).map(|g| g.is_array_group) else {
            return self.skip(kind, field_id, "unknown_group");
        };

        let current = self.store.entries(group_id);
        let next = placement::add_field(&current, field_id, is_array_group, &self.config.sizing);
        self.commit(kind, group_id, field_id, &current, next)
    }

    pub fn remove_field(&mut self, field_id: &FieldId, group_id: &GroupId) -> Vec<LayoutEntry> {
        let kind = CommandKind::Remove;
        self.record_command(kind);
        if self.store.group_of(field_id) != Some(group_id) {
            return self.skip(kind, field_id, "field_not_in_group");
        }

        let current = self.store.entries(group_id);
        let next = placement::remove_field(&current, field_id);
        self.commit(kind, group_id, field_id, &current, next)
    }

    /// Drop `active_id` onto the cell of `over_id`. Both must share a group.
    pub fn reposition(&mut self, active_id: &FieldId, over_id: &FieldId) -> Vec<LayoutEntry> {
        let kind = CommandKind::Drag;
        self.record_command(kind);
        let group_id = match (self.store.group_of(active_id), self.store.group_of(over_id)) {
            (Some(active), Some(over)) if active == over => active.clone(),
            (Some(_), Some(_)) => return self.skip(kind, active_id, "cross_group"),
            _ => return self.skip(kind, active_id, "unknown_field"),
        };

        let current = self.store.entries(&group_id);
        let next = reorder::reposition(&current, active_id, over_id);
        self.commit(kind, &group_id, active_id, &current, next)
    }

    pub fn move_horizontal(
        &mut self,
        field_id: &FieldId,
        direction: HorizontalDirection,
        group_id: &GroupId,
    ) -> Vec<LayoutEntry> {
        let kind = CommandKind::MoveHorizontal;
        self.record_command(kind);
        if self.store.group_of(field_id) != Some(group_id) {
            return self.skip(kind, field_id, "field_not_in_group");
        }

        let current = self.store.entries(group_id);
        let next = reorder::move_horizontal(&current, field_id, direction);
        self.commit(kind, group_id, field_id, &current, next)
    }

    pub fn move_vertical(
        &mut self,
        field_id: &FieldId,
        direction: VerticalDirection,
        group_id: &GroupId,
    ) -> Vec<LayoutEntry> {
        let kind = CommandKind::MoveVertical;
        self.record_command(kind);
        if self.store.group_of(field_id) != Some(group_id) {
            return self.skip(kind, field_id, "field_not_in_group");
        }

        let current = self.store.entries(group_id);
        let next = reorder::move_vertical(&current, field_id, direction, &self.config.sizing);
        self.commit(kind, group_id, field_id, &current, next)
    }

    /// Current metrics, if enabled. Also emits them through the logger.
    pub fn emit_metrics(&self) -> Option<MetricSnapshot> {
        let snapshot = self
            .config
            .metrics
            .as_ref()
            .and_then(|metrics| metrics.lock().ok().map(|guard| guard.snapshot()))?;
        if let Some(logger) = self.config.logger.as_ref() {
            let _ = logger.log_event(snapshot.to_log_event(&self.config.log_target));
        }
        Some(snapshot)
    }

    fn commit(
        &mut self,
        kind: CommandKind,
        group_id: &GroupId,
        field_id: &FieldId,
        current: &[LayoutEntry],
        next: Vec<LayoutEntry>,
    ) -> Vec<LayoutEntry> {
        if next.as_slice() == current {
            return self.skip(kind, field_id, "unchanged");
        }

        if self.config.validate_commits {
            if let Err(err) = validate_group(&next) {
                self.emit(
                    LogLevel::Error,
                    "layout.invariant_violated",
                    [
                        json_str("command", kind.as_str()),
                        json_str("group_id", group_id.clone()),
                        json_str("error", err.to_string()),
                    ],
                );
            }
        }

        let change = self.store.replace(group_id, next);

        self.emit(
            LogLevel::Debug,
            "layout.committed",
            [
                json_str("command", kind.as_str()),
                json_str("group_id", group_id.clone()),
                json_str("field_id", field_id.clone()),
                json_kv("entries", change.entries.len()),
                json_str("fingerprint", change.fingerprint.to_hex().to_string()),
            ],
        );
        for overflow in &change.overflows {
            self.emit(
                LogLevel::Warn,
                "layout.row_overflow",
                [
                    json_str("group_id", group_id.clone()),
                    json_kv("row_index", overflow.row_index),
                    json_str("viewport", overflow.viewport.as_str()),
                    json_kv("total_columns", overflow.total_columns),
                ],
            );
        }
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_commit(change.overflows.len());
            }
        }

        change.entries
    }

    fn skip(&self, kind: CommandKind, field_id: &FieldId, reason: &str) -> Vec<LayoutEntry> {
        self.emit(
            LogLevel::Trace,
            "layout.noop",
            [
                json_str("command", kind.as_str()),
                json_str("field_id", field_id.clone()),
                json_str("reason", reason),
            ],
        );
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_noop();
            }
        }
        self.store.all_entries().to_vec()
    }

    fn record_command(&self, kind: CommandKind) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_command(kind);
            }
        }
    }

    fn emit(&self, level: LogLevel, message: &str, fields: impl IntoIterator<Item = (String, Value)>) {
        if let Some(logger) = self.config.logger.as_ref() {
            let event = event_with_fields(level, &self.config.log_target, message, fields);
            let _ = logger.log_event(event);
        }
    }
}
