use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Kind of layout command issued against the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Add,
    Remove,
    Drag,
    MoveHorizontal,
    MoveVertical,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Add => "add_field",
            CommandKind::Remove => "remove_field",
            CommandKind::Drag => "reposition",
            CommandKind::MoveHorizontal => "move_horizontal",
            CommandKind::MoveVertical => "move_vertical",
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct EditorMetrics {
    adds: u64,
    removes: u64,
    drags: u64,
    horizontal_moves: u64,
    vertical_moves: u64,
    noops: u64,
    commits: u64,
    overflow_warnings: u64,
}

impl EditorMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_command(&mut self, kind: CommandKind) {
        let counter = match kind {
            CommandKind::Add => &mut self.adds,
            CommandKind::Remove => &mut self.removes,
            CommandKind::Drag => &mut self.drags,
            CommandKind::MoveHorizontal => &mut self.horizontal_moves,
            CommandKind::MoveVertical => &mut self.vertical_moves,
        };
        *counter = counter.saturating_add(1);
    }

    pub fn record_noop(&mut self) {
        self.noops = self.noops.saturating_add(1);
    }

    pub fn record_commit(&mut self, overflow_count: usize) {
        self.commits = self.commits.saturating_add(1);
        if overflow_count > 0 {
            self.overflow_warnings = self
                .overflow_warnings
                .saturating_add(overflow_count as u64);
        }
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            adds: self.adds,
            removes: self.removes,
            drags: self.drags,
            horizontal_moves: self.horizontal_moves,
            vertical_moves: self.vertical_moves,
            noops: self.noops,
            commits: self.commits,
            overflow_warnings: self.overflow_warnings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub adds: u64,
    pub removes: u64,
    pub drags: u64,
    pub horizontal_moves: u64,
    pub vertical_moves: u64,
    pub noops: u64,
    pub commits: u64,
    pub overflow_warnings: u64,
}

impl MetricSnapshot {
    pub fn commands(&self) -> u64 {
        self.adds + self.removes + self.drags + self.horizontal_moves + self.vertical_moves
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target.to_string(),
            "editor_metrics".to_string(),
            self.as_fields(),
        )
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("adds".to_string(), json!(self.adds));
        map.insert("removes".to_string(), json!(self.removes));
        map.insert("drags".to_string(), json!(self.drags));
        map.insert("horizontal_moves".to_string(), json!(self.horizontal_moves));
        map.insert("vertical_moves".to_string(), json!(self.vertical_moves));
        map.insert("noops".to_string(), json!(self.noops));
        map.insert("commits".to_string(), json!(self.commits));
        map.insert("overflow_warnings".to_string(), json!(self.overflow_warnings));
        map
    }
}
