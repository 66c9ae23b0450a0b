use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::logging::{FileSink, Logger};
use crate::metrics::EditorMetrics;
use crate::model::GRID_COLUMNS;

/// Width constants used when placing and promoting fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SizingPolicy {
    /// Desktop span of an ordinary field and of a promoted row.
    pub default_width: u8,
    pub default_mobile_width: u8,
    /// Spans of the first field placed into an empty array group.
    pub array_first_width: u8,
    pub array_first_mobile_width: u8,
    /// Lower bounds applied when an array row is rebalanced.
    pub array_min_width: u8,
    pub array_min_mobile_width: u8,
    /// Fields per mobile row assumed when rebalancing an array row.
    pub array_mobile_max_per_row: u8,
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self {
            default_width: GRID_COLUMNS,
            default_mobile_width: GRID_COLUMNS,
            array_first_width: 6,
            array_first_mobile_width: GRID_COLUMNS,
            array_min_width: 2,
            array_min_mobile_width: 4,
            array_mobile_max_per_row: 3,
        }
    }
}

impl SizingPolicy {
    /// Equal share of the grid for `fields` entries on one array row.
    pub fn array_share(&self, fields: usize) -> (u8, u8) {
        let fields = fields.max(1);
        let grid = usize::from(GRID_COLUMNS);
        let desktop = (grid / fields) as u8;
        let mobile_fields = fields.min(usize::from(self.array_mobile_max_per_row.max(1)));
        let mobile = (grid / mobile_fields) as u8;
        (
            desktop.max(self.array_min_width),
            mobile.max(self.array_min_mobile_width),
        )
    }

    pub fn validate(&self) -> Result<()> {
        let widths = [
            ("defaultWidth", self.default_width),
            ("defaultMobileWidth", self.default_mobile_width),
            ("arrayFirstWidth", self.array_first_width),
            ("arrayFirstMobileWidth", self.array_first_mobile_width),
            ("arrayMinWidth", self.array_min_width),
            ("arrayMinMobileWidth", self.array_min_mobile_width),
        ];
        for (name, width) in widths {
            if width == 0 || width > GRID_COLUMNS {
                return Err(LayoutError::Config(format!(
                    "{name} must be within 1..={GRID_COLUMNS}, got {width}"
                )));
            }
        }
        if self.array_mobile_max_per_row == 0 {
            return Err(LayoutError::Config(
                "arrayMobileMaxPerRow must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Serializable editor settings, typically loaded from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorSettings {
    pub sizing: SizingPolicy,
    /// JSON-lines log destination. No logging when absent.
    pub log_path: Option<PathBuf>,
    /// Truncate the log file once it would grow past this size. Zero disables rotation.
    pub log_max_bytes: u64,
    pub log_target: String,
    pub metrics: bool,
    pub validate_commits: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            sizing: SizingPolicy::default(),
            log_path: None,
            log_max_bytes: 1024 * 1024,
            log_target: "formgrid::editor".to_string(),
            metrics: false,
            validate_commits: cfg!(debug_assertions),
        }
    }
}

impl EditorSettings {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(raw)?;
        settings.sizing.validate()?;
        Ok(settings)
    }
}

/// Runtime configuration consumed by `LayoutEditor`.
#[derive(Clone)]
pub struct EditorConfig {
    /// Optional structured logger used by the editor.
    pub logger: Option<Logger>,
    /// Command counters, shared with whoever reads the snapshots.
    pub metrics: Option<Arc<Mutex<EditorMetrics>>>,
    /// Target field attached to emitted log events.
    pub log_target: String,
    pub sizing: SizingPolicy,
    /// Check layout invariants on every commit and log violations.
    pub validate_commits: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let settings = EditorSettings::default();
        Self {
            logger: None,
            metrics: None,
            log_target: settings.log_target,
            sizing: settings.sizing,
            validate_commits: settings.validate_commits,
        }
    }
}

impl EditorConfig {
    pub fn from_settings(settings: &EditorSettings) -> Result<Self> {
        settings.sizing.validate()?;
        let logger = match &settings.log_path {
            Some(path) => Some(Logger::new(FileSink::new(path, settings.log_max_bytes)?)),
            None => None,
        };
        let mut config = Self {
            logger,
            metrics: None,
            log_target: settings.log_target.clone(),
            sizing: settings.sizing.clone(),
            validate_commits: settings.validate_commits,
        };
        if settings.metrics {
            config.enable_metrics();
        }
        Ok(config)
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(EditorMetrics::new())));
        }
    }

    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    /// Access the shared metrics handle if metrics are enabled.
    pub fn metrics_handle(&self) -> Option<Arc<Mutex<EditorMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_share_matches_rebalancing_rule() {
        let policy = SizingPolicy::default();
        assert_eq!(policy.array_share(1), (12, 12));
        assert_eq!(policy.array_share(2), (6, 6));
        assert_eq!(policy.array_share(3), (4, 4));
        assert_eq!(policy.array_share(4), (3, 4));
        assert_eq!(policy.array_share(5), (2, 4));
        assert_eq!(policy.array_share(12), (2, 4));
    }

    #[test]
    fn settings_fill_missing_fields_with_defaults() {
        let settings =
            EditorSettings::from_json_str(r#"{"metrics": true, "sizing": {"arrayFirstWidth": 4}}"#)
                .unwrap();
        assert!(settings.metrics);
        assert_eq!(settings.sizing.array_first_width, 4);
        assert_eq!(settings.sizing.default_width, 12);
        assert!(settings.log_path.is_none());
    }

    #[test]
    fn settings_reject_out_of_range_width() {
        let err = EditorSettings::from_json_str(r#"{"sizing": {"defaultWidth": 13}}"#).unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)));
        let err = EditorSettings::from_json_str(r#"{"sizing": {"arrayMobileMaxPerRow": 0}}"#)
            .unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)));
    }

    #[test]
    fn config_from_settings_enables_metrics() {
        let settings = EditorSettings {
            metrics: true,
            ..EditorSettings::default()
        };
        let config = EditorConfig::from_settings(&settings).unwrap();
        assert!(config.metrics_handle().is_some());
        assert!(config.logger.is_none());
    }
}
