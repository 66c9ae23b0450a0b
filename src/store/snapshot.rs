use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Field, FieldGroup, LayoutEntry};

/// Serializable form of a store, as loaded from and handed back to persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    #[serde(default)]
    pub groups: Vec<FieldGroup>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub entries: Vec<LayoutEntry>,
}

impl LayoutSnapshot {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
