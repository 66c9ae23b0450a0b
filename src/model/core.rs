use serde::{Deserialize, Serialize};

/// Number of columns spanned by a full grid row in either viewport.
pub const GRID_COLUMNS: u8 = 12;

/// Identifier of a form field.
pub type FieldId = String;

/// Identifier of a field-group.
pub type GroupId = String;

/// Form field as seen by the allocator. Owned by the surrounding editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub field_id: FieldId,
    pub field_group_id: GroupId,
}

impl Field {
    pub fn new(field_id: impl Into<FieldId>, field_group_id: impl Into<GroupId>) -> Self {
        Self {
            field_id: field_id.into(),
            field_group_id: field_group_id.into(),
        }
    }
}

/// Field-group metadata. Array groups render their fields as table columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldGroup {
    pub group_id: GroupId,
    #[serde(default)]
    pub is_array_group: bool,
}

impl FieldGroup {
    pub fn new(group_id: impl Into<GroupId>) -> Self {
        Self {
            group_id: group_id.into(),
            is_array_group: false,
        }
    }

    pub fn array(group_id: impl Into<GroupId>) -> Self {
        Self {
            group_id: group_id.into(),
            is_array_group: true,
        }
    }
}

/// Placement record for one field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutEntry {
    pub field_id: FieldId,
    pub row_index: u32,
    pub column_index: u32,
    pub width_columns: u8,
    pub mobile_width_columns: u8,
}

impl LayoutEntry {
    pub fn new(
        field_id: impl Into<FieldId>,
        row_index: u32,
        column_index: u32,
        width_columns: u8,
        mobile_width_columns: u8,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            row_index,
            column_index,
            width_columns,
            mobile_width_columns,
        }
    }

    /// Span of this entry in the given viewport.
    pub fn width(&self, viewport: Viewport) -> u8 {
        match viewport {
            Viewport::Desktop => self.width_columns,
            Viewport::Mobile => self.mobile_width_columns,
        }
    }

    pub fn set_widths(&mut self, width_columns: u8, mobile_width_columns: u8) {
        self.width_columns = width_columns;
        self.mobile_width_columns = mobile_width_columns;
    }

    /// Grid cell occupied by the entry.
    pub fn cell(&self) -> (u32, u32) {
        (self.row_index, self.column_index)
    }
}

/// Independent sizing context tracked per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    Desktop,
    Mobile,
}

impl Viewport {
    pub const ALL: [Viewport; 2] = [Viewport::Desktop, Viewport::Mobile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Viewport::Desktop => "desktop",
            Viewport::Mobile => "mobile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalDirection {
    Up,
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_width_follows_viewport() {
        let entry = LayoutEntry::new("f", 0, 0, 6, 12);
        assert_eq!(entry.width(Viewport::Desktop), 6);
        assert_eq!(entry.width(Viewport::Mobile), 12);
    }

    #[test]
    fn entry_uses_camel_case_wire_names() {
        let entry = LayoutEntry::new("f", 1, 2, 4, 12);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["fieldId"], "f");
        assert_eq!(value["rowIndex"], 1);
        assert_eq!(value["columnIndex"], 2);
        assert_eq!(value["widthColumns"], 4);
        assert_eq!(value["mobileWidthColumns"], 12);
    }

    #[test]
    fn group_array_flag_defaults_to_false() {
        let group: FieldGroup = serde_json::from_str(r#"{"groupId":"g"}"#).unwrap();
        assert!(!group.is_array_group);
    }
}
