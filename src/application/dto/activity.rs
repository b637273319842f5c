use serde::{Deserialize, Serialize};

use crate::domain::entities::{ActivityRecord, CustomField};
use crate::domain::services::generate;
use crate::domain::value_objects::{
    summarize_conditions, FieldKind, OPERATOR_SUGGESTIONS, SUBJECT_SUGGESTIONS,
};

/// Partial update of the scalar attributes; absent fields are kept
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateActivityRequest {
    pub activity_type: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub activity_group_type: Option<String>,
    pub sort_order: Option<String>,
}

impl UpdateActivityRequest {
    /// Build the replacement record
    pub fn apply(self, record: ActivityRecord) -> ActivityRecord {
        let mut next = record;
        if let Some(activity_type) = self.activity_type {
            next = next.with_activity_type(activity_type);
        }
        if let Some(name) = self.name {
            next = next.with_name(name);
        }
        if let Some(description) = self.description {
            next = next.with_description(description);
        }
        if let Some(group) = self.activity_group_type {
            next = next.with_activity_group_type(group);
        }
        if let Some(sort_order) = self.sort_order {
            next = next.with_sort_order(sort_order);
        }
        next
    }
}

/// Read-only rendering of the record for the preview pane
#[derive(Debug, Clone, Serialize)]
pub struct ActivityPreviewDto {
    pub name: String,
    pub activity_type: String,
    pub description: String,
    pub is_shown: String,
    pub activity_group_type: String,
    pub sort_order: String,
    pub can_start: String,
    pub can_start_showing_failures_only: String,
    pub code: String,
}

impl From<&ActivityRecord> for ActivityPreviewDto {
    fn from(record: &ActivityRecord) -> Self {
        Self {
            name: record.name.clone(),
            activity_type: record.activity_type.clone(),
            description: record.description.clone(),
            is_shown: summarize_conditions(&record.is_shown_conditions),
            activity_group_type: record.activity_group_type.clone(),
            sort_order: record.sort_order.clone(),
            can_start: summarize_conditions(&record.can_start_conditions),
            can_start_showing_failures_only: summarize_conditions(
                &record.can_start_showing_failures_only_conditions,
            ),
            code: generate(record),
        }
    }
}

/// Custom field as rendered by the edit panel
#[derive(Debug, Clone, Serialize)]
pub struct CustomFieldDto {
    #[serde(flatten)]
    pub field: CustomField,
    /// Render as a multi-line text area
    pub multiline: bool,
    /// Render as a numeric input
    pub numeric: bool,
}

impl From<CustomField> for CustomFieldDto {
    fn from(field: CustomField) -> Self {
        Self {
            multiline: field.kind.is_multiline(),
            numeric: field.kind.is_numeric(),
            field,
        }
    }
}

/// Dropdown content for the editor
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionsDto {
    pub subjects: Vec<&'static str>,
    pub operators: Vec<&'static str>,
    pub field_kinds: Vec<&'static str>,
}

impl Default for SuggestionsDto {
    fn default() -> Self {
        Self {
            subjects: SUBJECT_SUGGESTIONS.to_vec(),
            operators: OPERATOR_SUGGESTIONS.to_vec(),
            field_kinds: FieldKind::KNOWN.to_vec(),
        }
    }
}

/// Raw content of an imported file; never parsed into a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedFileDto {
    pub filename: Option<String>,
    pub content: String,
    pub bytes: usize,
}
