//! Custom field entity - user-defined attributes attached to an activity

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CustomFieldId, FieldKind};

/// A user-defined editable attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: CustomFieldId,
    /// Machine name
    pub key: String,
    /// Display name
    pub label: String,
    pub kind: FieldKind,
    /// Always text; a numeric kind is only a rendering hint
    pub value: String,
    pub description: String,
    /// Advisory only, never enforced
    pub required: bool,
    /// Whether the field is rendered in the edit panel
    pub visible: bool,
}

impl CustomField {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: CustomFieldId::new(),
            key: key.into(),
            label: label.into(),
            kind,
            value: String::new(),
            description: String::new(),
            required: false,
            visible: true,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}
