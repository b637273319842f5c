//! Presentation kind of a custom field

use serde::{Deserialize, Serialize};

/// How a custom field is rendered in the edit panel
///
/// String-backed so that kinds introduced by newer clients survive a round
/// trip. The value of a field is always stored as text regardless of kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKind(String);

impl FieldKind {
    pub const TEXT: &'static str = "text";
    pub const TEXTAREA: &'static str = "textarea";
    pub const NUMBER: &'static str = "number";

    /// Kinds the editor knows how to render
    pub const KNOWN: &'static [&'static str] = &[Self::TEXT, Self::TEXTAREA, Self::NUMBER];

    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    pub fn text() -> Self {
        Self::new(Self::TEXT)
    }

    pub fn textarea() -> Self {
        Self::new(Self::TEXTAREA)
    }

    pub fn number() -> Self {
        Self::new(Self::NUMBER)
    }

    pub fn is_multiline(&self) -> bool {
        self.0 == Self::TEXTAREA
    }

    pub fn is_numeric(&self) -> bool {
        self.0 == Self::NUMBER
    }
}

impl Default for FieldKind {
    fn default() -> Self {
        Self::text()
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
