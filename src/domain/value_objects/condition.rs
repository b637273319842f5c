//! Condition clauses - `subject operator value` predicates inside a block

use serde::{Deserialize, Serialize};

use super::ConditionId;

/// Subject written into a freshly added condition
pub const DEFAULT_SUBJECT: &str = "is_landed";
/// Operator written into a freshly added condition
pub const DEFAULT_OPERATOR: &str = "=";
/// Value written into a freshly added condition
pub const DEFAULT_VALUE: &str = "yes";

/// Subjects offered by the editor dropdown. Any other string is accepted.
pub const SUBJECT_SUGGESTIONS: &[&str] = &[
    "is_landed",
    "age",
    "gold",
    "is_available",
    "highest_held_title_tier",
    "is_ai",
    "is_at_war",
    "piety",
    "prestige",
];

/// Comparison operators offered by the editor dropdown
pub const OPERATOR_SUGGESTIONS: &[&str] = &["=", ">=", "<=", ">", "<"];

/// One predicate clause of a condition block
///
/// `subject`, `operator` and `value` are kept as free-form strings: the
/// consuming game decides what they mean, and new triggers or comparison
/// forms must pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Addressing handle for the editor, never written to output
    pub id: ConditionId,
    pub subject: String,
    pub operator: String,
    pub value: String,
}

impl Condition {
    pub fn new(
        subject: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: ConditionId::new(),
            subject: subject.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// Condition inserted by the "add condition" action
    pub fn placeholder() -> Self {
        Self::new(DEFAULT_SUBJECT, DEFAULT_OPERATOR, DEFAULT_VALUE)
    }

    /// Copy of this condition with one attribute replaced
    pub fn with_field(&self, field: ConditionField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            ConditionField::Subject => next.subject = value,
            ConditionField::Operator => next.operator = value,
            ConditionField::Value => next.value = value,
        }
        next
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.subject, self.operator, self.value)
    }
}

/// Editable attribute of a [`Condition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionField {
    /// The fact being tested; the browser client calls this `type`
    #[serde(alias = "type")]
    Subject,
    Operator,
    Value,
}

/// Human-readable one-line summary, e.g. `is_landed = yes; age >= 18`
pub fn summarize_conditions(conditions: &[Condition]) -> String {
    conditions
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_defaults() {
        let condition = Condition::placeholder();
        assert_eq!(condition.subject, "is_landed");
        assert_eq!(condition.operator, "=");
        assert_eq!(condition.value, "yes");
    }

    #[test]
    fn test_with_field_touches_only_that_field() {
        let original = Condition::new("age", ">=", "18");
        let updated = original.with_field(ConditionField::Operator, "<");

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.subject, "age");
        assert_eq!(updated.operator, "<");
        assert_eq!(updated.value, "18");
        assert_eq!(original.operator, ">=");
    }

    #[test]
    fn test_unknown_subjects_pass_through() {
        let condition = Condition::new("has_trait", "=", "brave");
        assert_eq!(condition.to_string(), "has_trait = brave");
        assert!(!SUBJECT_SUGGESTIONS.contains(&"has_trait"));
    }

    #[test]
    fn test_summarize_conditions() {
        let conditions = vec![
            Condition::new("is_landed", "=", "yes"),
            Condition::new("age", ">=", "18"),
        ];
        assert_eq!(summarize_conditions(&conditions), "is_landed = yes; age >= 18");
        assert_eq!(summarize_conditions(&[]), "");
    }

    #[test]
    fn test_condition_field_accepts_type_alias() {
        let field: ConditionField = serde_json::from_str("\"type\"").expect("alias");
        assert_eq!(field, ConditionField::Subject);
        let field: ConditionField = serde_json::from_str("\"value\"").expect("name");
        assert_eq!(field, ConditionField::Value);
    }
}
