//! Activity record - the aggregate being authored
//!
//! Every edit produces a new record: each condition list and the custom
//! field list is an owned value that is swapped out as a whole.

use serde::{Deserialize, Serialize};

use crate::domain::entities::CustomField;
use crate::domain::value_objects::Condition;

/// Group written when the author has not chosen one
pub const DEFAULT_ACTIVITY_GROUP_TYPE: &str = "activities";

/// Stem used for the export file when the activity key is blank
pub const FALLBACK_FILE_STEM: &str = "untitled";

/// One activity type definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Key of the output block and stem of the export filename
    pub activity_type: String,
    /// Display only, not written by the generator
    pub name: String,
    /// Display only, not written by the generator
    pub description: String,
    pub is_shown_conditions: Vec<Condition>,
    pub activity_group_type: String,
    /// Integer held as text and written verbatim
    pub sort_order: String,
    pub can_start_conditions: Vec<Condition>,
    pub can_start_showing_failures_only_conditions: Vec<Condition>,
    /// Tracked but not yet written by the generator
    pub can_plan_conditions: Vec<Condition>,
    pub custom_fields: Vec<CustomField>,
}

impl ActivityRecord {
    pub fn new(activity_type: impl Into<String>) -> Self {
        Self {
            activity_type: activity_type.into(),
            name: String::new(),
            description: String::new(),
            is_shown_conditions: Vec::new(),
            activity_group_type: DEFAULT_ACTIVITY_GROUP_TYPE.to_string(),
            sort_order: "0".to_string(),
            can_start_conditions: Vec::new(),
            can_start_showing_failures_only_conditions: Vec::new(),
            can_plan_conditions: Vec::new(),
            custom_fields: Vec::new(),
        }
    }

    /// The example record an editing session starts from
    pub fn seed() -> Self {
        Self::new("activity_type")
            .with_name("Custom Activity")
            .with_description("A custom activity")
            .with_condition(ConditionSlot::IsShown, Condition::new("is_landed", "=", "yes"))
            .with_condition(ConditionSlot::CanStart, Condition::new("is_available", "=", "yes"))
            .with_condition(
                ConditionSlot::CanStartShowingFailuresOnly,
                Condition::new("age", ">=", "18"),
            )
            .with_condition(ConditionSlot::CanPlan, Condition::new("gold", ">=", "100"))
    }

    pub fn with_activity_type(mut self, activity_type: impl Into<String>) -> Self {
        self.activity_type = activity_type.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_activity_group_type(mut self, group: impl Into<String>) -> Self {
        self.activity_group_type = group.into();
        self
    }

    pub fn with_sort_order(mut self, sort_order: impl Into<String>) -> Self {
        self.sort_order = sort_order.into();
        self
    }

    pub fn with_condition(mut self, slot: ConditionSlot, condition: Condition) -> Self {
        self.slot_mut(slot).push(condition);
        self
    }

    /// Replace one condition list wholesale
    pub fn with_conditions(mut self, slot: ConditionSlot, conditions: Vec<Condition>) -> Self {
        *self.slot_mut(slot) = conditions;
        self
    }

    /// Replace the custom field list wholesale
    pub fn with_custom_fields(mut self, fields: Vec<CustomField>) -> Self {
        self.custom_fields = fields;
        self
    }

    pub fn conditions(&self, slot: ConditionSlot) -> &[Condition] {
        match slot {
            ConditionSlot::IsShown => &self.is_shown_conditions,
            ConditionSlot::CanStart => &self.can_start_conditions,
            ConditionSlot::CanStartShowingFailuresOnly => {
                &self.can_start_showing_failures_only_conditions
            }
            ConditionSlot::CanPlan => &self.can_plan_conditions,
        }
    }

    fn slot_mut(&mut self, slot: ConditionSlot) -> &mut Vec<Condition> {
        match slot {
            ConditionSlot::IsShown => &mut self.is_shown_conditions,
            ConditionSlot::CanStart => &mut self.can_start_conditions,
            ConditionSlot::CanStartShowingFailuresOnly => {
                &mut self.can_start_showing_failures_only_conditions
            }
            ConditionSlot::CanPlan => &mut self.can_plan_conditions,
        }
    }

    /// True when the block key is blank and the export would be malformed
    pub fn has_blank_activity_type(&self) -> bool {
        self.activity_type.trim().is_empty()
    }

    /// `{activity_type}.txt`, or `untitled.txt` for a blank key
    pub fn export_filename(&self) -> String {
        if self.has_blank_activity_type() {
            format!("{}.txt", FALLBACK_FILE_STEM)
        } else {
            format!("{}.txt", self.activity_type)
        }
    }
}

/// The four independently edited condition lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionSlot {
    /// Who can see the activity
    IsShown,
    /// Who can start it, all requirements listed
    CanStart,
    /// Who can start it, only failed requirements listed
    CanStartShowingFailuresOnly,
    /// Reserved planning requirements
    CanPlan,
}

impl ConditionSlot {
    pub const ALL: [ConditionSlot; 4] = [
        Self::IsShown,
        Self::CanStart,
        Self::CanStartShowingFailuresOnly,
        Self::CanPlan,
    ];

    /// Block key in the generated script
    pub fn key(&self) -> &'static str {
        match self {
            Self::IsShown => "is_shown",
            Self::CanStart => "can_start",
            Self::CanStartShowingFailuresOnly => "can_start_showing_failures_only",
            Self::CanPlan => "can_plan",
        }
    }
}

impl std::fmt::Display for ConditionSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for ConditionSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.key() == s)
            .ok_or_else(|| format!("Unknown condition slot: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_defaults() {
        let record = ActivityRecord::new("feast");
        assert_eq!(record.activity_group_type, "activities");
        assert_eq!(record.sort_order, "0");
        for slot in ConditionSlot::ALL {
            assert!(record.conditions(slot).is_empty());
        }
    }

    #[test]
    fn test_seed_fills_every_slot() {
        let record = ActivityRecord::seed();
        assert_eq!(record.activity_type, "activity_type");
        assert_eq!(record.conditions(ConditionSlot::IsShown)[0].subject, "is_landed");
        assert_eq!(record.conditions(ConditionSlot::CanStart)[0].subject, "is_available");
        assert_eq!(
            record.conditions(ConditionSlot::CanStartShowingFailuresOnly)[0].to_string(),
            "age >= 18"
        );
        assert_eq!(record.conditions(ConditionSlot::CanPlan)[0].to_string(), "gold >= 100");
        assert!(record.custom_fields.is_empty());
    }

    #[test]
    fn test_with_conditions_replaces_only_that_slot() {
        let record = ActivityRecord::seed();
        let before = record.clone();
        let replacement = vec![Condition::new("piety", ">", "50")];

        let record = record.with_conditions(ConditionSlot::CanStart, replacement.clone());

        assert_eq!(record.can_start_conditions, replacement);
        assert_eq!(record.is_shown_conditions, before.is_shown_conditions);
        assert_eq!(
            record.can_start_showing_failures_only_conditions,
            before.can_start_showing_failures_only_conditions
        );
        assert_eq!(record.can_plan_conditions, before.can_plan_conditions);
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(ActivityRecord::new("tournament").export_filename(), "tournament.txt");
        assert_eq!(ActivityRecord::new("").export_filename(), "untitled.txt");
        assert_eq!(ActivityRecord::new("  ").export_filename(), "untitled.txt");
    }

    #[test]
    fn test_slot_parsing() {
        for slot in ConditionSlot::ALL {
            assert_eq!(slot.key().parse::<ConditionSlot>(), Ok(slot));
        }
        assert!("can_fly".parse::<ConditionSlot>().is_err());
    }
}
