//! Domain entities - Core business objects with identity

mod activity;
mod custom_field;

pub use activity::{ActivityRecord, ConditionSlot};
pub use custom_field::CustomField;
