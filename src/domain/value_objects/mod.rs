//! Value objects - Immutable objects defined by their attributes

mod condition;
mod field_kind;
mod ids;

pub use condition::{
    summarize_conditions, Condition, ConditionField, OPERATOR_SUGGESTIONS, SUBJECT_SUGGESTIONS,
};
pub use field_kind::FieldKind;
pub use ids::*;
