//! Domain services - Pure operations over the activity model

mod code_generator;
mod condition_list;
mod field_visibility;

pub use code_generator::generate;
pub use condition_list::{ConditionListEditor, ConditionListError};
pub use field_visibility::{
    remove as remove_field, set_value as set_field_value, toggle_visibility, visible_fields,
    CustomFieldError,
};
