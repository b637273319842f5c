//! Script generation for activity definitions
//!
//! Output layout is consumed by the game as-is, so tab depth, line breaks
//! and the blank line before the closing brace are part of the contract.
//! Nothing is quoted or escaped.

use crate::domain::entities::{ActivityRecord, ConditionSlot};
use crate::domain::value_objects::Condition;

const BLOCK_INDENT: &str = "\t";
const CLAUSE_INDENT: &str = "\t\t";

/// Render the activity as a script block
///
/// `name`, `description`, `can_plan` conditions and custom fields are not
/// written.
pub fn generate(record: &ActivityRecord) -> String {
    let mut code = String::new();

    code.push_str(&format!("{} = {{\n", record.activity_type));
    push_condition_block(&mut code, ConditionSlot::IsShown, &record.is_shown_conditions);
    code.push_str(&format!(
        "{}activity_group_type = {}\n",
        BLOCK_INDENT, record.activity_group_type
    ));
    code.push_str(&format!("{}sort_order = {}\n", BLOCK_INDENT, record.sort_order));
    push_condition_block(&mut code, ConditionSlot::CanStart, &record.can_start_conditions);
    push_condition_block(
        &mut code,
        ConditionSlot::CanStartShowingFailuresOnly,
        &record.can_start_showing_failures_only_conditions,
    );
    code.push_str("\n}");

    code
}

/// One clause per line at clause depth, joined without a trailing newline
fn condition_lines(conditions: &[Condition]) -> String {
    conditions
        .iter()
        .map(|c| format!("{}{}", CLAUSE_INDENT, c))
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_condition_block(code: &mut String, slot: ConditionSlot, conditions: &[Condition]) {
    code.push_str(&format!("{}{} = {{\n", BLOCK_INDENT, slot.key()));
    code.push_str(&condition_lines(conditions));
    // An empty list leaves a single blank line as the block body, not an empty block.
    code.push_str(&format!("\n{}}}\n", BLOCK_INDENT));
}
