//! Condition list editing
//!
//! Operations never touch the borrowed list; each returns the replacement
//! list for the caller to store.

use crate::domain::value_objects::{Condition, ConditionField};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConditionListError {
    #[error("Condition index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Editor over one ordered condition list
#[derive(Debug, Clone, Copy)]
pub struct ConditionListEditor<'a> {
    conditions: &'a [Condition],
}

impl<'a> ConditionListEditor<'a> {
    pub fn new(conditions: &'a [Condition]) -> Self {
        Self { conditions }
    }

    /// Append a placeholder `is_landed = yes` condition with a fresh id
    pub fn add(&self) -> Vec<Condition> {
        let mut next = self.conditions.to_vec();
        next.push(Condition::placeholder());
        next
    }

    /// Replace one attribute of the condition at `index`
    pub fn update(
        &self,
        index: usize,
        field: ConditionField,
        value: impl Into<String>,
    ) -> Result<Vec<Condition>, ConditionListError> {
        let target = self.get(index)?;
        let mut next = self.conditions.to_vec();
        next[index] = target.with_field(field, value);
        Ok(next)
    }

    /// Drop the condition at `index`, keeping the others in order
    pub fn remove(&self, index: usize) -> Result<Vec<Condition>, ConditionListError> {
        self.get(index)?;
        Ok(self
            .conditions
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, c)| c.clone())
            .collect())
    }

    fn get(&self, index: usize) -> Result<&'a Condition, ConditionListError> {
        self.conditions
            .get(index)
            .ok_or(ConditionListError::IndexOutOfRange {
                index,
                len: self.conditions.len(),
            })
    }
}
