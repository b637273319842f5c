//! Activity Editor Service - the editing session over one activity record
//!
//! The session owns the record exclusively. Each edit takes the write lock,
//! builds a replacement record from the current one and swaps it in, so
//! edits are applied one at a time and readers never see a half-applied
//! change.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::application::dto::{ActivityPreviewDto, UpdateActivityRequest};
use crate::domain::entities::{ActivityRecord, ConditionSlot, CustomField};
use crate::domain::services::{
    generate, remove_field, set_field_value, toggle_visibility, ConditionListEditor,
    ConditionListError, CustomFieldError,
};
use crate::domain::value_objects::{Condition, ConditionField, CustomFieldId};

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error(transparent)]
    Conditions(#[from] ConditionListError),
    #[error(transparent)]
    CustomField(#[from] CustomFieldError),
}

/// Use cases of one editing session
#[async_trait]
pub trait ActivityEditorService: Send + Sync {
    /// Snapshot of the current record
    async fn current(&self) -> ActivityRecord;

    /// Replace scalar attributes
    async fn update_attributes(&self, update: UpdateActivityRequest) -> ActivityRecord;

    /// Go back to the seed record
    async fn reset(&self) -> ActivityRecord;

    /// Append a placeholder condition to a slot, returning the new list
    async fn add_condition(&self, slot: ConditionSlot) -> Vec<Condition>;

    /// Replace one attribute of a condition, returning the new list
    async fn update_condition(
        &self,
        slot: ConditionSlot,
        index: usize,
        field: ConditionField,
        value: String,
    ) -> Result<Vec<Condition>, EditorError>;

    /// Remove a condition, returning the new list
    async fn remove_condition(
        &self,
        slot: ConditionSlot,
        index: usize,
    ) -> Result<Vec<Condition>, EditorError>;

    /// Append a custom field
    async fn add_custom_field(&self, field: CustomField) -> CustomField;

    /// Set a custom field's value by id
    async fn set_custom_field_value(
        &self,
        id: CustomFieldId,
        value: String,
    ) -> Result<CustomField, EditorError>;

    /// Flip a custom field's visibility; unknown ids leave the list as is
    async fn toggle_custom_field(&self, id: CustomFieldId) -> Vec<CustomField>;

    /// Remove a custom field by id
    async fn remove_custom_field(&self, id: CustomFieldId) -> Result<(), EditorError>;

    /// Generated script for the current record
    async fn generate_code(&self) -> String;

    /// Preview pane content for the current record
    async fn preview(&self) -> ActivityPreviewDto;
}

/// In-memory editing session
pub struct ActivityEditorServiceImpl {
    record: RwLock<ActivityRecord>,
}

impl ActivityEditorServiceImpl {
    pub fn new(record: ActivityRecord) -> Self {
        Self {
            record: RwLock::new(record),
        }
    }

    /// Start a session from the example record
    pub fn seeded() -> Self {
        Self::new(ActivityRecord::seed())
    }
}

#[async_trait]
impl ActivityEditorService for ActivityEditorServiceImpl {
    async fn current(&self) -> ActivityRecord {
        self.record.read().await.clone()
    }

    #[instrument(skip(self, update))]
    async fn update_attributes(&self, update: UpdateActivityRequest) -> ActivityRecord {
        let mut record = self.record.write().await;
        let next = update.apply(record.clone());
        debug!(activity_type = %next.activity_type, "Updated activity attributes");
        *record = next.clone();
        next
    }

    #[instrument(skip(self))]
    async fn reset(&self) -> ActivityRecord {
        let seed = ActivityRecord::seed();
        *self.record.write().await = seed.clone();
        info!("Activity reset to seed record");
        seed
    }

    #[instrument(skip(self))]
    async fn add_condition(&self, slot: ConditionSlot) -> Vec<Condition> {
        let mut record = self.record.write().await;
        let conditions = ConditionListEditor::new(record.conditions(slot)).add();
        debug!(%slot, len = conditions.len(), "Added condition");
        *record = record.clone().with_conditions(slot, conditions.clone());
        conditions
    }

    #[instrument(skip(self, value))]
    async fn update_condition(
        &self,
        slot: ConditionSlot,
        index: usize,
        field: ConditionField,
        value: String,
    ) -> Result<Vec<Condition>, EditorError> {
        let mut record = self.record.write().await;
        let conditions =
            ConditionListEditor::new(record.conditions(slot)).update(index, field, value)?;
        debug!(%slot, index, ?field, "Updated condition");
        *record = record.clone().with_conditions(slot, conditions.clone());
        Ok(conditions)
    }

    #[instrument(skip(self))]
    async fn remove_condition(
        &self,
        slot: ConditionSlot,
        index: usize,
    ) -> Result<Vec<Condition>, EditorError> {
        let mut record = self.record.write().await;
        let conditions = ConditionListEditor::new(record.conditions(slot)).remove(index)?;
        debug!(%slot, index, "Removed condition");
        *record = record.clone().with_conditions(slot, conditions.clone());
        Ok(conditions)
    }

    #[instrument(skip(self, field), fields(key = %field.key))]
    async fn add_custom_field(&self, field: CustomField) -> CustomField {
        let mut record = self.record.write().await;
        let mut fields = record.custom_fields.clone();
        fields.push(field.clone());
        *record = record.clone().with_custom_fields(fields);
        info!(field_id = %field.id, "Added custom field");
        field
    }

    #[instrument(skip(self, value))]
    async fn set_custom_field_value(
        &self,
        id: CustomFieldId,
        value: String,
    ) -> Result<CustomField, EditorError> {
        let mut record = self.record.write().await;
        let fields = set_field_value(&record.custom_fields, id, value)?;
        let updated = fields
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or(CustomFieldError::NotFound(id))?;
        *record = record.clone().with_custom_fields(fields);
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn toggle_custom_field(&self, id: CustomFieldId) -> Vec<CustomField> {
        let mut record = self.record.write().await;
        let fields = toggle_visibility(&record.custom_fields, id);
        *record = record.clone().with_custom_fields(fields.clone());
        fields
    }

    #[instrument(skip(self))]
    async fn remove_custom_field(&self, id: CustomFieldId) -> Result<(), EditorError> {
        let mut record = self.record.write().await;
        let fields = remove_field(&record.custom_fields, id)?;
        *record = record.clone().with_custom_fields(fields);
        info!(field_id = %id, "Removed custom field");
        Ok(())
    }

    async fn generate_code(&self) -> String {
        generate(&*self.record.read().await)
    }

    async fn preview(&self) -> ActivityPreviewDto {
        ActivityPreviewDto::from(&*self.record.read().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::FieldKind;

    #[tokio::test]
    async fn test_session_starts_from_seed() {
        let service = ActivityEditorServiceImpl::seeded();
        let record = service.current().await;
        let seed = ActivityRecord::seed();

        assert_eq!(record.activity_type, seed.activity_type);
        assert_eq!(record.name, seed.name);
        for slot in ConditionSlot::ALL {
            let current: Vec<_> = record.conditions(slot).iter().map(|c| c.to_string()).collect();
            let expected: Vec<_> = seed.conditions(slot).iter().map(|c| c.to_string()).collect();
            assert_eq!(current, expected);
        }
    }

    #[tokio::test]
    async fn test_condition_edits_touch_one_slot() {
        let service = ActivityEditorServiceImpl::new(ActivityRecord::new("feast"));

        let list = service.add_condition(ConditionSlot::CanStart).await;
        assert_eq!(list.len(), 1);

        let list = service
            .update_condition(ConditionSlot::CanStart, 0, ConditionField::Value, "no".to_string())
            .await
            .expect("index in range");
        assert_eq!(list[0].to_string(), "is_landed = no");

        let record = service.current().await;
        assert_eq!(record.can_start_conditions, list);
        assert!(record.is_shown_conditions.is_empty());
        assert!(record.can_plan_conditions.is_empty());
    }

    #[tokio::test]
    async fn test_out_of_range_leaves_record_unchanged() {
        let service = ActivityEditorServiceImpl::seeded();
        let before = service.current().await;

        let err = service
            .remove_condition(ConditionSlot::IsShown, 5)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EditorError::Conditions(ConditionListError::IndexOutOfRange { index: 5, len: 1 })
        ));
        assert_eq!(service.current().await, before);
    }

    #[tokio::test]
    async fn test_custom_field_lifecycle() {
        let service = ActivityEditorServiceImpl::new(ActivityRecord::new("feast"));
        let field = service
            .add_custom_field(CustomField::new("cost", "Cost", FieldKind::number()))
            .await;

        let updated = service
            .set_custom_field_value(field.id, "75".to_string())
            .await
            .expect("field exists");
        assert_eq!(updated.value, "75");

        let fields = service.toggle_custom_field(field.id).await;
        assert!(!fields[0].visible);
        let fields = service.toggle_custom_field(field.id).await;
        assert!(fields[0].visible);

        service.remove_custom_field(field.id).await.expect("field exists");
        assert!(service.current().await.custom_fields.is_empty());
        assert!(service.remove_custom_field(field.id).await.is_err());
    }

    #[tokio::test]
    async fn test_toggle_unknown_field_is_noop() {
        let service = ActivityEditorServiceImpl::new(ActivityRecord::new("feast"));
        service
            .add_custom_field(CustomField::new("cost", "Cost", FieldKind::number()))
            .await;
        let before = service.current().await;

        service.toggle_custom_field(CustomFieldId::new()).await;

        assert_eq!(service.current().await, before);
    }

    #[tokio::test]
    async fn test_update_attributes_and_reset() {
        let service = ActivityEditorServiceImpl::seeded();
        let record = service
            .update_attributes(UpdateActivityRequest {
                activity_type: Some("tournament".to_string()),
                ..Default::default()
            })
            .await;
        assert_eq!(record.activity_type, "tournament");
        assert!(service.generate_code().await.starts_with("tournament = {\n"));

        let record = service.reset().await;
        assert_eq!(record.activity_type, "activity_type");
        assert_eq!(service.preview().await.activity_type, "activity_type");
    }
}
