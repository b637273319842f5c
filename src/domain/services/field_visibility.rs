//! Custom field list operations addressed by field id

use crate::domain::entities::CustomField;
use crate::domain::value_objects::CustomFieldId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomFieldError {
    #[error("Custom field not found: {0}")]
    NotFound(CustomFieldId),
}

/// Flip `visible` on the field with `id`
///
/// An unknown id is not an error: the list comes back unchanged.
pub fn toggle_visibility(fields: &[CustomField], id: CustomFieldId) -> Vec<CustomField> {
    fields
        .iter()
        .map(|field| {
            if field.id == id {
                field.clone().with_visible(!field.visible)
            } else {
                field.clone()
            }
        })
        .collect()
}

/// Set the value of the field with `id`
pub fn set_value(
    fields: &[CustomField],
    id: CustomFieldId,
    value: impl Into<String>,
) -> Result<Vec<CustomField>, CustomFieldError> {
    let index = position(fields, id)?;
    let mut next = fields.to_vec();
    next[index].value = value.into();
    Ok(next)
}

/// Drop the field with `id`
pub fn remove(
    fields: &[CustomField],
    id: CustomFieldId,
) -> Result<Vec<CustomField>, CustomFieldError> {
    position(fields, id)?;
    Ok(fields.iter().filter(|f| f.id != id).cloned().collect())
}

/// Fields rendered in the edit panel
pub fn visible_fields(fields: &[CustomField]) -> Vec<CustomField> {
    fields.iter().filter(|f| f.visible).cloned().collect()
}

fn position(fields: &[CustomField], id: CustomFieldId) -> Result<usize, CustomFieldError> {
    fields
        .iter()
        .position(|f| f.id == id)
        .ok_or(CustomFieldError::NotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::FieldKind;

    fn sample() -> Vec<CustomField> {
        vec![
            CustomField::new("cost", "Cost", FieldKind::number()).with_value("50"),
            CustomField::new("flavor", "Flavor text", FieldKind::textarea())
                .with_description("Shown in the tooltip"),
            CustomField::new("icon", "Icon", FieldKind::text()).with_visible(false),
        ]
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let fields = sample();
        let next = toggle_visibility(&fields, fields[0].id);

        assert!(!next[0].visible);
        assert_eq!(next[0].value, "50");
        assert_eq!(next[1], fields[1]);
        assert_eq!(next[2], fields[2]);
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let fields = sample();
        let id = fields[2].id;
        let twice = toggle_visibility(&toggle_visibility(&fields, id), id);
        assert_eq!(twice, fields);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let fields = sample();
        assert_eq!(toggle_visibility(&fields, CustomFieldId::new()), fields);
        assert!(toggle_visibility(&[], CustomFieldId::new()).is_empty());
    }

    #[test]
    fn test_set_value_by_id() {
        let fields = sample();
        let next = set_value(&fields, fields[1].id, "A grand feast").unwrap();
        assert_eq!(next[1].value, "A grand feast");
        assert_eq!(next[0], fields[0]);

        let missing = CustomFieldId::new();
        assert_eq!(
            set_value(&fields, missing, "x"),
            Err(CustomFieldError::NotFound(missing))
        );
    }

    #[test]
    fn test_remove_by_id() {
        let fields = sample();
        let next = remove(&fields, fields[0].id).unwrap();
        assert_eq!(next, fields[1..].to_vec());
        assert!(remove(&fields, CustomFieldId::new()).is_err());
    }

    #[test]
    fn test_visible_fields_filters_hidden() {
        let fields = sample();
        let keys: Vec<_> = visible_fields(&fields).into_iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["cost", "flavor"]);
    }
}
