//! Custom field API routes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::dto::CustomFieldDto;
use crate::application::services::ActivityEditorService;
use crate::domain::entities::CustomField;
use crate::domain::services::visible_fields;
use crate::domain::value_objects::{CustomFieldId, FieldKind};
use crate::infrastructure::http::editor_error_response;
use crate::infrastructure::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListFieldsQuery {
    #[serde(default)]
    pub visible_only: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateFieldRequest {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl From<CreateFieldRequest> for CustomField {
    fn from(req: CreateFieldRequest) -> Self {
        CustomField::new(req.key, req.label, req.kind)
            .with_value(req.value)
            .with_description(req.description)
            .with_required(req.required)
            .with_visible(req.visible)
    }
}

#[derive(Debug, Deserialize)]
pub struct SetFieldValueRequest {
    pub value: String,
}

fn parse_field_id(id: &str) -> Result<CustomFieldId, (StatusCode, String)> {
    id.parse()
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid field ID".to_string()))
}

fn to_dtos(fields: Vec<CustomField>) -> Vec<CustomFieldDto> {
    fields.into_iter().map(CustomFieldDto::from).collect()
}

/// List custom fields, optionally only those shown in the edit panel
pub async fn list_fields(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListFieldsQuery>,
) -> Json<Vec<CustomFieldDto>> {
    let fields = state.editor.current().await.custom_fields;
    let fields = if query.visible_only {
        visible_fields(&fields)
    } else {
        fields
    };
    Json(to_dtos(fields))
}

/// Add a custom field
pub async fn create_field(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateFieldRequest>,
) -> (StatusCode, Json<CustomFieldDto>) {
    let field = state.editor.add_custom_field(req.into()).await;
    (StatusCode::CREATED, Json(CustomFieldDto::from(field)))
}

/// Set a custom field's value
pub async fn set_field_value(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<SetFieldValueRequest>,
) -> Result<Json<CustomFieldDto>, (StatusCode, String)> {
    let id = parse_field_id(&id)?;
    let field = state
        .editor
        .set_custom_field_value(id, req.value)
        .await
        .map_err(editor_error_response)?;
    Ok(Json(CustomFieldDto::from(field)))
}

/// Flip a custom field's visibility
pub async fn toggle_field(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CustomFieldDto>>, (StatusCode, String)> {
    let id = parse_field_id(&id)?;
    let fields = state.editor.toggle_custom_field(id).await;
    Ok(Json(to_dtos(fields)))
}

/// Remove a custom field
pub async fn delete_field(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let id = parse_field_id(&id)?;
    state
        .editor
        .remove_custom_field(id)
        .await
        .map_err(editor_error_response)?;
    Ok(StatusCode::NO_CONTENT)
}
