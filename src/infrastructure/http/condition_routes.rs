//! Condition list API routes
//!
//! Conditions are addressed by slot name and position in the list.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::services::ActivityEditorService;
use crate::domain::entities::ConditionSlot;
use crate::domain::value_objects::{Condition, ConditionField};
use crate::infrastructure::http::editor_error_response;
use crate::infrastructure::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateConditionRequest {
    pub field: ConditionField,
    pub value: String,
}

fn parse_slot(slot: &str) -> Result<ConditionSlot, (StatusCode, String)> {
    slot.parse().map_err(|e| (StatusCode::BAD_REQUEST, e))
}

/// List one condition slot
pub async fn list_conditions(
    State(state): State<Arc<AppState>>,
    Path(slot): Path<String>,
) -> Result<Json<Vec<Condition>>, (StatusCode, String)> {
    let slot = parse_slot(&slot)?;
    let record = state.editor.current().await;
    Ok(Json(record.conditions(slot).to_vec()))
}

/// Append a placeholder condition
pub async fn add_condition(
    State(state): State<Arc<AppState>>,
    Path(slot): Path<String>,
) -> Result<(StatusCode, Json<Vec<Condition>>), (StatusCode, String)> {
    let slot = parse_slot(&slot)?;
    let conditions = state.editor.add_condition(slot).await;
    Ok((StatusCode::CREATED, Json(conditions)))
}

/// Replace one attribute of a condition
pub async fn update_condition(
    State(state): State<Arc<AppState>>,
    Path((slot, index)): Path<(String, usize)>,
    Json(req): Json<UpdateConditionRequest>,
) -> Result<Json<Vec<Condition>>, (StatusCode, String)> {
    let slot = parse_slot(&slot)?;
    let conditions = state
        .editor
        .update_condition(slot, index, req.field, req.value)
        .await
        .map_err(editor_error_response)?;
    Ok(Json(conditions))
}

/// Remove a condition
pub async fn delete_condition(
    State(state): State<Arc<AppState>>,
    Path((slot, index)): Path<(String, usize)>,
) -> Result<Json<Vec<Condition>>, (StatusCode, String)> {
    let slot = parse_slot(&slot)?;
    let conditions = state
        .editor
        .remove_condition(slot, index)
        .await
        .map_err(editor_error_response)?;
    Ok(Json(conditions))
}
