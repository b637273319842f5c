//! Activity API routes

use axum::{extract::State, http::header, response::IntoResponse, Json};
use std::sync::Arc;

use crate::application::dto::{ActivityPreviewDto, UpdateActivityRequest};
use crate::application::services::ActivityEditorService;
use crate::domain::entities::ActivityRecord;
use crate::infrastructure::state::AppState;

/// Get the record being edited
pub async fn get_activity(State(state): State<Arc<AppState>>) -> Json<ActivityRecord> {
    Json(state.editor.current().await)
}

/// Replace scalar attributes
pub async fn update_activity(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateActivityRequest>,
) -> Json<ActivityRecord> {
    Json(state.editor.update_attributes(req).await)
}

/// Restore the seed record
pub async fn reset_activity(State(state): State<Arc<AppState>>) -> Json<ActivityRecord> {
    Json(state.editor.reset().await)
}

/// Preview pane: summaries plus generated code
pub async fn preview_activity(State(state): State<Arc<AppState>>) -> Json<ActivityPreviewDto> {
    Json(state.editor.preview().await)
}

/// Generated script as plain text
pub async fn activity_code(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.editor.generate_code().await,
    )
}
