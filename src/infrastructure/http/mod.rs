//! HTTP REST API routes

mod activity_routes;
mod condition_routes;
mod export_routes;
mod field_routes;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::application::dto::SuggestionsDto;
use crate::application::services::EditorError;
use crate::infrastructure::state::AppState;

/// Map session errors onto HTTP statuses
pub(crate) fn editor_error_response(err: EditorError) -> (StatusCode, String) {
    let status = match err {
        EditorError::Conditions(_) => StatusCode::BAD_REQUEST,
        EditorError::CustomField(_) => StatusCode::NOT_FOUND,
    };
    (status, err.to_string())
}

/// Create all API routes
pub fn create_routes(import_max_bytes: usize) -> Router<Arc<AppState>> {
    Router::new()
        // Activity routes
        .route(
            "/api/activity",
            get(activity_routes::get_activity).put(activity_routes::update_activity),
        )
        .route("/api/activity/reset", post(activity_routes::reset_activity))
        .route("/api/activity/preview", get(activity_routes::preview_activity))
        .route("/api/activity/code", get(activity_routes::activity_code))
        // Condition routes
        .route(
            "/api/activity/conditions/{slot}",
            get(condition_routes::list_conditions).post(condition_routes::add_condition),
        )
        .route(
            "/api/activity/conditions/{slot}/{index}",
            put(condition_routes::update_condition).delete(condition_routes::delete_condition),
        )
        // Custom field routes
        .route(
            "/api/activity/fields",
            get(field_routes::list_fields).post(field_routes::create_field),
        )
        .route("/api/activity/fields/{id}", delete(field_routes::delete_field))
        .route("/api/activity/fields/{id}/value", put(field_routes::set_field_value))
        .route("/api/activity/fields/{id}/toggle", post(field_routes::toggle_field))
        // Export / import routes
        .route(
            "/api/activity/export",
            get(export_routes::download_activity).post(export_routes::export_activity),
        )
        .route(
            "/api/activity/import",
            post(export_routes::import_activity)
                .layer(DefaultBodyLimit::max(import_max_bytes.saturating_add(1))),
        )
        .route("/api/suggestions", get(suggestions))
}

/// Build the full application with middleware layers
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(create_routes(state.config.import_max_bytes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

/// Dropdown content for the condition builder and field editor
async fn suggestions() -> Json<SuggestionsDto> {
    Json(SuggestionsDto::default())
}
