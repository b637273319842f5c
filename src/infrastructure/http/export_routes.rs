//! Export and import API routes

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::dto::ImportedFileDto;
use crate::application::ports::outbound::FileStoreError;
use crate::application::services::{read_import, ActivityEditorService, ImportError};
use crate::infrastructure::export::{ExportDocument, ExportReceipt};
use crate::infrastructure::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ImportQuery {
    #[serde(default)]
    pub filename: Option<String>,
}

/// Download the activity file (`{activity_type}.txt`)
pub async fn download_activity(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let document = ExportDocument::from_record(&state.editor.current().await);

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&document.filename)),
        ],
        document.contents,
    )
}

/// Write the activity file into the export directory
pub async fn export_activity(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ExportReceipt>, (StatusCode, String)> {
    let record = state.editor.current().await;
    let receipt = state
        .exporter
        .export(&record)
        .await
        .map_err(|e| {
            let status = match e {
                FileStoreError::InvalidFilename(_) => StatusCode::BAD_REQUEST,
                FileStoreError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, e.to_string())
        })?;
    Ok(Json(receipt))
}

/// `attachment` disposition for a filename taken from user input
///
/// Quotes, backslashes and control characters cannot appear inside the
/// quoted-string, so they are replaced with `_`.
fn content_disposition(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("attachment; filename=\"{}\"", safe)
}

/// Read an uploaded activity file; the body is the raw file content
pub async fn import_activity(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ImportQuery>,
    body: Bytes,
) -> Result<Json<ImportedFileDto>, (StatusCode, String)> {
    let imported = read_import(
        query.filename.as_deref(),
        &body,
        state.config.import_max_bytes,
    )
    .map_err(|e| {
        let status = match e {
            ImportError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ImportError::NotText | ImportError::UnsupportedExtension(_) => StatusCode::BAD_REQUEST,
        };
        (status, e.to_string())
    })?;
    Ok(Json(imported))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_plain_name() {
        assert_eq!(
            content_disposition("tournament.txt"),
            "attachment; filename=\"tournament.txt\""
        );
    }

    #[test]
    fn test_content_disposition_replaces_unsafe_characters() {
        assert_eq!(
            content_disposition("tour\"ney\\x\n\t.txt"),
            "attachment; filename=\"tour_ney_x__.txt\""
        );
    }
}
