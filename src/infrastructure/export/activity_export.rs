//! Activity script export
//!
//! The exported file is named `{activity_type}.txt` and holds exactly the
//! generated script, UTF-8, with nothing appended.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::application::ports::outbound::{FileStoreError, FileStorePort};
use crate::domain::entities::ActivityRecord;
use crate::domain::services::generate;

/// Warning attached when the activity key is blank
pub const BLANK_ACTIVITY_TYPE_WARNING: &str =
    "Activity key is empty; the exported block has no name";

/// A finished export, ready for download or storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportDocument {
    pub filename: String,
    pub contents: String,
    /// Problems that do not block the export
    pub warnings: Vec<String>,
}

impl ExportDocument {
    /// Build the document for the record
    ///
    /// A blank activity key is reported as a warning and the filename falls
    /// back to `untitled.txt`; the export still goes ahead.
    pub fn from_record(record: &ActivityRecord) -> Self {
        let mut warnings = Vec::new();
        if record.has_blank_activity_type() {
            warn!("Exporting activity with an empty activity key");
            warnings.push(BLANK_ACTIVITY_TYPE_WARNING.to_string());
        }

        Self {
            filename: record.export_filename(),
            contents: generate(record),
            warnings,
        }
    }
}

/// Result of writing an export to the file store
#[derive(Debug, Clone, Serialize)]
pub struct ExportReceipt {
    pub filename: String,
    pub path: PathBuf,
    pub bytes: usize,
    pub warnings: Vec<String>,
}

/// Writes activity exports through a file store
pub struct ActivityExporter {
    store: Arc<dyn FileStorePort>,
}

impl ActivityExporter {
    pub fn new(store: Arc<dyn FileStorePort>) -> Self {
        Self { store }
    }

    /// Render the record and save it under its export filename
    pub async fn export(&self, record: &ActivityRecord) -> Result<ExportReceipt, FileStoreError> {
        let document = ExportDocument::from_record(record);
        let path = self.store.save(&document.filename, &document.contents).await?;

        info!(filename = %document.filename, "Exported activity");
        Ok(ExportReceipt {
            bytes: document.contents.len(),
            filename: document.filename,
            path,
            warnings: document.warnings,
        })
    }
}
