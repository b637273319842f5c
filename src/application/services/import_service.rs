//! Activity file import
//!
//! Reads an uploaded file as text and hands it back for display. The content
//! is not parsed into a record and the editing session is left alone.

use tracing::{debug, info, warn};

use crate::application::dto::ImportedFileDto;

/// Extension accepted for activity files
pub const IMPORT_EXTENSION: &str = "txt";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("File is not valid UTF-8 text")]
    NotText,
    #[error("Unsupported file type: {0} (expected a .txt file)")]
    UnsupportedExtension(String),
    #[error("File is {size} bytes, larger than the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },
}

/// Validate and decode an imported file
pub fn read_import(
    filename: Option<&str>,
    bytes: &[u8],
    max_bytes: usize,
) -> Result<ImportedFileDto, ImportError> {
    if let Some(name) = filename {
        if !has_import_extension(name) {
            warn!(filename = name, "Rejected import with unsupported extension");
            return Err(ImportError::UnsupportedExtension(name.to_string()));
        }
    }

    if bytes.len() > max_bytes {
        warn!(size = bytes.len(), limit = max_bytes, "Rejected oversized import");
        return Err(ImportError::TooLarge {
            size: bytes.len(),
            limit: max_bytes,
        });
    }

    let content = std::str::from_utf8(bytes).map_err(|_| ImportError::NotText)?;

    info!(filename = ?filename, bytes = bytes.len(), "Read imported activity file");
    debug!(content, "Imported file content");

    Ok(ImportedFileDto {
        filename: filename.map(str::to_string),
        content: content.to_string(),
        bytes: bytes.len(),
    })
}

fn has_import_extension(filename: &str) -> bool {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(IMPORT_EXTENSION))
}
