use std::path::PathBuf;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum FileStoreError {
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),
    #[error("I/O error: {0}")]
    Io(String),
}

/// Destination for exported activity files
///
/// Accepts finished content and a filename; performs no validation of the
/// content itself.
#[async_trait]
pub trait FileStorePort: Send + Sync {
    /// Write `contents` under `filename`, returning where it landed
    async fn save(&self, filename: &str, contents: &str) -> Result<PathBuf, FileStoreError>;
}
