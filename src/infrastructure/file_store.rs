//! Local directory adapter for exported activity files

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::application::ports::outbound::{FileStoreError, FileStorePort};

/// Writes exported files into a single directory
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, filename: &str) -> Result<PathBuf, FileStoreError> {
        let path = Path::new(filename);
        let is_plain_name = path.file_name().is_some_and(|name| name == path.as_os_str());
        if filename.is_empty() || !is_plain_name {
            return Err(FileStoreError::InvalidFilename(filename.to_string()));
        }
        Ok(self.root.join(path))
    }
}

#[async_trait]
impl FileStorePort for LocalFileStore {
    async fn save(&self, filename: &str, contents: &str) -> Result<PathBuf, FileStoreError> {
        let path = self.resolve(filename)?;

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| FileStoreError::Io(e.to_string()))?;
        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| FileStoreError::Io(e.to_string()))?;

        info!(path = %path.display(), bytes = contents.len(), "Wrote activity file");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_creates_directory_and_writes_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path().join("nested"));

        let path = store.save("feast.txt", "feast = {\n}").await.unwrap();

        assert_eq!(path, dir.path().join("nested").join("feast.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "feast = {\n}");
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_export() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path());

        store.save("feast.txt", "first").await.unwrap();
        let path = store.save("feast.txt", "second").await.unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
    }

    #[tokio::test]
    async fn test_rejects_paths_outside_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path());

        for name in ["", "../escape.txt", "sub/feast.txt", ".."] {
            assert!(
                matches!(
                    store.save(name, "x").await,
                    Err(FileStoreError::InvalidFilename(_))
                ),
                "{name:?} should be rejected"
            );
        }
    }
}
