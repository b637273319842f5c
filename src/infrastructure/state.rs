//! Shared application state

use std::sync::Arc;

use crate::application::services::ActivityEditorServiceImpl;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::export::ActivityExporter;
use crate::infrastructure::file_store::LocalFileStore;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    /// The one editing session this process serves
    pub editor: ActivityEditorServiceImpl,
    pub exporter: ActivityExporter,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let file_store = Arc::new(LocalFileStore::new(config.export_dir.clone()));

        Self {
            editor: ActivityEditorServiceImpl::seeded(),
            exporter: ActivityExporter::new(file_store),
            config,
        }
    }
}
