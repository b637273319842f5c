//! Application services - Use cases of the editing session

mod activity_editor_service;
mod import_service;

pub use activity_editor_service::{ActivityEditorService, ActivityEditorServiceImpl, EditorError};
pub use import_service::{read_import, ImportError};
