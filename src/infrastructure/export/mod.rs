//! Activity export functionality
//!
//! Renders the activity script and hands it to a file destination:
//! - [`ExportDocument`]: filename + content + warnings, used for downloads
//! - [`ActivityExporter`]: writes the document through a [`FileStorePort`]
//!
//! [`FileStorePort`]: crate::application::ports::outbound::FileStorePort

mod activity_export;

pub use activity_export::{ActivityExporter, ExportDocument, ExportReceipt};
