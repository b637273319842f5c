//! Outbound ports - Interfaces that the application requires from external systems

mod file_store_port;

pub use file_store_port::{FileStoreError, FileStorePort};
