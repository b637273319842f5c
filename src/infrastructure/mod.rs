//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - HTTP: REST API routes for the browser editor
//! - Export: activity file export
//! - File store: local directory adapter for exported files
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod export;
pub mod file_store;
pub mod http;
pub mod state;
