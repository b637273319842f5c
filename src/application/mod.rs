//! Application layer - Editing session use cases
//!
//! This layer contains:
//! - Services: the editing session over one activity record, file import
//! - DTOs: request and preview shapes for the HTTP surface
//! - Ports: interfaces required from the host (export file storage)

pub mod dto;
pub mod ports;
pub mod services;
