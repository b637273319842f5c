//! Domain layer - The activity definition model and pure operations on it
//!
//! This layer contains:
//! - Entities: ActivityRecord, CustomField
//! - Value Objects: Condition, FieldKind, identifiers
//! - Domain Services: condition list editing, field visibility, code generation

pub mod entities;
pub mod services;
pub mod value_objects;
