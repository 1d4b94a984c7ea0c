//! VERDICT CORE - Shared types for the Verdict Decision Engine
//!
//! This crate provides the data types every Verdict consumer touches:
//! - `Value`: dynamic runtime values for schema-validated decisions
//! - `Schema`, `SchemaField`, `FieldType`: declared data shapes
//! - `Validator`: the seam all input, output, and profile contracts
//!   run through, with schema-driven and hand-written implementations

pub mod types;

// Re-export commonly used types
pub use types::{
    AcceptAny, FieldType, FnValidator, Schema, SchemaField, SchemaValidator, SchemaViolation,
    ValidationError, Validator, Value,
};
