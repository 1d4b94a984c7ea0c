//! VERDICT ENGINE - Deterministic rule evaluation for the Verdict
//! Decision Engine
//!
//! This crate provides the evaluation half of Verdict:
//! - `Decision` and `Rule` definitions over typed inputs, outputs,
//!   and profiles
//! - `ProfileRegistry` for resolving profiles by name
//! - `Engine::run`: one fixed pipeline from profile resolution to a
//!   fully assembled `DecisionResult`
//! - `Engine::explain`: deterministic human-readable reports
//!
//! Evaluation is synchronous and total: every outcome in the status
//! taxonomy comes back as a `DecisionResult`, never as an error.

pub mod decision;
pub mod engine;
pub mod error;
pub mod explain;
pub mod profile;
pub mod result;

mod evaluator;

// Re-export main types
pub use decision::{Decision, DecisionBuilder, Rule};
pub use engine::{Engine, RunOptions};
pub use error::{DefinitionError, ResolveError};
pub use profile::{ProfileArg, ProfileRegistry};
pub use result::{DecisionResult, ResultBuilder, ResultMeta, RuleTrace, Status};

// Re-export commonly used types from dependencies
pub use verdict_core::{
    AcceptAny, FieldType, FnValidator, Schema, SchemaField, SchemaValidator, ValidationError,
    Validator, Value,
};
