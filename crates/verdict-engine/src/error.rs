//! Engine error types

use thiserror::Error;

/// Errors raised while building a decision definition
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DefinitionError {
    /// Decision id is empty
    #[error("Decision id must not be empty")]
    EmptyDecisionId,

    /// One of the three data contracts was not supplied
    #[error("Decision '{decision}' has no {kind} schema")]
    MissingSchema {
        decision: String,
        kind: &'static str,
    },

    /// A rule id is empty
    #[error("Decision '{decision}' contains a rule with an empty id")]
    EmptyRuleId { decision: String },

    /// Two rules share an id
    #[error("Duplicate rule id '{rule}' in decision '{decision}'")]
    DuplicateRuleId { decision: String, rule: String },
}

/// Errors raised while resolving a profile argument
///
/// These never escape `Engine::run`; the engine folds them into an
/// `INVALID_INPUT` result with the error text as the explanation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// A profile was referenced by name but no registry was supplied
    #[error("Profile '{id}' was referenced by name, but no registry was provided")]
    MissingRegistry { id: String },

    /// The registry has no profile under the requested id
    #[error("Profile '{id}' is not registered")]
    UnknownProfile { id: String },
}
