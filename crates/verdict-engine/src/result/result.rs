//! Evaluation result types
//!
//! `DecisionResult` is the single value an evaluation produces. Every
//! outcome in the status taxonomy is expressed as plain data, never as
//! an `Err` or a panic, so hosts can serialize and route results
//! without special cases.

use super::trace::RuleTrace;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal status of an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// A rule matched and its output passed the output contract
    Ok,
    /// Every rule was probed and none matched. A valid business
    /// outcome, not an error.
    NoMatch,
    /// Profile resolution or input-side validation failed
    InvalidInput,
    /// The matched rule emitted data that failed the output contract
    InvalidOutput,
}

impl Status {
    /// Wire spelling of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::NoMatch => "NO_MATCH",
            Status::InvalidInput => "INVALID_INPUT",
            Status::InvalidOutput => "INVALID_OUTPUT",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit metadata attached to every result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultMeta {
    /// Id of the evaluated decision
    pub decision_id: String,

    /// Version of the evaluated decision
    pub decision_version: String,

    /// Registry id the profile was resolved from; absent for inline
    /// profiles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,

    /// Id of the matching rule; present only when the status is OK
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_rule: Option<String>,

    /// One entry per probed rule, in declaration order
    pub evaluated_rules: Vec<RuleTrace>,

    /// The matched rule's justification on OK, a synthesized
    /// description on every other status
    pub explanation: String,

    /// When the result was assembled (UTC, ISO 8601 on the wire)
    pub evaluated_at: DateTime<Utc>,
}

/// Result of evaluating a decision for one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult<O> {
    /// Terminal status
    pub status: Status,

    /// Validated output of the matching rule; `None` on every non-OK
    /// status
    pub data: Option<O>,

    /// Audit metadata
    pub meta: ResultMeta,
}

impl<O> DecisionResult<O> {
    /// Check whether a rule matched and its output validated.
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}
