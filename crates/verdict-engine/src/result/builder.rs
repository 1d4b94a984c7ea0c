//! Result assembly
//!
//! `ResultBuilder` turns pipeline outcomes into canonical
//! `DecisionResult`s. Whichever pipeline stage fails first decides the
//! status; the metadata block is stamped once, when the terminal
//! method assembles the result.

use super::result::{DecisionResult, ResultMeta, Status};
use super::trace::RuleTrace;
use chrono::Utc;
use verdict_core::ValidationError;

const NO_MATCH_EXPLANATION: &str = "no rule matched the input";

/// Assembles the result of one evaluation
#[derive(Debug, Clone)]
pub struct ResultBuilder {
    decision_id: String,
    decision_version: String,
    profile_id: Option<String>,
    trace: Vec<RuleTrace>,
}

impl ResultBuilder {
    /// Start a result for the given decision.
    pub fn new(decision_id: impl Into<String>, decision_version: impl Into<String>) -> Self {
        Self {
            decision_id: decision_id.into(),
            decision_version: decision_version.into(),
            profile_id: None,
            trace: Vec::new(),
        }
    }

    /// Record the registry id the profile resolved from.
    pub fn with_profile_id(mut self, profile_id: Option<String>) -> Self {
        self.profile_id = profile_id;
        self
    }

    /// Attach the rule sweep trace.
    pub fn with_trace(mut self, trace: Vec<RuleTrace>) -> Self {
        self.trace = trace;
        self
    }

    /// Input-side failure: unresolved profile, rejected profile, or
    /// rejected input.
    pub fn invalid_input<O>(self, reason: impl Into<String>) -> DecisionResult<O> {
        self.finish(Status::InvalidInput, None, None, reason.into())
    }

    /// Every rule was probed and none matched.
    pub fn no_match<O>(self) -> DecisionResult<O> {
        self.finish(Status::NoMatch, None, None, NO_MATCH_EXPLANATION.to_string())
    }

    /// The matched rule emitted data the output contract rejected.
    pub fn invalid_output<O>(self, rule_id: &str, error: &ValidationError) -> DecisionResult<O> {
        let reason = format!("rule '{}' emitted invalid output: {}", rule_id, error);
        self.finish(Status::InvalidOutput, None, None, reason)
    }

    /// A rule matched and its output validated.
    pub fn ok<O>(
        self,
        rule_id: impl Into<String>,
        explanation: impl Into<String>,
        data: O,
    ) -> DecisionResult<O> {
        let rule_id = rule_id.into();
        self.finish(Status::Ok, Some(data), Some(rule_id), explanation.into())
    }

    fn finish<O>(
        self,
        status: Status,
        data: Option<O>,
        matched_rule: Option<String>,
        explanation: String,
    ) -> DecisionResult<O> {
        DecisionResult {
            status,
            data,
            meta: ResultMeta {
                decision_id: self.decision_id,
                decision_version: self.decision_version,
                profile_id: self.profile_id,
                matched_rule,
                evaluated_rules: self.trace,
                explanation,
                evaluated_at: Utc::now(),
            },
        }
    }
}
