//! Rule evaluation trace entries

use serde::{Deserialize, Serialize};

/// Record of a single condition probe during a rule sweep
///
/// The full trace is always a prefix of the decision's rule list:
/// every probed rule appears in declaration order, and nothing after
/// the first match is recorded because nothing after it runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTrace {
    /// The rule id
    pub rule_id: String,

    /// Whether the rule's condition held
    pub matched: bool,

    /// The rule's justification; present only on the matching entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl RuleTrace {
    /// Record a probe whose condition did not hold.
    pub fn new(rule_id: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            matched: false,
            explanation: None,
        }
    }

    /// Mark this entry as the match and attach its justification.
    pub fn with_match(mut self, explanation: impl Into<String>) -> Self {
        self.matched = true;
        self.explanation = Some(explanation.into());
        self
    }
}
