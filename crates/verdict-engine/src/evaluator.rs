//! First-match rule sweep
//!
//! Walks a decision's rules in declaration order and stops at the
//! first condition that holds. Every probe lands in the trace, so a
//! sweep that matches at position N records exactly N entries and
//! never touches rule N+1.

use crate::decision::Rule;
use crate::result::RuleTrace;

/// The matching rule together with the justification captured at
/// match time
pub(crate) struct Match<'d, I, O, P> {
    pub rule: &'d Rule<I, O, P>,
    pub explanation: String,
}

/// Outcome of one rule sweep
pub(crate) struct RuleEvaluation<'d, I, O, P> {
    /// One entry per probed rule, in declaration order
    pub trace: Vec<RuleTrace>,
    /// The first rule whose condition held, if any
    pub matched: Option<Match<'d, I, O, P>>,
}

/// Probe rules in order, short-circuiting at the first match.
///
/// The justification is computed here, once, for the matching rule
/// only; unmatched rules never have their `explain` invoked.
pub(crate) fn evaluate_rules<'d, I, O, P>(
    rules: &'d [Rule<I, O, P>],
    input: &I,
    profile: &P,
) -> RuleEvaluation<'d, I, O, P> {
    let mut trace = Vec::new();

    for rule in rules {
        if (rule.when)(input, profile) {
            tracing::trace!("rule '{}' matched", rule.id());
            let explanation = (rule.explain)(input, profile);
            trace.push(RuleTrace::new(rule.id()).with_match(explanation.clone()));
            return RuleEvaluation {
                trace,
                matched: Some(Match { rule, explanation }),
            };
        }
        tracing::trace!("rule '{}' did not match", rule.id());
        trace.push(RuleTrace::new(rule.id()));
    }

    RuleEvaluation {
        trace,
        matched: None,
    }
}
