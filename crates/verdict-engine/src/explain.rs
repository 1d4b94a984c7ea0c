//! Human-readable result reports
//!
//! Rendering is a pure function of the result. It never re-runs
//! evaluation and never consults the decision, so the same result
//! value always renders to the same bytes.

use crate::result::DecisionResult;
use std::fmt::Write;

/// Render a result as a multi-line report.
///
/// Layout: a header with decision id and version, a status line, a
/// matched-rule line, a reason line, then one line per trace entry
/// with a `[x]`/`[ ]` marker and the entry's justification when it
/// has one.
pub fn render<O>(result: &DecisionResult<O>) -> String {
    let meta = &result.meta;
    let mut report = String::new();

    // String's fmt::Write never fails.
    let _ = writeln!(
        report,
        "decision '{}' v{}",
        meta.decision_id, meta.decision_version
    );
    let _ = writeln!(report, "status: {}", result.status);
    match &meta.matched_rule {
        Some(rule_id) => {
            let _ = writeln!(report, "matched rule: {}", rule_id);
        }
        None => {
            let _ = writeln!(report, "matched rule: none");
        }
    }
    let _ = writeln!(report, "reason: {}", meta.explanation);

    for entry in &meta.evaluated_rules {
        let marker = if entry.matched { "[x]" } else { "[ ]" };
        match &entry.explanation {
            Some(explanation) => {
                let _ = writeln!(report, "  {} {}: {}", marker, entry.rule_id, explanation);
            }
            None => {
                let _ = writeln!(report, "  {} {}", marker, entry.rule_id);
            }
        }
    }

    report
}
