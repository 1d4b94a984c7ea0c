//! The evaluation engine
//!
//! `Engine` is an explicitly constructed, stateless entry point. Every
//! `run` is one synchronous pass through a fixed pipeline: resolve the
//! profile, check the profile, check the input, sweep the rules, check
//! the matched output, assemble the result. There is no hidden global
//! instance; hosts construct engines and share them freely.

use crate::decision::Decision;
use crate::evaluator::evaluate_rules;
use crate::explain;
use crate::profile::{resolve_profile, ProfileArg, ProfileRegistry};
use crate::result::{DecisionResult, ResultBuilder};

/// Per-call options for `Engine::run`
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions<P> {
    /// The profile to evaluate under, inline or by registry name
    pub profile: ProfileArg<P>,
}

impl<P> RunOptions<P> {
    /// Evaluate under a profile value supplied directly.
    pub fn inline(profile: P) -> Self {
        Self {
            profile: ProfileArg::Inline(profile),
        }
    }

    /// Evaluate under a profile registered in the registry.
    pub fn named(id: impl Into<String>) -> Self {
        Self {
            profile: ProfileArg::Named(id.into()),
        }
    }
}

/// Stateless decision evaluator
///
/// Holds no per-call state. One instance may serve any number of
/// threads concurrently, provided rules honor their purity contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine;

impl Engine {
    /// Create an engine.
    pub fn new() -> Self {
        Engine
    }

    /// Evaluate a decision for one input under the given profile.
    ///
    /// Every outcome in the status taxonomy returns normally. Only a
    /// defective rule, one that panics, unwinds out of this call.
    pub fn run<I, O, P>(
        &self,
        decision: &Decision<I, O, P>,
        input: &I,
        options: RunOptions<P>,
        registry: Option<&ProfileRegistry<P>>,
    ) -> DecisionResult<O> {
        tracing::debug!(
            "evaluating decision '{}' v{}",
            decision.id(),
            decision.version()
        );

        let builder = ResultBuilder::new(decision.id(), decision.version());

        let resolved = match resolve_profile(options.profile, registry) {
            Ok(resolved) => resolved,
            Err(error) => {
                tracing::debug!("decision '{}': {}", decision.id(), error);
                return builder.invalid_input(error.to_string());
            }
        };
        let builder = builder.with_profile_id(resolved.id.clone());
        let profile = resolved.value();

        if let Err(error) = decision.check_profile(profile) {
            tracing::debug!("decision '{}': profile rejected: {}", decision.id(), error);
            return builder.invalid_input(format!("profile failed validation: {}", error));
        }

        if let Err(error) = decision.check_input(input) {
            tracing::debug!("decision '{}': input rejected: {}", decision.id(), error);
            return builder.invalid_input(format!("input failed validation: {}", error));
        }

        let evaluation = evaluate_rules(decision.rules(), input, profile);
        let builder = builder.with_trace(evaluation.trace);

        match evaluation.matched {
            None => {
                tracing::debug!("decision '{}': no rule matched", decision.id());
                builder.no_match()
            }
            Some(matched) => {
                let candidate = (matched.rule.emit)(input, profile);
                match decision.check_output(&candidate) {
                    Ok(()) => {
                        tracing::debug!(
                            "decision '{}': rule '{}' matched",
                            decision.id(),
                            matched.rule.id()
                        );
                        builder.ok(matched.rule.id(), matched.explanation, candidate)
                    }
                    Err(error) => {
                        tracing::debug!(
                            "decision '{}': rule '{}' emitted invalid output: {}",
                            decision.id(),
                            matched.rule.id(),
                            error
                        );
                        builder.invalid_output(matched.rule.id(), &error)
                    }
                }
            }
        }
    }

    /// Render a result as a human-readable report.
    ///
    /// Pure formatting of an existing result; nothing is re-evaluated.
    pub fn explain<O>(&self, result: &DecisionResult<O>) -> String {
        explain::render(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::Rule;
    use crate::result::Status;
    use verdict_core::AcceptAny;

    fn threshold_decision() -> Decision<i64, String, i64> {
        Decision::builder("threshold", "1.0.0")
            .input_schema(AcceptAny)
            .output_schema(AcceptAny)
            .profile_schema(AcceptAny)
            .rule(Rule::new(
                "above",
                |input: &i64, profile: &i64| input > profile,
                |_, _| "ABOVE".to_string(),
                |input, profile| format!("{} is above {}", input, profile),
            ))
            .build()
            .unwrap()
    }

    #[test]
    fn test_run_returns_plain_result() {
        let engine = Engine::new();
        let decision = threshold_decision();

        let result = engine.run(&decision, &12, RunOptions::inline(10), None);
        assert_eq!(result.status, Status::Ok);
        assert_eq!(result.data.as_deref(), Some("ABOVE"));
        assert_eq!(result.meta.explanation, "12 is above 10");

        let result = engine.run(&decision, &5, RunOptions::inline(10), None);
        assert_eq!(result.status, Status::NoMatch);
        assert_eq!(result.data, None);
    }

    #[test]
    fn test_engine_is_shareable() {
        let engine = Engine::new();
        let decision = threshold_decision();

        let handle = std::thread::spawn(move || {
            let decision = threshold_decision();
            engine.run(&decision, &12, RunOptions::inline(10), None).status
        });

        let local = engine.run(&decision, &12, RunOptions::inline(10), None);
        assert_eq!(handle.join().unwrap(), Status::Ok);
        assert_eq!(local.status, Status::Ok);
    }
}
