//! Integration tests for decisions over plain Rust types

use serde::Serialize;
use verdict_core::{AcceptAny, FnValidator, ValidationError};
use verdict_engine::{Decision, Engine, ProfileRegistry, Rule, RunOptions, Status};

#[derive(Debug, Clone, PartialEq)]
struct Transfer {
    amount: f64,
    internal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
enum Approval {
    Granted,
    Escalated,
}

#[derive(Debug, Clone, PartialEq)]
struct TransferPolicy {
    auto_approve_limit: f64,
}

fn transfer_decision() -> Decision<Transfer, Approval, TransferPolicy> {
    Decision::builder("transfer-approval", "3.0.0")
        .input_schema(FnValidator(|transfer: &Transfer| {
            if transfer.amount.is_finite() {
                Ok(())
            } else {
                Err(ValidationError::new("amount must be a finite number"))
            }
        }))
        .output_schema(AcceptAny)
        .profile_schema(FnValidator(|policy: &TransferPolicy| {
            if policy.auto_approve_limit > 0.0 {
                Ok(())
            } else {
                Err(ValidationError::new("auto_approve_limit must be positive"))
            }
        }))
        .rule(Rule::new(
            "small-internal",
            |transfer: &Transfer, policy: &TransferPolicy| {
                transfer.internal && transfer.amount <= policy.auto_approve_limit
            },
            |_, _| Approval::Granted,
            |transfer, _| format!("internal transfer of {} auto-approved", transfer.amount),
        ))
        .rule(Rule::new(
            "everything-else",
            |_: &Transfer, _: &TransferPolicy| true,
            |_, _| Approval::Escalated,
            |_, _| "transfer requires manual review".to_string(),
        ))
        .build()
        .expect("typed decision builds")
}

#[test]
fn test_typed_end_to_end() {
    let engine = Engine::new();
    let decision = transfer_decision();
    let policy = TransferPolicy {
        auto_approve_limit: 1_000.0,
    };

    let result = engine.run(
        &decision,
        &Transfer {
            amount: 250.0,
            internal: true,
        },
        RunOptions::inline(policy.clone()),
        None,
    );
    assert_eq!(result.status, Status::Ok);
    assert_eq!(result.data, Some(Approval::Granted));
    assert_eq!(result.meta.matched_rule.as_deref(), Some("small-internal"));

    let result = engine.run(
        &decision,
        &Transfer {
            amount: 250.0,
            internal: false,
        },
        RunOptions::inline(policy),
        None,
    );
    assert_eq!(result.status, Status::Ok);
    assert_eq!(result.data, Some(Approval::Escalated));
}

#[test]
fn test_typed_validator_rejects_input() {
    let engine = Engine::new();
    let decision = transfer_decision();

    let result = engine.run(
        &decision,
        &Transfer {
            amount: f64::NAN,
            internal: true,
        },
        RunOptions::inline(TransferPolicy {
            auto_approve_limit: 1_000.0,
        }),
        None,
    );

    assert_eq!(result.status, Status::InvalidInput);
    assert_eq!(result.data, None);
    assert!(result
        .meta
        .explanation
        .contains("amount must be a finite number"));
}

#[test]
fn test_typed_validator_rejects_profile() {
    let engine = Engine::new();
    let decision = transfer_decision();

    let result = engine.run(
        &decision,
        &Transfer {
            amount: 250.0,
            internal: true,
        },
        RunOptions::inline(TransferPolicy {
            auto_approve_limit: 0.0,
        }),
        None,
    );

    assert_eq!(result.status, Status::InvalidInput);
    assert!(result
        .meta
        .explanation
        .contains("auto_approve_limit must be positive"));
}

#[test]
fn test_typed_profiles_resolve_from_registry() {
    let engine = Engine::new();
    let decision = transfer_decision();

    let mut registry = ProfileRegistry::new();
    registry.register(
        "retail",
        TransferPolicy {
            auto_approve_limit: 1_000.0,
        },
    );
    registry.register(
        "treasury",
        TransferPolicy {
            auto_approve_limit: 250_000.0,
        },
    );

    let transfer = Transfer {
        amount: 50_000.0,
        internal: true,
    };

    let retail = engine.run(
        &decision,
        &transfer,
        RunOptions::named("retail"),
        Some(&registry),
    );
    assert_eq!(retail.data, Some(Approval::Escalated));
    assert_eq!(retail.meta.profile_id.as_deref(), Some("retail"));

    let treasury = engine.run(
        &decision,
        &transfer,
        RunOptions::named("treasury"),
        Some(&registry),
    );
    assert_eq!(treasury.data, Some(Approval::Granted));
    assert_eq!(treasury.meta.profile_id.as_deref(), Some("treasury"));
}

#[test]
fn test_typed_result_serializes() {
    let engine = Engine::new();
    let decision = transfer_decision();

    let result = engine.run(
        &decision,
        &Transfer {
            amount: 250.0,
            internal: true,
        },
        RunOptions::inline(TransferPolicy {
            auto_approve_limit: 1_000.0,
        }),
        None,
    );

    let wire: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(wire["status"], "OK");
    assert_eq!(wire["data"], "Granted");
    assert_eq!(wire["meta"]["matched_rule"], "small-internal");
}
