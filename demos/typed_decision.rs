//! Typed decision example
//!
//! This example demonstrates:
//! - Decisions over plain Rust structs instead of dynamic values
//! - Hand-written validators behind the same seam schemas use
//! - Serializing a typed result for downstream consumers

use serde::Serialize;
use verdict_engine::{
    AcceptAny, Decision, Engine, FnValidator, Rule, RunOptions, ValidationError,
};

#[derive(Debug, Clone)]
struct LoanApplication {
    amount: f64,
    term_months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct LoanVerdict {
    approved: bool,
    band: String,
}

#[derive(Debug, Clone)]
struct LendingProfile {
    max_amount: f64,
    max_term_months: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Typed Decision Example ===\n");

    let decision: Decision<LoanApplication, LoanVerdict, LendingProfile> =
        Decision::builder("loan-screen", "1.2.0")
            .input_schema(FnValidator(|application: &LoanApplication| {
                if application.amount <= 0.0 {
                    return Err(ValidationError::new("amount must be positive"));
                }
                if application.term_months == 0 {
                    return Err(ValidationError::new("term must be at least one month"));
                }
                Ok(())
            }))
            .output_schema(AcceptAny)
            .profile_schema(FnValidator(|profile: &LendingProfile| {
                if profile.max_amount <= 0.0 {
                    return Err(ValidationError::new("max_amount must be positive"));
                }
                Ok(())
            }))
            .rule(Rule::new(
                "over-limit",
                |application: &LoanApplication, profile: &LendingProfile| {
                    application.amount > profile.max_amount
                },
                |_, _| LoanVerdict {
                    approved: false,
                    band: "DECLINE".to_string(),
                },
                |application, profile| {
                    format!(
                        "requested {} is over the lending limit {}",
                        application.amount, profile.max_amount
                    )
                },
            ))
            .rule(Rule::new(
                "long-term",
                |application: &LoanApplication, profile: &LendingProfile| {
                    application.term_months > profile.max_term_months
                },
                |_, _| LoanVerdict {
                    approved: false,
                    band: "REFER".to_string(),
                },
                |application, _| format!("term of {} months needs review", application.term_months),
            ))
            .rule(Rule::new(
                "in-policy",
                |_: &LoanApplication, _: &LendingProfile| true,
                |_, _| LoanVerdict {
                    approved: true,
                    band: "STANDARD".to_string(),
                },
                |_, _| "application is within policy".to_string(),
            ))
            .build()?;

    let engine = Engine::new();
    let profile = LendingProfile {
        max_amount: 50_000.0,
        max_term_months: 60,
    };

    let applications = [
        LoanApplication {
            amount: 80_000.0,
            term_months: 24,
        },
        LoanApplication {
            amount: 20_000.0,
            term_months: 72,
        },
        LoanApplication {
            amount: 20_000.0,
            term_months: 24,
        },
    ];

    for application in &applications {
        let result = engine.run(
            &decision,
            application,
            RunOptions::inline(profile.clone()),
            None,
        );
        println!("{}", engine.explain(&result));
        println!("{}\n", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}
