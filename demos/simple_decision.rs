//! Simple decision evaluation example
//!
//! This example demonstrates:
//! - Building a Decision with schema-validated input, output, and profile
//! - Running it through the Engine with an inline profile
//! - Printing the human-readable report and the serialized result

use verdict_core::{FieldType, Schema, SchemaField, SchemaValidator, Value};
use verdict_engine::{Decision, Engine, Rule, RunOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Simple Decision Example ===\n");

    let input_schema = Schema::new("CheckoutInput")
        .add_field(SchemaField::new("amount", FieldType::Number).required());
    let output_schema = Schema::new("RiskOutput")
        .add_field(SchemaField::new("risk", FieldType::String).required());
    let profile_schema = Schema::new("RiskProfile")
        .add_field(SchemaField::new("threshold", FieldType::Number).required());

    let decision: Decision<Value, Value, Value> = Decision::builder("checkout-risk", "1.0.0")
        .meta("owner", "risk-team")
        .input_schema(SchemaValidator::new(input_schema))
        .output_schema(SchemaValidator::new(output_schema))
        .profile_schema(SchemaValidator::new(profile_schema))
        .rule(Rule::new(
            "high",
            |input: &Value, profile: &Value| amount(input) > threshold(profile),
            |_, _| Value::object([("risk", Value::from("HIGH"))]),
            |input: &Value, profile: &Value| {
                format!(
                    "amount {} exceeds threshold {}",
                    amount(input),
                    threshold(profile)
                )
            },
        ))
        .rule(Rule::new(
            "low",
            |_: &Value, _: &Value| true,
            |_, _| Value::object([("risk", Value::from("LOW"))]),
            |_, _| "amount within threshold".to_string(),
        ))
        .build()?;

    let engine = Engine::new();
    let profile = Value::object([("threshold", Value::from(10_000.0))]);

    for amount in [15_000.0, 500.0] {
        let input = Value::object([("amount", Value::from(amount))]);
        let result = engine.run(&decision, &input, RunOptions::inline(profile.clone()), None);

        println!("{}", engine.explain(&result));
        println!("{}\n", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}

fn amount(input: &Value) -> f64 {
    input.get("amount").and_then(Value::as_number).unwrap_or(0.0)
}

fn threshold(profile: &Value) -> f64 {
    profile
        .get("threshold")
        .and_then(Value::as_number)
        .unwrap_or(0.0)
}
