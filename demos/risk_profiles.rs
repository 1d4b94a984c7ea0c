//! Profile registry example
//!
//! This example demonstrates:
//! - Loading schemas from YAML definitions
//! - Registering market profiles and resolving them by name
//! - How an unregistered profile name surfaces as INVALID_INPUT

use verdict_engine::{
    Decision, Engine, ProfileRegistry, Rule, RunOptions, Schema, SchemaValidator, Value,
};

const INPUT_SCHEMA: &str = r#"
name: CheckoutInput
fields:
  amount:
    name: amount
    field_type: number
    required: true
    min: 0.0
"#;

const OUTPUT_SCHEMA: &str = r#"
name: RiskOutput
fields:
  risk:
    name: risk
    field_type: string
    required: true
"#;

const PROFILE_SCHEMA: &str = r#"
name: MarketProfile
fields:
  threshold:
    name: threshold
    field_type: number
    required: true
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Risk Profiles Example ===\n");

    let input_schema: Schema = serde_yaml::from_str(INPUT_SCHEMA)?;
    let output_schema: Schema = serde_yaml::from_str(OUTPUT_SCHEMA)?;
    let profile_schema: Schema = serde_yaml::from_str(PROFILE_SCHEMA)?;

    let decision: Decision<Value, Value, Value> = Decision::builder("checkout-risk", "2.3.0")
        .input_schema(SchemaValidator::new(input_schema))
        .output_schema(SchemaValidator::new(output_schema))
        .profile_schema(SchemaValidator::new(profile_schema))
        .rule(Rule::new(
            "high",
            |input: &Value, profile: &Value| amount(input) > threshold(profile),
            |_, _| Value::object([("risk", Value::from("HIGH"))]),
            |input: &Value, profile: &Value| {
                format!(
                    "amount {} exceeds market threshold {}",
                    amount(input),
                    threshold(profile)
                )
            },
        ))
        .rule(Rule::new(
            "low",
            |_: &Value, _: &Value| true,
            |_, _| Value::object([("risk", Value::from("LOW"))]),
            |_, _| "amount within market threshold".to_string(),
        ))
        .build()?;

    // One registry per host, profiles keyed by market.
    let mut registry = ProfileRegistry::new();
    registry.register("us", Value::object([("threshold", Value::from(10_000.0))]));
    registry.register("eu", Value::object([("threshold", Value::from(8_000.0))]));

    let engine = Engine::new();
    let input = Value::object([("amount", Value::from(9_000.0))]);

    // The same amount lands differently per market.
    for market in ["us", "eu", "apac"] {
        println!("--- market: {} ---", market);
        let result = engine.run(&decision, &input, RunOptions::named(market), Some(&registry));
        println!("{}", engine.explain(&result));
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
