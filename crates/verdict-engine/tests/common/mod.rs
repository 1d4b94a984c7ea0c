//! Common test utilities for engine integration tests

use verdict_core::{FieldType, Schema, SchemaField, SchemaValidator, Value};
use verdict_engine::{Decision, DecisionResult, Rule, Status};

/// Decision used across the suites: flag checkout amounts above the
/// profile threshold as HIGH risk, everything else as LOW.
pub fn checkout_risk_decision() -> Decision<Value, Value, Value> {
    Decision::builder("checkout-risk", "1.0.0")
        .input_schema(SchemaValidator::new(input_schema()))
        .output_schema(SchemaValidator::new(output_schema()))
        .profile_schema(SchemaValidator::new(profile_schema()))
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
        .build()
        .expect("fixture decision builds")
}

/// Input contract: a required numeric amount.
pub fn input_schema() -> Schema {
    Schema::new("CheckoutInput")
        .add_field(SchemaField::new("amount", FieldType::Number).required())
}

/// Output contract: a required risk label.
pub fn output_schema() -> Schema {
    Schema::new("RiskOutput").add_field(SchemaField::new("risk", FieldType::String).required())
}

/// Profile contract: a required numeric threshold.
pub fn profile_schema() -> Schema {
    Schema::new("RiskProfile")
        .add_field(SchemaField::new("threshold", FieldType::Number).required())
}

pub fn input(amount: f64) -> Value {
    Value::object([("amount", Value::from(amount))])
}

pub fn profile(threshold: f64) -> Value {
    Value::object([("threshold", Value::from(threshold))])
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

/// Assertion helpers for DecisionResult
pub trait ResultAssertions {
    fn assert_status(&self, expected: Status);
    fn assert_matched_rule(&self, expected: Option<&str>);
    fn assert_trace(&self, expected: &[(&str, bool)]);
}

impl<O: std::fmt::Debug> ResultAssertions for DecisionResult<O> {
    fn assert_status(&self, expected: Status) {
        assert_eq!(
            self.status, expected,
            "Expected status {}, got {} (explanation: {})",
            expected, self.status, self.meta.explanation
        );
    }

    fn assert_matched_rule(&self, expected: Option<&str>) {
        assert_eq!(
            self.meta.matched_rule.as_deref(),
            expected,
            "Expected matched rule {:?}, got {:?}",
            expected,
            self.meta.matched_rule
        );
    }

    fn assert_trace(&self, expected: &[(&str, bool)]) {
        let actual: Vec<(&str, bool)> = self
            .meta
            .evaluated_rules
            .iter()
            .map(|entry| (entry.rule_id.as_str(), entry.matched))
            .collect();
        assert_eq!(
            actual, expected,
            "Expected trace {:?}, got {:?}",
            expected, actual
        );
    }
}
