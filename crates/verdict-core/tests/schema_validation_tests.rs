//! Integration tests for schemas loaded from serialized definitions

use anyhow::Result;
use verdict_core::{
    FieldType, Schema, SchemaField, SchemaValidator, SchemaViolation, ValidationError, Validator,
    Value,
};

const CHECKOUT_SCHEMA_YAML: &str = r#"
name: CheckoutInput
description: Facts about one checkout attempt
fields:
  amount:
    name: amount
    field_type: number
    required: true
    min: 0.0
  currency:
    name: currency
    field_type: string
    required: true
  gift:
    name: gift
    field_type: boolean
"#;

// ============ Schema loading ============

#[test]
fn test_schema_loads_from_yaml() -> Result<()> {
    let schema: Schema = serde_yaml::from_str(CHECKOUT_SCHEMA_YAML)?;

    assert_eq!(schema.name, "CheckoutInput");
    assert_eq!(schema.fields.len(), 3);
    assert!(schema.is_required("amount"));
    assert!(schema.is_required("currency"));
    assert!(!schema.is_required("gift"));
    assert_eq!(schema.get_field("amount").map(|f| f.min), Some(Some(0.0)));
    Ok(())
}

#[test]
fn test_yaml_schema_matches_builder_schema() -> Result<()> {
    let loaded: Schema = serde_yaml::from_str(CHECKOUT_SCHEMA_YAML)?;
    let built = Schema::new("CheckoutInput")
        .with_description("Facts about one checkout attempt")
        .add_field(
            SchemaField::new("amount", FieldType::Number)
                .required()
                .with_min(0.0),
        )
        .add_field(SchemaField::new("currency", FieldType::String).required())
        .add_field(SchemaField::new("gift", FieldType::Boolean));

    assert_eq!(loaded, built);
    Ok(())
}

// ============ Validation through the loaded schema ============

#[test]
fn test_loaded_schema_validates_values() -> Result<()> {
    let schema: Schema = serde_yaml::from_str(CHECKOUT_SCHEMA_YAML)?;
    let validator = SchemaValidator::new(schema);

    let valid = Value::object([
        ("amount", Value::from(19.99)),
        ("currency", Value::from("EUR")),
        ("gift", Value::from(false)),
    ]);
    assert!(validator.check(&valid).is_ok());

    let invalid = Value::object([
        ("amount", Value::from(-5.0)),
        ("currency", Value::from("EUR")),
    ]);
    let violations = validator.check(&invalid).unwrap_err();
    assert!(matches!(
        violations.as_slice(),
        [SchemaViolation::BelowMinimum { .. }]
    ));
    Ok(())
}

#[test]
fn test_zero_amount_is_valid() -> Result<()> {
    let schema: Schema = serde_yaml::from_str(CHECKOUT_SCHEMA_YAML)?;
    let validator = SchemaValidator::new(schema);

    let value = Value::object([
        ("amount", Value::from(0.0)),
        ("currency", Value::from("")),
    ]);
    assert!(validator.check(&value).is_ok());
    Ok(())
}

#[test]
fn test_validator_seam_reports_joined_message() -> Result<()> {
    let schema: Schema = serde_yaml::from_str(CHECKOUT_SCHEMA_YAML)?;
    let validator = SchemaValidator::new(schema);

    let value = Value::object([("gift", Value::from(true))]);
    let error: ValidationError = validator.validate(&value).unwrap_err();

    assert!(error.message.contains("Required field missing: amount"));
    assert!(error.message.contains("Required field missing: currency"));
    Ok(())
}
