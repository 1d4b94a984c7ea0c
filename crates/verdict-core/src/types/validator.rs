//! Value validation against schemas, and the validator seam the
//! engine runs all data contracts through
//!
//! Validation is structural only. A field that is present with value
//! `0`, `false`, or `""` satisfies a matching type declaration; only a
//! missing key violates a `required` constraint. Validators never
//! coerce or fill in data.

use super::schema::{FieldType, Schema, SchemaField};
use super::value::Value;
use thiserror::Error;

/// A single violation found while checking a value against a schema
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaViolation {
    /// Field has wrong type
    #[error("Type mismatch for field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    /// Required field is missing
    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: String },

    /// Field is not declared by the schema
    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    /// Number is below the declared minimum
    #[error("Value {value} for field '{field}' is below the minimum {min}")]
    BelowMinimum { field: String, value: f64, min: f64 },

    /// Number is above the declared maximum
    #[error("Value {value} for field '{field}' is above the maximum {max}")]
    AboveMaximum { field: String, value: f64, max: f64 },

    /// An array element failed its item type check
    #[error("Invalid item {index} in array field '{field}': {message}")]
    ArrayItem {
        field: String,
        index: usize,
        message: String,
    },

    /// A nested object failed its schema check
    #[error("Invalid nested object '{field}': {message}")]
    NestedObject { field: String, message: String },

    /// The checked value is not an object at all
    #[error("Expected an object, got {actual}")]
    NotAnObject { actual: String },
}

/// Validation failure as surfaced across the validator seam
///
/// Carries a single human-readable message so schema-driven and
/// hand-written validators fail the same way.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Description of the violation(s)
    pub message: String,
}

impl ValidationError {
    /// Create a validation error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<Vec<SchemaViolation>> for ValidationError {
    fn from(violations: Vec<SchemaViolation>) -> Self {
        Self {
            message: join_violations(&violations),
        }
    }
}

fn join_violations(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Checks one value against a declared contract
///
/// Implementations must be pure: no I/O, no mutation, and the same
/// verdict for the same value every time.
pub trait Validator<T>: Send + Sync {
    /// Check `value`, returning `Ok(())` on conformance.
    fn validate(&self, value: &T) -> Result<(), ValidationError>;
}

/// Pass-through validator that accepts every value
///
/// The natural contract for fully typed decisions where the Rust type
/// already guarantees the shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAny;

impl<T> Validator<T> for AcceptAny {
    fn validate(&self, _value: &T) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Adapter turning a pure function into a validator
#[derive(Debug, Clone)]
pub struct FnValidator<F>(pub F);

impl<T, F> Validator<T> for FnValidator<F>
where
    F: Fn(&T) -> Result<(), ValidationError> + Send + Sync,
{
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        (self.0)(value)
    }
}

/// Schema-driven validator for dynamic `Value` data
///
/// Checks the whole value and reports every violation found, in field
/// order, rather than stopping at the first one.
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    schema: Schema,
    allow_unknown_fields: bool,
}

impl SchemaValidator {
    /// Create a validator that rejects undeclared fields.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            allow_unknown_fields: false,
        }
    }

    /// Control whether fields absent from the schema are tolerated.
    pub fn allow_unknown_fields(mut self, allow: bool) -> Self {
        self.allow_unknown_fields = allow;
        self
    }

    /// The schema this validator checks against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Check a value against the schema, collecting every violation.
    pub fn check(&self, value: &Value) -> Result<(), Vec<SchemaViolation>> {
        self.check_schema(value, &self.schema)
    }

    fn check_schema(&self, value: &Value, schema: &Schema) -> Result<(), Vec<SchemaViolation>> {
        let obj = match value {
            Value::Object(obj) => obj,
            other => {
                return Err(vec![SchemaViolation::NotAnObject {
                    actual: other.type_name().to_string(),
                }])
            }
        };

        let mut violations = Vec::new();

        // Field order is sorted so reports are stable across runs.
        let mut declared: Vec<&String> = schema.fields.keys().collect();
        declared.sort();
        for name in declared {
            let field = &schema.fields[name];
            if field.required && !obj.contains_key(name.as_str()) {
                violations.push(SchemaViolation::RequiredFieldMissing {
                    field: name.clone(),
                });
            }
        }

        let mut present: Vec<&String> = obj.keys().collect();
        present.sort();
        for name in present {
            let field_value = &obj[name];
            match schema.get_field(name) {
                Some(field) => {
                    if let Err(violation) = self.check_field(name, field_value, field) {
                        violations.push(violation);
                    }
                }
                None if self.allow_unknown_fields => {}
                None => violations.push(SchemaViolation::UnknownField {
                    field: name.clone(),
                }),
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    fn check_field(
        &self,
        name: &str,
        value: &Value,
        field: &SchemaField,
    ) -> Result<(), SchemaViolation> {
        self.check_type(name, value, &field.field_type)?;

        if let Value::Number(n) = value {
            if let Some(min) = field.min {
                if *n < min {
                    return Err(SchemaViolation::BelowMinimum {
                        field: name.to_string(),
                        value: *n,
                        min,
                    });
                }
            }
            if let Some(max) = field.max {
                if *n > max {
                    return Err(SchemaViolation::AboveMaximum {
                        field: name.to_string(),
                        value: *n,
                        max,
                    });
                }
            }
        }

        Ok(())
    }

    fn check_type(
        &self,
        name: &str,
        value: &Value,
        field_type: &FieldType,
    ) -> Result<(), SchemaViolation> {
        let mismatch = |actual: &Value| SchemaViolation::TypeMismatch {
            field: name.to_string(),
            expected: field_type.type_name().to_string(),
            actual: actual.type_name().to_string(),
        };

        match field_type {
            FieldType::Any => Ok(()),
            FieldType::Null if value.is_null() => Ok(()),
            FieldType::Boolean if matches!(value, Value::Bool(_)) => Ok(()),
            FieldType::Number if matches!(value, Value::Number(_)) => Ok(()),
            FieldType::String if matches!(value, Value::String(_)) => Ok(()),
            FieldType::Array { item_type } => {
                let items = match value {
                    Value::Array(items) => items,
                    other => return Err(mismatch(other)),
                };
                for (index, item) in items.iter().enumerate() {
                    if let Err(violation) = self.check_type(name, item, item_type) {
                        return Err(SchemaViolation::ArrayItem {
                            field: name.to_string(),
                            index,
                            message: violation.to_string(),
                        });
                    }
                }
                Ok(())
            }
            FieldType::Object { schema } => {
                if !matches!(value, Value::Object(_)) {
                    return Err(mismatch(value));
                }
                if let Some(nested) = schema {
                    if let Err(violations) = self.check_schema(value, nested) {
                        return Err(SchemaViolation::NestedObject {
                            field: name.to_string(),
                            message: join_violations(&violations),
                        });
                    }
                }
                Ok(())
            }
            _ => Err(mismatch(value)),
        }
    }
}

impl Validator<Value> for SchemaValidator {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        self.check(value).map_err(ValidationError::from)
    }
}
