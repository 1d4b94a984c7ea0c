//! Schema definitions describing the expected shape of runtime values
//!
//! A schema declares which fields an object carries, their types,
//! whether they are required, and optional numeric bounds. Schemas are
//! plain data and can be authored in Rust or loaded from serialized
//! form.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A schema defines the structure and types of object data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema name
    pub name: String,
    /// Schema description
    pub description: Option<String>,
    /// Fields declared by the schema, keyed by field name
    pub fields: HashMap<String, SchemaField>,
}

/// A field in a schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Field name
    pub name: String,
    /// Field type
    pub field_type: FieldType,
    /// Whether the field must be present. Presence is all this
    /// controls; a present-but-falsy value is not a violation.
    #[serde(default)]
    pub required: bool,
    /// Field description
    pub description: Option<String>,
    /// Inclusive lower bound for number fields
    pub min: Option<f64>,
    /// Inclusive upper bound for number fields
    pub max: Option<f64>,
}

/// Supported field types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Null type
    Null,
    /// Boolean type
    Boolean,
    /// Numeric type
    Number,
    /// String type
    String,
    /// Array type with element type
    Array {
        /// Type of array elements
        item_type: Box<FieldType>,
    },
    /// Object type with optional nested schema
    Object {
        /// Nested schema for object validation
        schema: Option<Box<Schema>>,
    },
    /// Any type (no type checking)
    Any,
}

impl Schema {
    /// Create a new empty schema.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: HashMap::new(),
        }
    }

    /// Set the schema description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a field to the schema.
    pub fn add_field(mut self, field: SchemaField) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.get(name)
    }

    /// Check if a field is required.
    pub fn is_required(&self, name: &str) -> bool {
        self.get_field(name).map(|f| f.required).unwrap_or(false)
    }
}

impl SchemaField {
    /// Create a new optional field.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            description: None,
            min: None,
            max: None,
        }
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the field description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the inclusive lower bound for a number field.
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the inclusive upper bound for a number field.
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

impl FieldType {
    /// Create an array type.
    pub fn array(item_type: FieldType) -> Self {
        FieldType::Array {
            item_type: Box::new(item_type),
        }
    }

    /// Create an object type without a nested schema.
    pub fn object() -> Self {
        FieldType::Object { schema: None }
    }

    /// Create an object type with a nested schema.
    pub fn object_with_schema(schema: Schema) -> Self {
        FieldType::Object {
            schema: Some(Box::new(schema)),
        }
    }

    /// Type name as reported in validation messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Null => "null",
            FieldType::Boolean => "boolean",
            FieldType::Number => "number",
            FieldType::String => "string",
            FieldType::Array { .. } => "array",
            FieldType::Object { .. } => "object",
            FieldType::Any => "any",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_creation() {
        let schema = Schema::new("User")
            .with_description("A user record")
            .add_field(SchemaField::new("name", FieldType::String).required())
            .add_field(SchemaField::new("age", FieldType::Number));

        assert_eq!(schema.name, "User");
        assert_eq!(schema.description.as_deref(), Some("A user record"));
        assert_eq!(schema.fields.len(), 2);
        assert!(schema.is_required("name"));
        assert!(!schema.is_required("age"));
        assert!(!schema.is_required("missing"));
    }

    #[test]
    fn test_field_bounds() {
        let field = SchemaField::new("amount", FieldType::Number)
            .required()
            .with_description("transaction amount")
            .with_min(0.0)
            .with_max(1_000_000.0);

        assert_eq!(field.min, Some(0.0));
        assert_eq!(field.max, Some(1_000_000.0));
        assert_eq!(field.description.as_deref(), Some("transaction amount"));
        assert!(field.required);
    }

    #[test]
    fn test_field_type_constructors() {
        let array = FieldType::array(FieldType::String);
        assert_eq!(array.type_name(), "array");

        let object = FieldType::object();
        assert_eq!(object, FieldType::Object { schema: None });

        let nested = FieldType::object_with_schema(Schema::new("Inner"));
        assert_eq!(nested.type_name(), "object");
    }

    #[test]
    fn test_schema_serialization() {
        let schema = Schema::new("Payment")
            .add_field(SchemaField::new("amount", FieldType::Number).required());

        let json = serde_json::to_string(&schema).unwrap();
        let parsed: Schema = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, schema);
    }

    #[test]
    fn test_field_type_wire_names() {
        let json = serde_json::to_string(&FieldType::Number).unwrap();
        assert_eq!(json, r#""number""#);

        let parsed: FieldType = serde_json::from_str(r#""string""#).unwrap();
        assert_eq!(parsed, FieldType::String);
    }
}
