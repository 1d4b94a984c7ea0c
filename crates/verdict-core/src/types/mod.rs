//! Core data types: values, schemas, and validators

pub mod schema;
pub mod validator;
pub mod value;

pub use schema::{FieldType, Schema, SchemaField};
pub use validator::{
    AcceptAny, FnValidator, SchemaValidator, SchemaViolation, ValidationError, Validator,
};
pub use value::Value;
