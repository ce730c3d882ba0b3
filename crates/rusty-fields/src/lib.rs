// rusty-fields - schema-driven entity factories and validators
// Compile a tree of field definitions into a factory that builds defaulted,
// transformed records and a validator that reports path-tagged errors.

pub mod config;
pub mod definition;
pub mod error;
pub mod factory;
pub mod fields;
pub mod id;
pub mod normalize;
pub mod path;
pub mod schema;
pub mod transforms;
pub mod validation;
pub mod value;

// Re-export framework types
pub use config::{Config, Fallback, ValidationConfig};
pub use definition::{
    transform, validator, DefaultValue, FieldDefinition, FieldKind, FieldValidator, Transform,
};
pub use error::{FieldError, InvalidValue, Result, SchemaError, SubfieldError};
pub use factory::Factory;
pub use id::{IdGenerator, UuidGenerator};
pub use normalize::normalize;
pub use schema::{compile, compile_with, Schema};
pub use validation::{validators, Validator};
pub use value::{Entity, Truthy};
