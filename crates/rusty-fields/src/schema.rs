// File: src/schema.rs
// Purpose: Compile field definitions into a factory/validator pair

use std::collections::HashSet;

use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::definition::FieldDefinition;
use crate::error::{FieldError, Result, SchemaError};
use crate::factory::Factory;
use crate::path;
use crate::validation::Validator;
use crate::value::Entity;

/// A compiled schema
#[derive(Debug, Clone)]
pub struct Schema {
    factory: Factory,
    validator: Validator,
}

/// Compile with the default configuration
pub fn compile(fields: Vec<FieldDefinition>) -> Result<Schema> {
    compile_with(fields, &Config::default())
}

/// Compile `fields`, checking that names are non-empty and unique among
/// siblings at every level
pub fn compile_with(fields: Vec<FieldDefinition>, config: &Config) -> Result<Schema> {
    check_names(&fields, &[])?;

    let schema = Schema {
        factory: Factory::with_fallback(&fields, config.factory.fallback),
        validator: Validator::with_config(&fields, &config.validation),
    };
    debug!(
        fields = fields.len(),
        fallback = ?config.factory.fallback,
        phone_digits = config.validation.phone_digits,
        "compiled schema"
    );
    Ok(schema)
}

fn check_names(fields: &[FieldDefinition], at: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for field in fields {
        if field.name.trim().is_empty() {
            return Err(SchemaError::EmptyName {
                location: path::dotted(at),
            });
        }
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateName {
                name: field.name.clone(),
                location: path::dotted(at),
            });
        }
        if let Some(children) = field.children() {
            check_names(children, &path::child(at, &field.name))?;
        }
    }
    Ok(())
}

impl Schema {
    pub fn factory(&self) -> &Factory {
        &self.factory
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn into_parts(self) -> (Factory, Validator) {
        (self.factory, self.validator)
    }

    /// Build an entity from partial input
    pub fn build(&self, input: &Value) -> Entity {
        self.factory.build(Some(input))
    }

    /// Entity made of defaults only
    pub fn build_default(&self) -> Entity {
        self.factory.build_default()
    }

    pub fn validate(&self, entity: &Value) -> Vec<FieldError> {
        self.validator.validate(entity)
    }
}
