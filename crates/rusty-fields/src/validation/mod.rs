// File: src/validation/mod.rs
// Purpose: Compiled validator producing path-tagged errors

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::ValidationConfig;
use crate::definition::{FieldDefinition, FieldKind};
use crate::error::FieldError;
use crate::normalize::normalize;
use crate::path;
use crate::value::{as_elements, as_entity, Entity};

pub mod validators;

static NULL: Value = Value::Null;

/// Reported as `type` when a wrapping field has no type name
const OBJECT_TYPE: &str = "object";

/// Walks an entity against its field definitions
///
/// Errors come back flat, in field-definition order and then ascending list
/// index. Errors from nested objects are wrapped with the field name; errors
/// from list-of-object elements also carry the element index.
#[derive(Debug, Clone)]
pub struct Validator {
    fields: Arc<[FieldDefinition]>,
    settings: ValidationConfig,
}

impl Validator {
    pub fn new(fields: &[FieldDefinition]) -> Self {
        Self::with_config(fields, &ValidationConfig::default())
    }

    /// Validator whose fields see `settings` unless they carry their own
    pub fn with_config(fields: &[FieldDefinition], settings: &ValidationConfig) -> Self {
        let fields = normalize(fields)
            .into_iter()
            .map(|mut field| {
                field.settings.get_or_insert_with(|| settings.clone());
                field
            })
            .collect();
        Self {
            fields,
            settings: settings.clone(),
        }
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Validate an entity; non-objects are validated as an empty entity
    pub fn validate(&self, entity: &Value) -> Vec<FieldError> {
        let empty = Entity::new();
        let errors = self.validate_at(as_entity(Some(entity)).unwrap_or(&empty), &[]);
        debug!(errors = errors.len(), "validated entity");
        errors
    }

    pub fn validate_entity(&self, entity: &Entity) -> Vec<FieldError> {
        self.validate_at(entity, &[])
    }

    /// Validate `entity` located at `path` inside an enclosing record
    pub fn validate_at(&self, entity: &Entity, at: &[String]) -> Vec<FieldError> {
        trace!(path = %path::dotted(at), fields = self.fields.len(), "validating entity");

        let empty = Entity::new();
        let mut errors = Vec::new();
        for field in self.fields.iter() {
            let value = entity.get(&field.name);
            let field_path = path::child(at, &field.name);
            match &field.kind {
                FieldKind::Scalar { .. } => {
                    let value = value.unwrap_or(&NULL);
                    errors.extend(run_validators(field, value, &field_path, entity));
                }
                FieldKind::List => {
                    for (index, element) in as_elements(value).iter().enumerate() {
                        let element_path = path::element(&field_path, index);
                        errors.extend(run_validators(field, element, &element_path, entity));
                    }
                }
                FieldKind::Object(children) => {
                    let child = Validator::with_config(children, &self.settings);
                    let child_entity = as_entity(value).unwrap_or(&empty);
                    errors.extend(
                        child
                            .validate_at(child_entity, &field_path)
                            .into_iter()
                            .map(|err| FieldError::nested(&field.name, type_of(field), err)),
                    );
                }
                FieldKind::ObjectList(children) => {
                    let child = Validator::with_config(children, &self.settings);
                    for (index, element) in as_elements(value).iter().enumerate() {
                        let element_path = path::element(&field_path, index);
                        let child_entity = as_entity(Some(element)).unwrap_or(&empty);
                        errors.extend(
                            child
                                .validate_at(child_entity, &element_path)
                                .into_iter()
                                .map(|err| {
                                    FieldError::element(&field.name, type_of(field), index, err)
                                }),
                        );
                    }
                }
            }
        }
        errors
    }
}

fn type_of(field: &FieldDefinition) -> &str {
    field.type_name.as_deref().unwrap_or(OBJECT_TYPE)
}

fn run_validators<'a>(
    field: &'a FieldDefinition,
    value: &'a Value,
    path: &'a [String],
    entity: &'a Entity,
) -> impl Iterator<Item = FieldError> + 'a {
    field
        .validators()
        .iter()
        .filter_map(move |validate| validate(value, path, entity, field))
}
