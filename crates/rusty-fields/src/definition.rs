// File: src/definition.rs
// Purpose: Field definition tree and collaborator function types

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::config::{ValidationConfig, DEFAULT_PHONE_DIGITS};
use crate::error::FieldError;
use crate::value::Entity;

/// Pure `value -> value` rewrite applied by the factory
pub type Transform = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Judges one value: `(value, path, entity, definition) -> error or nothing`
///
/// `entity` is the record that holds the field, so validators can look at
/// siblings.
pub type FieldValidator =
    Arc<dyn Fn(&Value, &[String], &Entity, &FieldDefinition) -> Option<FieldError> + Send + Sync>;

/// Wrap a function as a [`Transform`]
pub fn transform<F>(f: F) -> Transform
where
    F: Fn(Value) -> Value + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a function as a [`FieldValidator`]
pub fn validator<F>(f: F) -> FieldValidator
where
    F: Fn(&Value, &[String], &Entity, &FieldDefinition) -> Option<FieldError>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

/// Lazily produced default for a scalar field
///
/// Always a closure; literals are wrapped with [`DefaultValue::literal`].
#[derive(Clone)]
pub struct DefaultValue(Arc<dyn Fn() -> Value + Send + Sync>);

impl DefaultValue {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// A default that always yields `value`
    pub fn literal(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(move || value.clone())
    }

    /// Produce the default value
    pub fn resolve(&self) -> Value {
        (self.0)()
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DefaultValue(..)")
    }
}

/// Shape of a field
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// Single value, optionally defaulted
    Scalar { default: Option<DefaultValue> },
    /// List of values; each element goes through the transforms
    List,
    /// Nested record built from child definitions
    Object(Arc<[FieldDefinition]>),
    /// List of nested records
    ObjectList(Arc<[FieldDefinition]>),
}

/// One node of a schema
///
/// `transforms` and `validators` may be left unset; [`crate::normalize`]
/// fills them with empty lists before compilation.
#[derive(Clone)]
pub struct FieldDefinition {
    pub name: String,
    pub kind: FieldKind,
    /// Label reported as `type` on subfield errors, e.g. `address`
    pub type_name: Option<String>,
    pub transforms: Option<Vec<Transform>>,
    pub validators: Option<Vec<FieldValidator>>,
    /// Allowed values, consulted by the enumeration validator
    pub options: Vec<Value>,
    /// Settings the compiled validator hands to the stock validators
    pub settings: Option<ValidationConfig>,
}

impl FieldDefinition {
    fn with_kind(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            type_name: None,
            transforms: None,
            validators: None,
            options: Vec::new(),
            settings: None,
        }
    }

    /// Single-valued leaf field
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Scalar { default: None })
    }

    /// List-of-scalar field
    pub fn list(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::List)
    }

    /// Nested object field
    pub fn object(name: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self::with_kind(name, FieldKind::Object(fields.into()))
    }

    /// List-of-object field
    pub fn object_list(name: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self::with_kind(name, FieldKind::ObjectList(fields.into()))
    }

    /// Same field with list cardinality
    ///
    /// Scalars become lists (dropping their default), objects become
    /// lists of objects. Lists are returned unchanged.
    pub fn into_list(mut self) -> Self {
        self.kind = match self.kind {
            FieldKind::Scalar { .. } | FieldKind::List => FieldKind::List,
            FieldKind::Object(fields) | FieldKind::ObjectList(fields) => {
                FieldKind::ObjectList(fields)
            }
        };
        self
    }

    /// Set the default of a scalar field; ignored for other kinds
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        if let FieldKind::Scalar { default: slot } = &mut self.kind {
            *slot = Some(default);
        }
        self
    }

    /// Literal default, see [`FieldDefinition::with_default`]
    pub fn with_default_value(self, value: impl Into<Value>) -> Self {
        self.with_default(DefaultValue::literal(value))
    }

    pub fn with_transform<F>(self, f: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.with_transforms([transform(f)])
    }

    pub fn with_transforms(mut self, transforms: impl IntoIterator<Item = Transform>) -> Self {
        self.transforms.get_or_insert_with(Vec::new).extend(transforms);
        self
    }

    pub fn with_validator<F>(self, f: F) -> Self
    where
        F: Fn(&Value, &[String], &Entity, &FieldDefinition) -> Option<FieldError>
            + Send
            + Sync
            + 'static,
    {
        self.with_validators([validator(f)])
    }

    pub fn with_validators(mut self, validators: impl IntoIterator<Item = FieldValidator>) -> Self {
        self.validators.get_or_insert_with(Vec::new).extend(validators);
        self
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = Value>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Phone digit count from the validation settings
    pub fn phone_digits(&self) -> usize {
        self.settings
            .as_ref()
            .map_or(DEFAULT_PHONE_DIGITS, |settings| settings.phone_digits)
    }

    pub fn transforms(&self) -> &[Transform] {
        self.transforms.as_deref().unwrap_or(&[])
    }

    pub fn validators(&self) -> &[FieldValidator] {
        self.validators.as_deref().unwrap_or(&[])
    }

    /// Child definitions of object and list-of-object fields
    pub fn children(&self) -> Option<&[FieldDefinition]> {
        match &self.kind {
            FieldKind::Object(fields) | FieldKind::ObjectList(fields) => Some(&fields[..]),
            FieldKind::Scalar { .. } | FieldKind::List => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self.kind, FieldKind::List | FieldKind::ObjectList(_))
    }

    pub fn default_value(&self) -> Option<&DefaultValue> {
        match &self.kind {
            FieldKind::Scalar { default } => default.as_ref(),
            _ => None,
        }
    }
}

impl fmt::Debug for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDefinition")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("type_name", &self.type_name)
            .field("transforms", &self.transforms.as_ref().map(Vec::len))
            .field("validators", &self.validators.as_ref().map(Vec::len))
            .field("options", &self.options)
            .field("settings", &self.settings)
            .finish()
    }
}
