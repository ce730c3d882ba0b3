//! Presets for common field shapes
//!
//! Each preset is a plain function returning a [`FieldDefinition`] composed
//! from the stock transforms and validators.

use std::sync::Arc;

use serde_json::Value;

use crate::definition::{
    transform, validator, DefaultValue, FieldDefinition, FieldValidator, Transform,
};
use crate::id::{IdGenerator, UuidGenerator};
use crate::transforms;
use crate::validation::validators;

/// Identifier field defaulting to a fresh UUID
pub fn guid(name: &str) -> FieldDefinition {
    guid_with(name, Arc::new(UuidGenerator))
}

/// Identifier field defaulting to ids from `generator`
pub fn guid_with(name: &str, generator: Arc<dyn IdGenerator>) -> FieldDefinition {
    FieldDefinition::scalar(name)
        .with_type_name("guid")
        .with_default(DefaultValue::new(move || Value::String(generator.generate())))
        .with_transform(transforms::string_trim)
        .with_validator(validators::not_falsey)
}

/// Options for [`text`]
#[derive(Clone, Default)]
pub struct TextOptions {
    pub required: bool,
    /// Applied after the built-in trim
    pub transforms: Vec<Transform>,
    pub validators: Vec<FieldValidator>,
    /// Replaces the `""` default
    pub default: Option<DefaultValue>,
}

impl TextOptions {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }
}

/// Trimmed text field defaulting to `""`
pub fn text(name: &str, options: TextOptions) -> FieldDefinition {
    let mut checks = options.validators;
    if options.required {
        checks.push(validator(validators::not_falsey));
    }

    FieldDefinition::scalar(name)
        .with_type_name("text")
        .with_default(options.default.unwrap_or_else(|| DefaultValue::literal("")))
        .with_transforms(
            std::iter::once(transform(transforms::string_trim)).chain(options.transforms),
        )
        .with_validators(checks)
}

/// Text field that must not be blank
pub fn required_string(name: &str) -> FieldDefinition {
    text(name, TextOptions::required())
}

/// URL field; empty values pass
pub fn url(name: &str) -> FieldDefinition {
    text(
        name,
        TextOptions {
            validators: vec![validator(validators::url)],
            ..TextOptions::default()
        },
    )
    .with_type_name("url")
}

/// Phone number stored as digits only
///
/// The digit count comes from the validation settings of the compiled
/// schema (`phone_digits`).
pub fn phone(name: &str) -> FieldDefinition {
    phone_field(name, validator(validators::phone))
}

/// Phone number with a fixed digit count, whatever the settings say
pub fn phone_with_digits(name: &str, digits: usize) -> FieldDefinition {
    phone_field(name, validators::phone_with_digits(digits))
}

fn phone_field(name: &str, check: FieldValidator) -> FieldDefinition {
    text(
        name,
        TextOptions {
            transforms: vec![transform(transforms::phone)],
            validators: vec![check],
            ..TextOptions::default()
        },
    )
    .with_type_name("phone")
}

/// Numeric field without default
pub fn number(name: &str) -> FieldDefinition {
    FieldDefinition::scalar(name)
        .with_type_name("number")
        .with_validator(validators::number)
}

pub fn number_greater_than_zero(name: &str) -> FieldDefinition {
    number(name).with_validator(validators::greater_than_zero)
}

/// Boolean field defaulting to `false`
pub fn boolean(name: &str) -> FieldDefinition {
    FieldDefinition::scalar(name)
        .with_type_name("boolean")
        .with_default_value(false)
        .with_validator(validators::boolean)
}

/// Field restricted to `values`, defaulting to the first one
pub fn enumeration(name: &str, values: Vec<Value>) -> FieldDefinition {
    let field = FieldDefinition::scalar(name)
        .with_type_name("enumeration")
        .with_validator(validators::enumeration);
    let field = match values.first().cloned() {
        Some(first) => field.with_default_value(first),
        None => field,
    };
    field.with_options(values)
}

/// Postal address object
///
/// `address2` is optional, every other line is required. Use
/// [`FieldDefinition::into_list`] for a list of addresses.
pub fn address(name: &str) -> FieldDefinition {
    FieldDefinition::object(
        name,
        vec![
            required_string("address1"),
            text("address2", TextOptions::default()),
            required_string("city"),
            required_string("state"),
            required_string("zip"),
        ],
    )
    .with_type_name("address")
}
