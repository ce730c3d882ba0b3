// File: src/validation/validators.rs
// Purpose: Stock field validators

use once_cell::sync::Lazy;
use regex::Regex;
use rusty_fields_validation::{
    has_exact_length, is_blank, is_greater_than_zero, is_numeric, parse_number,
};
use serde_json::Value;

use crate::definition::{validator, FieldDefinition, FieldValidator};
use crate::error::FieldError;
use crate::value::{Entity, Truthy};

// Optional scheme, `//`, then a dotted host or localhost
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\w+:)?//([^\s.]+\.\S{2}|localhost[:?\d]*)\S*$").unwrap()
});

/// Rejects falsy values and whitespace-only strings
pub fn not_falsey(
    value: &Value,
    path: &[String],
    _entity: &Entity,
    _field: &FieldDefinition,
) -> Option<FieldError> {
    let blank = match value {
        Value::String(s) => is_blank(s),
        other => other.is_falsy(),
    };
    blank.then(|| FieldError::invalid("notFalsey", path))
}

/// Absolute or protocol-relative URL; empty values pass
pub fn url(
    value: &Value,
    path: &[String],
    _entity: &Entity,
    _field: &FieldDefinition,
) -> Option<FieldError> {
    if value.is_falsy() {
        return None;
    }
    match value {
        Value::String(s) if URL_REGEX.is_match(s) => None,
        _ => Some(FieldError::invalid("url", path)),
    }
}

/// Phone number with the configured digit count; empty values pass
pub fn phone(
    value: &Value,
    path: &[String],
    _entity: &Entity,
    field: &FieldDefinition,
) -> Option<FieldError> {
    check_phone(value, path, field.phone_digits())
}

/// Phone validator for a fixed digit count
pub fn phone_with_digits(digits: usize) -> FieldValidator {
    validator(move |value, path, _, _| check_phone(value, path, digits))
}

fn check_phone(value: &Value, path: &[String], digits: usize) -> Option<FieldError> {
    if value.is_falsy() {
        return None;
    }
    match value {
        Value::String(s) if has_exact_length(s, digits) => None,
        _ => Some(FieldError::invalid("phone", path)),
    }
}

/// Value must be one of the field's `options`
pub fn enumeration(
    value: &Value,
    path: &[String],
    _entity: &Entity,
    field: &FieldDefinition,
) -> Option<FieldError> {
    if field.options.contains(value) {
        return None;
    }
    Some(FieldError::invalid("enumeration", path))
}

/// `true` or `false`; `null` passes
pub fn boolean(
    value: &Value,
    path: &[String],
    _entity: &Entity,
    _field: &FieldDefinition,
) -> Option<FieldError> {
    match value {
        Value::Null | Value::Bool(_) => None,
        _ => Some(FieldError::invalid("boolean", path)),
    }
}

/// Anything that coerces to a number; `null` passes
///
/// Arrays coerce through their only element, and the empty array reads as 0.
pub fn number(
    value: &Value,
    path: &[String],
    _entity: &Entity,
    _field: &FieldDefinition,
) -> Option<FieldError> {
    (!coerces_to_number(value)).then(|| FieldError::invalid("number", path))
}

fn coerces_to_number(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) => true,
        Value::String(s) => is_numeric(s),
        Value::Array(items) => match items.as_slice() {
            [] => true,
            // A lone element goes through its string form, so `[true]` fails
            [Value::Bool(_)] => false,
            [item] => coerces_to_number(item),
            _ => false,
        },
        Value::Object(_) => false,
    }
}

/// Strictly positive number; `null` passes
pub fn greater_than_zero(
    value: &Value,
    path: &[String],
    _entity: &Entity,
    _field: &FieldDefinition,
) -> Option<FieldError> {
    let n = match value {
        Value::Null => return None,
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    };
    match n {
        Some(n) if is_greater_than_zero(n) => None,
        _ => Some(FieldError::invalid("greaterThanZero", path)),
    }
}
