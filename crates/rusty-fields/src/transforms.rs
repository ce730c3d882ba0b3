// File: src/transforms.rs
// Purpose: Transform pipeline and the stock string transforms

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::definition::Transform;
use crate::value::Truthy;

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").unwrap());

/// Left-to-right fold of `transforms` over `value`
pub fn apply_transforms(transforms: &[Transform], value: Value) -> Value {
    transforms.iter().fold(value, |value, transform| transform(value))
}

/// Rewrite string content; falsy values read as `""`, other values pass through
fn map_text(value: Value, f: impl FnOnce(&str) -> String) -> Value {
    match value {
        Value::String(s) => Value::String(f(&s)),
        other if other.is_falsy() => Value::String(f("")),
        other => other,
    }
}

/// Strip leading and trailing whitespace
pub fn string_trim(value: Value) -> Value {
    map_text(value, |s| s.trim().to_string())
}

pub fn string_to_upper_case(value: Value) -> Value {
    map_text(value, str::to_uppercase)
}

pub fn string_to_lower_case(value: Value) -> Value {
    map_text(value, str::to_lowercase)
}

/// Keep digits only
pub fn phone(value: Value) -> Value {
    map_text(value, |s| NON_DIGITS.replace_all(s, "").into_owned())
}
