// File: src/value.rs
// Purpose: Entity value model and truthiness rules

use serde_json::{Map, Value};

/// A built record: field name to value
pub type Entity = Map<String, Value>;

/// Truthiness as form payloads expect it
///
/// `null`, `false`, `0`, `NaN` and `""` are falsy. Arrays and objects are
/// truthy even when empty.
pub trait Truthy {
    fn is_truthy(&self) -> bool;

    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

impl Truthy for Option<&Value> {
    fn is_truthy(&self) -> bool {
        self.map(Truthy::is_truthy).unwrap_or(false)
    }
}

/// Borrow an object value, treating anything else as absent
pub fn as_entity(value: Option<&Value>) -> Option<&Entity> {
    value.and_then(Value::as_object)
}

/// Borrow array elements, treating anything else as an empty list
pub fn as_elements(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
