//! Error types
//!
//! [`FieldError`] is validation *data*: it is returned by compiled validators
//! and never raised. [`SchemaError`] reports malformed field definitions at
//! compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for schema compilation
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Malformed field definitions, detected when a schema is compiled
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A field definition has an empty (or blank) name
    #[error("field definition at '{location}' has an empty name")]
    EmptyName { location: String },

    /// Two siblings share a name
    #[error("duplicate field name '{name}' at '{location}'")]
    DuplicateName { name: String, location: String },
}

/// A single validation failure
///
/// Serializes to the flat record shapes downstream presentation layers
/// consume:
///
/// ```text
/// { "validator": "notFalsey", "path": ["guids", "1"] }
/// { "subfield": true, "list": true, "index": 0, "name": "addresses",
///   "type": "address", "error": { "validator": "notFalsey", "path": [...] } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldError {
    /// A validator rejected a scalar value or a list element
    Invalid(InvalidValue),
    /// An error raised inside a nested object or a list-of-object element
    Subfield(SubfieldError),
}

/// Leaf error produced by a field validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidValue {
    /// Validator kind, e.g. `notFalsey`
    pub validator: String,
    /// Location of the offending value
    pub path: Vec<String>,
}

/// Wraps an error that originated below a nested field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "SubfieldRecord", from = "SubfieldRecord")]
pub struct SubfieldError {
    /// Name of the nested (or list-of-object) field
    pub name: String,
    /// Preset label of the nested field, e.g. `address`; `object` when the
    /// field has none
    pub type_name: String,
    /// Element index, present only for list-of-object fields
    pub index: Option<usize>,
    pub error: Box<FieldError>,
}

#[derive(Serialize, Deserialize)]
struct SubfieldRecord {
    subfield: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    list: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    index: Option<usize>,
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    error: Box<FieldError>,
}

impl From<SubfieldError> for SubfieldRecord {
    fn from(err: SubfieldError) -> Self {
        Self {
            subfield: true,
            list: err.index.is_some(),
            index: err.index,
            name: err.name,
            type_name: err.type_name,
            error: err.error,
        }
    }
}

impl From<SubfieldRecord> for SubfieldError {
    fn from(record: SubfieldRecord) -> Self {
        Self {
            name: record.name,
            type_name: record.type_name,
            index: record.index,
            error: record.error,
        }
    }
}

impl FieldError {
    /// Leaf error for `validator` at `path`
    pub fn invalid(validator: impl Into<String>, path: &[String]) -> Self {
        FieldError::Invalid(InvalidValue {
            validator: validator.into(),
            path: path.to_vec(),
        })
    }

    /// Wrap an error coming from a nested object field
    pub fn nested(name: &str, type_name: &str, error: FieldError) -> Self {
        FieldError::Subfield(SubfieldError {
            name: name.to_string(),
            type_name: type_name.to_string(),
            index: None,
            error: Box::new(error),
        })
    }

    /// Wrap an error coming from element `index` of a list-of-object field
    pub fn element(name: &str, type_name: &str, index: usize, error: FieldError) -> Self {
        FieldError::Subfield(SubfieldError {
            name: name.to_string(),
            type_name: type_name.to_string(),
            index: Some(index),
            error: Box::new(error),
        })
    }

    /// The innermost leaf error
    pub fn leaf(&self) -> &InvalidValue {
        match self {
            FieldError::Invalid(leaf) => leaf,
            FieldError::Subfield(sub) => sub.error.leaf(),
        }
    }

    /// Full location of the offending value
    pub fn path(&self) -> &[String] {
        &self.leaf().path
    }

    /// Kind of the validator that failed
    pub fn validator(&self) -> &str {
        &self.leaf().validator
    }

    pub fn is_subfield(&self) -> bool {
        matches!(self, FieldError::Subfield(_))
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leaf = self.leaf();
        write!(f, "{}: {}", leaf.path.join("."), leaf.validator)
    }
}
