// File: src/factory.rs
// Purpose: Compiled entity factory

use std::sync::Arc;

use serde_json::Value;
use tracing::trace;

use crate::config::Fallback;
use crate::definition::{DefaultValue, FieldDefinition, FieldKind};
use crate::normalize::normalize;
use crate::transforms::apply_transforms;
use crate::value::{as_elements, as_entity, Entity};

/// Builds defaulted, transformed entities from partial input
///
/// The result always carries exactly the declared field names: lists default
/// to `[]`, nested objects to their own fully built defaults, and unknown
/// input keys are dropped. Building never fails.
#[derive(Debug, Clone)]
pub struct Factory {
    fields: Arc<[FieldDefinition]>,
    fallback: Fallback,
}

impl Factory {
    /// Factory over `fields` (normalized here) with the falsy fallback
    pub fn new(fields: &[FieldDefinition]) -> Self {
        Self::with_fallback(fields, Fallback::default())
    }

    pub fn with_fallback(fields: &[FieldDefinition], fallback: Fallback) -> Self {
        Self {
            fields: normalize(fields).into(),
            fallback,
        }
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Build an entity; non-object input counts as no input
    pub fn build(&self, input: Option<&Value>) -> Entity {
        self.build_entity(as_entity(input))
    }

    /// Entity made of defaults only
    pub fn build_default(&self) -> Entity {
        self.build_entity(None)
    }

    fn build_entity(&self, input: Option<&Entity>) -> Entity {
        trace!(fields = self.fields.len(), has_input = input.is_some(), "building entity");

        let mut entity = Entity::new();
        for field in self.fields.iter() {
            let supplied = input.and_then(|input| input.get(&field.name));
            let value = match &field.kind {
                FieldKind::Scalar { default } => {
                    self.build_scalar(field, default.as_ref(), supplied)
                }
                FieldKind::List => Value::Array(
                    as_elements(supplied)
                        .iter()
                        .map(|element| apply_transforms(field.transforms(), element.clone()))
                        .collect(),
                ),
                FieldKind::Object(children) => {
                    let child = self.child(children);
                    Value::Object(child.build(supplied))
                }
                FieldKind::ObjectList(children) => {
                    let child = self.child(children);
                    Value::Array(
                        as_elements(supplied)
                            .iter()
                            .map(|element| Value::Object(child.build(Some(element))))
                            .collect(),
                    )
                }
            };
            entity.insert(field.name.clone(), value);
        }
        entity
    }

    fn build_scalar(
        &self,
        field: &FieldDefinition,
        default: Option<&DefaultValue>,
        supplied: Option<&Value>,
    ) -> Value {
        let value = match supplied {
            Some(value) if self.fallback.keeps(value) => value.clone(),
            _ => default.map(DefaultValue::resolve).unwrap_or(Value::Null),
        };
        apply_transforms(field.transforms(), value)
    }

    fn child(&self, children: &[FieldDefinition]) -> Factory {
        Factory::with_fallback(children, self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::{string_to_upper_case, string_trim};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn entity(value: Value) -> Entity {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_applies_transforms() {
        let factory = Factory::new(&[FieldDefinition::scalar("guid")
            .with_transform(string_trim)
            .with_transform(string_to_upper_case)]);
        let built = factory.build(Some(&json!({ "guid": " 123abc  " })));
        assert_eq!(built, entity(json!({ "guid": "123ABC" })));
    }

    #[test]
    fn test_applies_transforms_to_defaults() {
        let factory = Factory::new(&[FieldDefinition::scalar("guid")
            .with_transform(string_trim)
            .with_default(DefaultValue::new(|| json!("abcd   \n   ")))]);
        assert_eq!(factory.build_default(), entity(json!({ "guid": "abcd" })));
    }

    #[test]
    fn test_default_without_transforms_is_kept() {
        let factory = Factory::new(&[FieldDefinition::scalar("n").with_default_value(5)]);
        assert_eq!(factory.build(Some(&json!({}))), entity(json!({ "n": 5 })));
    }

    #[test]
    fn test_missing_default_is_null() {
        let factory = Factory::new(&[FieldDefinition::scalar("note")]);
        assert_eq!(factory.build_default(), entity(json!({ "note": null })));
    }

    #[test]
    fn test_falsy_input_takes_default() {
        let factory = Factory::new(&[FieldDefinition::scalar("count").with_default_value(3)]);
        assert_eq!(factory.build(Some(&json!({ "count": 0 }))), entity(json!({ "count": 3 })));
    }

    #[test]
    fn test_missing_policy_keeps_falsy_input() {
        let factory = Factory::with_fallback(
            &[FieldDefinition::scalar("count").with_default_value(3)],
            Fallback::Missing,
        );
        assert_eq!(factory.build(Some(&json!({ "count": 0 }))), entity(json!({ "count": 0 })));
        assert_eq!(factory.build(Some(&json!({ "count": null }))), entity(json!({ "count": 3 })));
    }

    #[test]
    fn test_default_thunk_runs_only_when_needed() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let factory = Factory::new(&[FieldDefinition::scalar("id").with_default(DefaultValue::new(
            move || json!(format!("id-{}", counter.fetch_add(1, Ordering::SeqCst))),
        ))]);

        assert_eq!(
            factory.build(Some(&json!({ "id": "given" }))),
            entity(json!({ "id": "given" }))
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(factory.build_default(), entity(json!({ "id": "id-0" })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_list_transforms_each_element() {
        let factory = Factory::new(&[FieldDefinition::list("guids")
            .with_transform(string_trim)
            .with_transform(string_to_upper_case)]);
        let built = factory.build(Some(&json!({ "guids": [" 123abc  ", "x"] })));
        assert_eq!(built, entity(json!({ "guids": ["123ABC", "X"] })));
    }

    #[test]
    fn test_list_defaults_to_empty() {
        let factory = Factory::new(&[FieldDefinition::list("guids").with_default_value("abcd")]);
        assert_eq!(factory.build_default(), entity(json!({ "guids": [] })));
        assert_eq!(
            factory.build(Some(&json!({ "guids": "not a list" }))),
            entity(json!({ "guids": [] }))
        );
    }

    #[test]
    fn test_drops_unknown_keys() {
        let factory = Factory::new(&[FieldDefinition::list("guid").with_transform(string_trim)]);
        let built = factory.build(Some(&json!({ "guid": ["abcd"], "foo": "bar" })));
        assert_eq!(built, entity(json!({ "guid": ["abcd"] })));
    }

    #[test]
    fn test_nested_object_defaults() {
        let home = vec![
            FieldDefinition::scalar("city").with_default_value(""),
            FieldDefinition::list("lines"),
        ];
        let factory = Factory::new(&[FieldDefinition::object("home", home.clone())]);
        let nested = Factory::new(&home).build_default();
        assert_eq!(factory.build_default(), entity(json!({ "home": nested })));
    }

    #[test]
    fn test_object_list_builds_each_element() {
        let factory = Factory::new(&[FieldDefinition::object_list(
            "homes",
            vec![
                FieldDefinition::scalar("city").with_transform(string_trim),
                FieldDefinition::scalar("zip").with_default_value(""),
            ],
        )]);
        let built = factory.build(Some(&json!({
            "homes": [{ "city": " San Diego ", "extra": 1 }, "bogus"]
        })));
        assert_eq!(
            built,
            entity(json!({
                "homes": [
                    { "city": "San Diego", "zip": "" },
                    { "city": "", "zip": "" }
                ]
            }))
        );
    }

    #[test]
    fn test_non_object_input_is_ignored() {
        let factory = Factory::new(&[FieldDefinition::scalar("a").with_default_value("d")]);
        assert_eq!(factory.build(Some(&json!("nope"))), entity(json!({ "a": "d" })));
        assert_eq!(factory.build(None), entity(json!({ "a": "d" })));
    }
}
