//! Dotted model references and the paths they map to
//!
//! Views address Model properties with dotted references (`address.street`). Inside the
//! Model each step lives under `properties`, and dependency-conditioned properties live
//! under `dependencies.<name>.properties`.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde_json::Value;

/// Convert a dotted model reference into a dotted path within the Model
///
/// `hero.firstName` maps to `properties.hero.properties.firstName`. With a dependency
/// (`paymentInfo.useEft`), `dependencies.useEft` is spliced in before the final
/// `properties.<name>` pair. Empty references and references with a leading or trailing
/// `.` have no path.
pub fn get_model_path(reference: &str, dependency: Option<&str>) -> Option<String> {
    if reference.is_empty() || reference.starts_with('.') || reference.ends_with('.') {
        return None;
    }

    let mut segments: Vec<&str> = Vec::new();
    for part in reference.split('.') {
        segments.push("properties");
        segments.push(part);
    }

    if let Some(dependency) = dependency.filter(|d| !d.is_empty()) {
        let name = dependency.rsplit('.').next().unwrap_or(dependency);
        let at = segments.len() - 2;
        segments.insert(at, name);
        segments.insert(at, "dependencies");
    }

    Some(segments.join("."))
}

/// Look up the sub-model a dotted reference points at
pub fn get_sub_model<'a>(
    model: &'a Value,
    reference: &str,
    dependency: Option<&str>,
) -> Option<&'a Value> {
    let path = get_model_path(reference, dependency)?;
    get_path(model, &path)
}

/// Look up a value by dotted path, stepping through object keys and array indices
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }

    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

fn get_path_mut<'a>(value: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(move |i| items.get_mut(i)),
        _ => None,
    })
}

/// Remove the property at a dotted path (`foo.bar.baz`)
///
/// Nothing happens when the parent does not exist.
pub fn remove_property(object: &mut Value, path: &str) {
    let (parent, property) = match path.rsplit_once('.') {
        Some((parent_path, property)) => (get_path_mut(object, parent_path), property),
        None => (Some(object), path),
    };

    if let Some(Value::Object(map)) = parent {
        map.shift_remove(property);
    }
}

/// Convert a `$ref` (`#/definitions/foo`) into a dotted path (`definitions.foo`)
pub fn reference_path(reference: &str) -> Result<String> {
    let Some(pointer) = reference.strip_prefix("#/") else {
        return Err(Error::InvalidReference {
            reference: reference.to_string(),
        });
    };

    Ok(pointer.split('/').collect::<Vec<_>>().join("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_model_path() {
        assert_eq!(
            get_model_path("hero", None).as_deref(),
            Some("properties.hero")
        );
        assert_eq!(
            get_model_path("foo.bar.baz", None).as_deref(),
            Some("properties.foo.properties.bar.properties.baz")
        );
    }

    #[test]
    fn test_get_model_path_rejects_stray_dots() {
        assert_eq!(get_model_path("hero.", None), None);
        assert_eq!(get_model_path(".hero", None), None);
        assert_eq!(get_model_path(".", None), None);
        assert_eq!(get_model_path("", None), None);
    }

    #[test]
    fn test_get_model_path_with_dependency() {
        assert_eq!(
            get_model_path("paymentInfo.routingNumber", Some("paymentInfo.useEft")).as_deref(),
            Some("properties.paymentInfo.dependencies.useEft.properties.routingNumber")
        );
        assert_eq!(
            get_model_path("routingNumber", Some("useEft")).as_deref(),
            Some("dependencies.useEft.properties.routingNumber")
        );
        assert_eq!(get_model_path("routingNumber.", Some("useEft")), None);
    }

    #[test]
    fn test_get_sub_model() {
        let model = json!({
            "type": "object",
            "properties": {
                "address": {
                    "type": "object",
                    "properties": {"street": {"type": "string"}}
                },
                "useEft": {"type": "boolean"}
            },
            "dependencies": {
                "useEft": {
                    "properties": {"routingNumber": {"type": "string"}}
                }
            }
        });

        assert_eq!(
            get_sub_model(&model, "address.street", None),
            Some(&json!({"type": "string"}))
        );
        assert_eq!(get_sub_model(&model, "address.zip", None), None);
        assert_eq!(
            get_sub_model(&model, "routingNumber", Some("useEft")),
            Some(&json!({"type": "string"}))
        );
        assert_eq!(get_sub_model(&model, "routingNumber", None), None);
    }

    #[test]
    fn test_get_path_through_arrays() {
        let value = json!({"phones": [{"number": "555"}, {"number": "556"}]});
        assert_eq!(get_path(&value, "phones.1.number"), Some(&json!("556")));
        assert_eq!(get_path(&value, "phones.x.number"), None);
        assert_eq!(get_path(&value, "phones.5"), None);
        assert_eq!(get_path(&value, ""), None);
    }

    #[test]
    fn test_remove_property() {
        let mut value = json!({"foo": {"bar": {"baz": 1, "qux": 2}}, "top": true});

        remove_property(&mut value, "foo.bar.baz");
        assert_eq!(value, json!({"foo": {"bar": {"qux": 2}}, "top": true}));

        remove_property(&mut value, "top");
        assert_eq!(value, json!({"foo": {"bar": {"qux": 2}}}));

        remove_property(&mut value, "missing.parent.key");
        assert_eq!(value, json!({"foo": {"bar": {"qux": 2}}}));
    }

    #[test]
    fn test_reference_path() {
        assert_eq!(reference_path("#/definitions/foo").unwrap(), "definitions.foo");
        assert_eq!(
            reference_path("#/definitions/foo/properties/bar").unwrap(),
            "definitions.foo.properties.bar"
        );

        let err = reference_path("definitions/foo").unwrap_err();
        assert!(matches!(err, Error::InvalidReference { .. }));
        assert!(reference_path("#definitions").is_err());
    }
}
