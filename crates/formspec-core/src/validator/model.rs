//! Model validation
//!
//! A Model is checked in layers: the root `type`, the generic JSON Schema meta-schema,
//! the structural rules Formspec adds on top (supported types, reference-safe property
//! names, single-schema array items), and finally reference integrity.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use crate::config::ValidationConfig;
use crate::dereference::dereference;
use crate::validator::fields::{validate_enumerated_attribute, SUPPORTED_TYPES};
use formspec_schemas::{
    add_error, aggregate, ensure_json_object, JsonInput, JsonSchemaValidator, SchemaValidator,
    ValidationResult, Violation,
};
use serde_json::Value;
use tracing::debug;

/// Validate a Model given as a parsed document or JSON text
pub fn validate_model<'a, M: Into<JsonInput<'a>>>(model: M) -> ValidationResult {
    validate_model_with_config(model, &ValidationConfig::default())
}

/// [`validate_model`] with explicit configuration
pub fn validate_model_with_config<'a, M: Into<JsonInput<'a>>>(
    model: M,
    config: &ValidationConfig,
) -> ValidationResult {
    let (model, text_result) = match ensure_json_object(model.into()) {
        Ok(parsed) => parsed,
        Err(result) => return result,
    };

    if let Some(root_type) = model.get("type") {
        let type_result = validate_enumerated_attribute(&model, "#", "type", &SUPPORTED_TYPES);
        if !type_result.is_valid() {
            debug!(root_type = %root_type, "Unsupported root model type");
            return config.finish(type_result);
        }
    }

    let violations = JsonSchemaValidator::default().validate_schema(&model);
    if !violations.is_empty() {
        debug!(count = violations.len(), "Model failed meta-schema validation");
        return config.finish(ValidationResult::from_errors(
            violations.into_iter().map(Violation::into_error).collect(),
        ));
    }

    let dereferenced = dereference(&model);

    let mut results = Vec::new();
    if model.get("type").and_then(Value::as_str) != Some("object") {
        add_error(&mut results, "#/type", "Only root level \"object\" type is supported.");
    } else {
        let reported: Vec<&str> = dereferenced
            .errors
            .iter()
            .map(|error| error.path.as_str())
            .collect();
        results.push(validate_children("#", &dereferenced.schema, &reported));
    }

    results.extend(config.text_result(text_result));
    results.push(ValidationResult::from_errors(dereferenced.errors));

    config.finish(aggregate(results))
}

/// Validate a nested Model found at `path`
///
/// The sub-model is expected to be dereferenced already; a leftover `$ref` node is
/// checked like any other node.
pub fn validate_sub_model(path: &str, sub_model: &Value) -> ValidationResult {
    check_sub_model(path, sub_model, &[])
}

/// `reported` holds the `$ref` paths dereferencing already failed on; those nodes are skipped
fn check_sub_model(path: &str, sub_model: &Value, reported: &[&str]) -> ValidationResult {
    if sub_model.get("$ref").is_some() {
        let ref_path = format!("{path}/$ref");
        if reported.contains(&ref_path.as_str()) {
            return ValidationResult::ok();
        }
    }

    aggregate([
        validate_enumerated_attribute(sub_model, path, "type", &SUPPORTED_TYPES),
        validate_children(path, sub_model, reported),
    ])
}

fn validate_children(path: &str, model: &Value, reported: &[&str]) -> ValidationResult {
    let mut results = Vec::new();

    if let Some(editable) = model.get("editable") {
        if !editable.is_boolean() {
            add_error(
                &mut results,
                format!("{path}/editable"),
                format!("Expected a boolean, found [{editable}]"),
            );
        }
    }

    match model.get("type").and_then(Value::as_str) {
        Some("object") => {
            results.push(validate_properties(&format!("{path}/properties"), model, reported));

            let dependencies = model.get("dependencies").and_then(Value::as_object);
            for (name, dependency) in dependencies.into_iter().flatten() {
                let dependency_path = format!("{path}/dependencies/{name}/properties");
                results.push(validate_properties(&dependency_path, dependency, reported));
            }
        }
        Some("array") => results.push(validate_array(path, model, reported)),
        _ => {}
    }

    aggregate(results)
}

fn validate_properties(path: &str, model: &Value, reported: &[&str]) -> ValidationResult {
    let mut results = Vec::new();

    let properties = model.get("properties").and_then(Value::as_object);
    for (key, sub_model) in properties.into_iter().flatten() {
        let sub_path = format!("{path}/{key}");
        if key.is_empty() {
            add_error(&mut results, sub_path.as_str(), "Property names cannot be empty");
        } else if key.contains('.') {
            add_error(&mut results, sub_path.as_str(), "Property names cannot include \".\"");
        }
        results.push(check_sub_model(&sub_path, sub_model, reported));
    }

    aggregate(results)
}

fn validate_array(path: &str, model: &Value, reported: &[&str]) -> ValidationResult {
    let items_path = format!("{path}/items");

    match model.get("items") {
        Some(items) if items.is_object() => check_sub_model(&items_path, items, reported),
        Some(Value::Array(_)) => {
            ValidationResult::error(items_path, "Tuple notation not supported at this time")
        }
        Some(_) => ValidationResult::ok(),
        None => ValidationResult::error(path, "Missing required attribute \"items\""),
    }
}
