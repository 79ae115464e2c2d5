//! View validation
//!
//! The View document is first checked against the published View schema. Only a View
//! of the right shape is then cross-checked against the Model: root containers, every
//! container reachable from them, and the containers nothing reaches.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use crate::config::ValidationConfig;
use crate::dereference::dereference;
use crate::renderers::RendererLookup;
use crate::validator::container::ContainerValidator;
use crate::validator::fields::{validate_enumerated_attribute, validate_required_attribute};
use crate::validator::value::validate_value;
use formspec_schemas::{
    add_error, add_warning, aggregate, ensure_json_object, view_schema, JsonInput,
    ValidationResult, KNOWN_VIEW_ATTRIBUTES,
};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Validate a View against a Model and the renderers available to it
pub fn validate_view<'a, V, R>(view: V, model: &Value, renderers: &R) -> ValidationResult
where
    V: Into<JsonInput<'a>>,
    R: RendererLookup + ?Sized,
{
    validate_view_with_config(view, model, renderers, &ValidationConfig::default())
}

/// [`validate_view`] with explicit configuration
pub fn validate_view_with_config<'a, V, R>(
    view: V,
    model: &Value,
    renderers: &R,
    config: &ValidationConfig,
) -> ValidationResult
where
    V: Into<JsonInput<'a>>,
    R: RendererLookup + ?Sized,
{
    let (view, text_result) = match ensure_json_object(view.into()) {
        Ok(parsed) => parsed,
        Err(result) => return result,
    };

    if model.is_null() {
        return ValidationResult::error("#", "Invalid Model");
    }

    let model = dereference(model).schema;

    let schema_result = validate_value(&view, view_schema(), true);
    if !schema_result.is_valid() {
        debug!(errors = schema_result.errors().len(), "View failed view-schema validation");
        return config.finish(schema_result);
    }

    let containers: &[Value] = view
        .get("containers")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut results = vec![schema_result, validate_container_ids(containers)];

    let mut validator = ContainerValidator::new(containers, &model, renderers);
    results.push(validate_root_containers(&view, containers, &mut validator));

    if let Some(attributes) = view.as_object() {
        for attribute in attributes.keys() {
            if !KNOWN_VIEW_ATTRIBUTES.contains(&attribute.as_str()) {
                add_warning(&mut results, "#", format!("Unrecognized attribute \"{attribute}\""));
            }
        }
    }

    let validated: HashSet<&str> = validator
        .containers_validated()
        .iter()
        .map(String::as_str)
        .collect();
    for index in 0..containers.len() {
        let path = format!("#/containers/{index}");
        if !validated.contains(path.as_str()) {
            debug!(path = %path, "Container never reached from a root container");
            add_warning(&mut results, path, "Unused container was not validated");
        }
    }

    results.extend(config.text_result(text_result));

    config.finish(aggregate(results))
}

fn validate_container_ids(containers: &[Value]) -> ValidationResult {
    let mut results = Vec::new();
    let mut seen = HashSet::new();

    for (index, container) in containers.iter().enumerate() {
        if let Some(id) = container.get("id").and_then(Value::as_str) {
            if !seen.insert(id) {
                add_error(
                    &mut results,
                    format!("#/containers/{index}/id"),
                    format!("Duplicate container id \"{id}\""),
                );
            }
        }
    }

    aggregate(results)
}

fn validate_root_containers<'a, R: RendererLookup + ?Sized>(
    view: &'a Value,
    containers: &'a [Value],
    validator: &mut ContainerValidator<'a, R>,
) -> ValidationResult {
    let ids: Vec<&str> = containers
        .iter()
        .filter_map(|container| container.get("id").and_then(Value::as_str))
        .collect();

    let roots = view.get("rootContainers").and_then(Value::as_array);
    let mut results = Vec::new();

    for (index, root) in roots.into_iter().flatten().enumerate() {
        let path = format!("#/rootContainers/{index}");
        results.push(validate_required_attribute(root, &path, "label"));
        results.push(validate_enumerated_attribute(root, &path, "container", &ids));

        let container_id = root.get("container").and_then(Value::as_str);
        let found = containers
            .iter()
            .position(|container| container.get("id").and_then(Value::as_str) == container_id);
        if let (Some(_), Some(container_index)) = (container_id, found) {
            results.push(validator.validate(
                &format!("#/containers/{container_index}"),
                &containers[container_index],
                None,
            ));
        }
    }

    aggregate(results)
}
