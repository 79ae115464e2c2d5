//! Container validation
//!
//! Checks the cross references of a View's containers: cells must point at reachable
//! Model paths, known containers and known renderers. Containers reached through a model
//! cell are validated against that cell's sub-model, so nested containers always see the
//! Model scope they will be rendered with.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use crate::model_path::get_sub_model;
use crate::renderers::RendererLookup;
use formspec_schemas::{add_error, add_warning, aggregate, cell_property_names, ValidationResult};
use serde_json::Value;
use tracing::trace;

/// Attributes a container may carry
pub const KNOWN_CONTAINER_ATTRIBUTES: [&str; 4] = ["id", "rows", "className", "defaultClassName"];

/// What a cell refers to, by precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind<'c> {
    /// A model cell whose sub-model lives under a dependency
    DependentModel { model: &'c str, depends_on: &'c str },
    /// A model cell
    Model(&'c str),
    /// A cell delegating to another container
    Container(&'c str),
    /// Neither `model` nor `container` is set
    Empty,
}

impl<'c> CellKind<'c> {
    /// Classify a cell; empty strings count as unset
    pub fn of(cell: &'c Value) -> Self {
        let attribute = move |name: &str| {
            cell.get(name)
                .and_then(Value::as_str)
                .filter(|value| !value.is_empty())
        };

        if let Some(depends_on) = attribute("dependsOn") {
            CellKind::DependentModel {
                model: attribute("model").unwrap_or_default(),
                depends_on,
            }
        } else if let Some(model) = attribute("model") {
            CellKind::Model(model)
        } else if let Some(container) = attribute("container") {
            CellKind::Container(container)
        } else {
            CellKind::Empty
        }
    }
}

/// Validates containers of a single View against a dereferenced Model
///
/// One instance is used per View validation; it records every container path it visits
/// so unreachable containers can be reported afterwards.
pub struct ContainerValidator<'a, R: RendererLookup + ?Sized> {
    containers: &'a [Value],
    model: &'a Value,
    renderers: &'a R,
    known_cell_attributes: Vec<&'static str>,
    containers_validated: Vec<String>,
    active: Vec<(String, &'a Value)>,
}

impl<'a, R: RendererLookup + ?Sized> ContainerValidator<'a, R> {
    /// Create a validator for `containers`, resolving model references against `model`
    pub fn new(containers: &'a [Value], model: &'a Value, renderers: &'a R) -> Self {
        Self {
            containers,
            model,
            renderers,
            known_cell_attributes: cell_property_names(),
            containers_validated: Vec::new(),
            active: Vec::new(),
        }
    }

    /// Paths of every container validated so far, in visiting order
    pub fn containers_validated(&self) -> &[String] {
        &self.containers_validated
    }

    /// Validate `container` found at `path`
    ///
    /// Model references are resolved against `model`, or the root Model when `None`.
    pub fn validate(
        &mut self,
        path: &str,
        container: &'a Value,
        model: Option<&'a Value>,
    ) -> ValidationResult {
        trace!(path = %path, "Validating container");
        self.containers_validated.push(path.to_string());

        let model = model.unwrap_or(self.model);
        self.active.push((path.to_string(), model));

        let mut results = Vec::new();

        if let Some(attributes) = container.as_object() {
            for attribute in attributes.keys() {
                if !KNOWN_CONTAINER_ATTRIBUTES.contains(&attribute.as_str()) {
                    add_warning(&mut results, path, format!("Unrecognized attribute \"{attribute}\""));
                }
            }
        }

        let rows = container.get("rows").and_then(Value::as_array);
        for (index, row) in rows.into_iter().flatten().enumerate() {
            results.push(self.validate_row(&format!("{path}/rows/{index}"), row, model));
        }

        self.active.pop();
        aggregate(results)
    }

    fn validate_row(&mut self, path: &str, row: &'a Value, model: &'a Value) -> ValidationResult {
        let Some(cells) = row.as_array() else {
            return ValidationResult::error(path, "Rows must consist of Arrays of Cells");
        };

        cells
            .iter()
            .enumerate()
            .map(|(index, cell)| self.validate_cell(&format!("{path}/{index}"), cell, model))
            .collect()
    }

    fn validate_cell(&mut self, path: &str, cell: &'a Value, model: &'a Value) -> ValidationResult {
        let mut results = Vec::new();

        match CellKind::of(cell) {
            CellKind::DependentModel {
                model: reference,
                depends_on,
            } => {
                if get_sub_model(model, depends_on, None).is_none() {
                    add_error(
                        &mut results,
                        format!("{path}/dependsOn"),
                        format!("Invalid model reference \"{depends_on}\""),
                    );
                } else {
                    let sub_model = get_sub_model(model, reference, Some(depends_on));
                    results.push(self.validate_model_cell(path, cell, reference, sub_model));
                }
            }
            CellKind::Model(reference) => {
                let sub_model = get_sub_model(model, reference, None);
                results.push(self.validate_model_cell(path, cell, reference, sub_model));
            }
            CellKind::Container(container_id) => {
                results.push(self.validate_sub_container(
                    &format!("{path}/container"),
                    container_id,
                    model,
                ));
            }
            CellKind::Empty => add_error(
                &mut results,
                path,
                "Either \"model\" or \"container\" must be defined for each cell.",
            ),
        }

        if let Some(attributes) = cell.as_object() {
            for attribute in attributes.keys() {
                if !self.known_cell_attributes.contains(&attribute.as_str()) {
                    add_warning(&mut results, path, format!("Unrecognized attribute \"{attribute}\""));
                }
            }
        }

        aggregate(results)
    }

    fn validate_model_cell(
        &mut self,
        path: &str,
        cell: &'a Value,
        reference: &str,
        sub_model: Option<&'a Value>,
    ) -> ValidationResult {
        let Some(sub_model) = sub_model else {
            return ValidationResult::error(
                format!("{path}/model"),
                format!("Invalid model reference \"{reference}\""),
            );
        };

        if is_custom_cell(cell) {
            return self.validate_custom_cell(path, cell);
        }

        if is_object_array(sub_model) {
            return self.validate_array_cell(path, cell, sub_model);
        }

        if sub_model.get("type").and_then(Value::as_str) == Some("object") {
            let container_path = format!("{path}/container");
            return match cell.get("container").and_then(Value::as_str) {
                Some(container_id) => {
                    self.validate_sub_container(&container_path, container_id, sub_model)
                }
                None => ValidationResult::error(
                    container_path,
                    "Missing required attribute \"container\"",
                ),
            };
        }

        ValidationResult::ok()
    }

    fn validate_custom_cell(&self, path: &str, cell: &Value) -> ValidationResult {
        let (attribute, renderer) = match cell.get("renderer") {
            Some(renderer) => ("renderer", renderer),
            None => match cell.get("itemRenderer") {
                Some(renderer) => ("itemRenderer", renderer),
                None => return ValidationResult::ok(),
            },
        };

        self.validate_renderer(&format!("{path}/{attribute}"), renderer)
    }

    fn validate_renderer(&self, path: &str, renderer: &Value) -> ValidationResult {
        let known = renderer
            .as_str()
            .is_some_and(|name| self.renderers.contains_renderer(name));
        if known {
            return ValidationResult::ok();
        }

        let shown = match renderer {
            Value::String(name) => name.clone(),
            other => other.to_string(),
        };
        ValidationResult::error(path, format!("Invalid renderer reference \"{shown}\""))
    }

    fn validate_array_cell(
        &mut self,
        path: &str,
        cell: &'a Value,
        sub_model: &'a Value,
    ) -> ValidationResult {
        if cell.get("container").is_some() {
            return ValidationResult::error(
                path,
                "Containers on arrays not currently supported. Maybe you want it on the item sub-object?",
            );
        }

        let Some(item) = cell.get("item") else {
            return ValidationResult::ok();
        };

        if let Some(renderer) = item.get("renderer") {
            return self.validate_renderer(&format!("{path}/item/renderer"), renderer);
        }

        match (item.get("container").and_then(Value::as_str), sub_model.get("items")) {
            (Some(container_id), Some(items)) => {
                self.validate_sub_container(&format!("{path}/item/container"), container_id, items)
            }
            _ => ValidationResult::ok(),
        }
    }

    fn validate_sub_container(
        &mut self,
        path: &str,
        container_id: &str,
        model: &'a Value,
    ) -> ValidationResult {
        let containers = self.containers;
        let found = containers
            .iter()
            .position(|container| container.get("id").and_then(Value::as_str) == Some(container_id));

        let Some(index) = found else {
            return ValidationResult::error(
                path,
                format!("Invalid container reference \"{container_id}\""),
            );
        };

        let container_path = format!("#/containers/{index}");
        let reentered = self
            .active
            .iter()
            .any(|(active_path, scope)| *active_path == container_path && std::ptr::eq(*scope, model));
        if reentered {
            return ValidationResult::error(
                path,
                format!("Container reference cycle detected for \"{container_id}\""),
            );
        }

        self.validate(&container_path, &containers[index], Some(model))
    }
}

fn is_custom_cell(cell: &Value) -> bool {
    cell.get("renderer").is_some() || cell.get("itemRenderer").is_some()
}

fn is_object_array(model: &Value) -> bool {
    model.get("type").and_then(Value::as_str) == Some("array")
        && model.pointer("/items/type").and_then(Value::as_str) == Some("object")
}
