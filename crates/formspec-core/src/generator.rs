//! Default View generation
//!
//! Builds a View that lays out every property of a Model: one container per nested
//! object, one row per property, primitive fields ahead of nested sub-forms.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use crate::dereference::dereference;
use crate::types::{Cell, Container, RootContainer, View};
use serde_json::Value;
use tracing::{debug, trace};

/// Id of the container every generated View starts from
pub const MAIN_CONTAINER: &str = "main";

/// Label of the generated root container
pub const MAIN_LABEL: &str = "Main";

/// Generate a default View for a Model
pub fn get_default_view(model: &Value) -> View {
    let model = dereference(model).schema;

    let mut generator = ViewGenerator::default();
    generator.add_container(MAIN_CONTAINER, &model);

    let mut view = View::new();
    view.root_containers.push(RootContainer {
        label: MAIN_LABEL.to_string(),
        container: MAIN_CONTAINER.to_string(),
    });
    view.containers = generator.containers;
    view
}

#[derive(Default)]
struct ViewGenerator {
    containers: Vec<Container>,
}

impl ViewGenerator {
    /// First of `id`, `id-1`, `id-2`, ... not yet taken
    fn unique_id(&self, id: &str) -> String {
        let taken = |candidate: &str| self.containers.iter().any(|c| c.id == candidate);
        if !taken(id) {
            return id.to_string();
        }

        (1..)
            .map(|count| format!("{id}-{count}"))
            .find(|candidate| !taken(candidate.as_str()))
            .unwrap_or_else(|| id.to_string())
    }

    /// Add a container laying out `model`, returning its id
    fn add_container(&mut self, name: &str, model: &Value) -> String {
        let id = self.unique_id(name);
        trace!(id = %id, "Generating container");

        let index = self.containers.len();
        self.containers.push(Container::new(id.as_str()));

        let mut rows = Vec::new();
        for (property, sub_model) in property_order(model) {
            rows.push(vec![self.cell(property, None, sub_model)]);
        }

        let dependencies = model.get("dependencies").and_then(Value::as_object);
        for (dependency, dependency_model) in dependencies.into_iter().flatten() {
            let declared = model
                .get("properties")
                .and_then(|properties| properties.get(dependency.as_str()))
                .is_some();
            if !declared {
                debug!(dependency = %dependency, "Skipping dependency on an undeclared property");
                continue;
            }

            for (property, sub_model) in property_order(dependency_model) {
                rows.push(vec![self.cell(property, Some(dependency.as_str()), sub_model)]);
            }
        }

        self.containers[index].rows = rows;
        id
    }

    fn cell(&mut self, property: &str, dependency: Option<&str>, model: &Value) -> Cell {
        let mut cell = Cell::model(property);
        if let Some(dependency) = dependency {
            cell = cell.with_depends_on(dependency);
        }

        match model.get("type").and_then(Value::as_str) {
            Some("object") => {
                let id = self.add_container(property, model);
                cell.with_container(id)
            }
            Some("array") => match model.get("items") {
                Some(items) if items.get("type").and_then(Value::as_str) == Some("object") => {
                    let id = self.add_container(property, items);
                    cell.with_item_container(id)
                }
                _ => cell,
            },
            _ => cell,
        }
    }
}

/// Properties of `model` with primitive types first, each group in declaration order
fn property_order(model: &Value) -> Vec<(&str, &Value)> {
    let properties = model.get("properties").and_then(Value::as_object);

    let (complex, primitive): (Vec<_>, Vec<_>) = properties
        .into_iter()
        .flatten()
        .map(|(name, sub_model)| (name.as_str(), sub_model))
        .partition(|(_, sub_model)| {
            matches!(
                sub_model.get("type").and_then(Value::as_str),
                Some("object") | Some("array")
            )
        });

    primitive.into_iter().chain(complex).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_model() {
        let model = json!({
            "type": "object",
            "properties": {
                "firstName": {"type": "string"},
                "lastName": {"type": "string"}
            },
            "required": ["firstName", "lastName"]
        });

        let view = get_default_view(&model);
        assert_eq!(
            view.to_value().unwrap(),
            json!({
                "version": "1.0",
                "type": "form",
                "rootContainers": [{"label": "Main", "container": "main"}],
                "containers": [{
                    "id": "main",
                    "rows": [[{"model": "firstName"}], [{"model": "lastName"}]]
                }]
            })
        );
    }

    #[test]
    fn test_primitives_come_first() {
        let model = json!({
            "type": "object",
            "properties": {
                "address": {"type": "object", "properties": {"street": {"type": "string"}}},
                "tags": {"type": "array", "items": {"type": "string"}},
                "name": {"type": "string"},
                "age": {"type": "number"}
            }
        });

        let view = get_default_view(&model);
        let main = view.container("main").unwrap();
        let order: Vec<&str> = main
            .rows
            .iter()
            .map(|row| row[0].model.as_deref().unwrap())
            .collect();
        assert_eq!(order, vec!["name", "age", "address", "tags"]);

        assert_eq!(main.rows[2][0], Cell::model("address").with_container("address"));
        assert_eq!(main.rows[3][0], Cell::model("tags"));
    }

    #[test]
    fn test_array_of_objects_gets_item_container() {
        let model = json!({
            "type": "object",
            "properties": {
                "phones": {
                    "type": "array",
                    "items": {"type": "object", "properties": {"number": {"type": "string"}}}
                }
            }
        });

        let view = get_default_view(&model);
        assert_eq!(
            view.container("main").unwrap().rows[0][0],
            Cell::model("phones").with_item_container("phones")
        );
        assert_eq!(
            view.container("phones").unwrap().rows,
            vec![vec![Cell::model("number")]]
        );
    }

    #[test]
    fn test_container_ids_are_unique() {
        let model = json!({
            "type": "object",
            "properties": {
                "main": {
                    "type": "object",
                    "properties": {
                        "main": {"type": "object", "properties": {"x": {"type": "string"}}}
                    }
                }
            }
        });

        let view = get_default_view(&model);
        let ids: Vec<&str> = view.containers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["main", "main-1", "main-2"]);
    }

    #[test]
    fn test_dependencies_become_dependent_cells() {
        let model = json!({
            "type": "object",
            "properties": {
                "useEft": {"type": "boolean"},
                "name": {"type": "string"}
            },
            "dependencies": {
                "useEft": {
                    "properties": {
                        "bank": {"type": "object", "properties": {"name": {"type": "string"}}},
                        "routingNumber": {"type": "string"}
                    }
                },
                "undeclared": {"properties": {"x": {"type": "string"}}}
            }
        });

        let view = get_default_view(&model);
        let main = view.container("main").unwrap();
        assert_eq!(
            main.rows,
            vec![
                vec![Cell::model("useEft")],
                vec![Cell::model("name")],
                vec![Cell::model("routingNumber").with_depends_on("useEft")],
                vec![Cell::model("bank")
                    .with_depends_on("useEft")
                    .with_container("bank")],
            ]
        );
    }
}
