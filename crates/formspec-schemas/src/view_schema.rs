//! The published View schema and the defaults derived from it
//!
//! The schema text is part of the public contract: View authors validate against it, so
//! it is shipped verbatim as `schemas/view.schema.json`.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use serde_json::{Map, Value};
use std::sync::OnceLock;

/// The View schema, exactly as published
pub const VIEW_SCHEMA_JSON: &str = include_str!("../schemas/view.schema.json");

/// Top-level attributes a View may carry
pub const KNOWN_VIEW_ATTRIBUTES: [&str; 5] =
    ["version", "type", "rootContainers", "containers", "buttonLabels"];

static VIEW_SCHEMA: OnceLock<Value> = OnceLock::new();

/// The parsed View schema
pub fn view_schema() -> &'static Value {
    VIEW_SCHEMA.get_or_init(|| {
        serde_json::from_str(VIEW_SCHEMA_JSON).expect("Bundled View schema is valid JSON")
    })
}

fn cell_properties() -> Option<&'static Map<String, Value>> {
    view_schema()
        .pointer("/definitions/cell/properties")
        .and_then(Value::as_object)
}

/// Names of every attribute a cell may carry
pub fn cell_property_names() -> Vec<&'static str> {
    cell_properties()
        .map(|properties| properties.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

/// Default values for cell attributes that declare one
pub fn cell_defaults() -> Map<String, Value> {
    collect_defaults(cell_properties())
}

/// Default labels for the form buttons
pub fn button_label_defaults() -> Map<String, Value> {
    collect_defaults(
        view_schema()
            .pointer("/properties/buttonLabels/properties")
            .and_then(Value::as_object),
    )
}

fn collect_defaults(properties: Option<&Map<String, Value>>) -> Map<String, Value> {
    let mut defaults = Map::new();
    for (name, property) in properties.into_iter().flatten() {
        if let Some(default) = property.get("default") {
            defaults.insert(name.clone(), default.clone());
        }
    }
    defaults
}
