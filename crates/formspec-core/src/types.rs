//! Typed View documents
//!
//! These mirror the published View schema. Field names serialize in camelCase and
//! absent optional attributes are left out, so a typed View round-trips to the same
//! JSON a View author would write.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Current View format version
pub const VIEW_VERSION: &str = "1.0";

/// The only View type
pub const VIEW_TYPE: &str = "form";

/// A declarative form layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub version: String,
    #[serde(rename = "type")]
    pub view_type: String,
    pub root_containers: Vec<RootContainer>,
    pub containers: Vec<Container>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_labels: Option<ButtonLabels>,
}

impl View {
    /// An empty form View with no containers
    pub fn new() -> Self {
        Self {
            version: VIEW_VERSION.to_string(),
            view_type: VIEW_TYPE.to_string(),
            root_containers: Vec::new(),
            containers: Vec::new(),
            button_labels: None,
        }
    }

    /// Find a container by id
    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|container| container.id == id)
    }

    /// The View as a JSON document
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Read a typed View from a JSON document
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry point of a View
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootContainer {
    pub label: String,
    pub container: String,
}

/// Labels for the form buttons
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonLabels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit: Option<String>,
}

/// A named group of rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub id: String,
    pub rows: Vec<Vec<Cell>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_class_name: Option<String>,
}

impl Container {
    /// An empty container
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            rows: Vec::new(),
            class_name: None,
            default_class_name: None,
        }
    }
}

/// A single layout unit referencing a Model path or another container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Box<Cell>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renderer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_renderer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_class_name: Option<String>,
    /// Options handed to a custom renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
}

impl Cell {
    /// A cell for the property at a dotted model reference
    pub fn model<S: Into<String>>(reference: S) -> Self {
        Self {
            model: Some(reference.into()),
            ..Self::default()
        }
    }

    /// A cell delegating to another container
    pub fn container<S: Into<String>>(id: S) -> Self {
        Self {
            container: Some(id.into()),
            ..Self::default()
        }
    }

    /// Condition the cell on a dependency
    pub fn with_depends_on<S: Into<String>>(mut self, dependency: S) -> Self {
        self.depends_on = Some(dependency.into());
        self
    }

    /// Render the cell's object sub-model with a container
    pub fn with_container<S: Into<String>>(mut self, id: S) -> Self {
        self.container = Some(id.into());
        self
    }

    /// Render each item of the cell's array sub-model with a container
    pub fn with_item_container<S: Into<String>>(mut self, id: S) -> Self {
        self.item = Some(Box::new(Cell::container(id)));
        self
    }
}
