//! Model dereferencing
//!
//! Expands `$ref` pointers into a self-contained Model tree. Expansion starts at each
//! root property and descends through `properties` of objects (including the properties
//! of each object-form `dependencies` entry) and `items` of arrays.
//! Each branch carries the references it is currently expanding, so reusing a reference
//! in sibling branches is fine while a reference nested inside its own expansion is a
//! cycle. A failing node is reported at its `$ref` path and its descendants are left
//! alone; the rest of the tree is still expanded.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::model_path::{get_path, reference_path};
use formspec_schemas::ValidationError;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Outcome of dereferencing a Model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DereferenceResult {
    /// The expanded Model (partially expanded when `errors` is not empty)
    pub schema: Value,
    /// Cycles and unresolved references, keyed by the failing `$ref` path
    pub errors: Vec<ValidationError>,
    /// Every distinct reference that was expanded, in first-expansion order
    pub refs: Vec<String>,
}

impl DereferenceResult {
    /// True when every reference could be expanded
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Expand every `$ref` reachable from the root properties of `model`
///
/// The input is never modified; the expansion happens on a copy.
pub fn dereference(model: &Value) -> DereferenceResult {
    let mut dereferencer = Dereferencer {
        schema: model.clone(),
        errors: Vec::new(),
        refs: Vec::new(),
    };

    for segments in object_children(model, &[]) {
        dereferencer.expand(segments, &[]);
    }

    DereferenceResult {
        schema: dereferencer.schema,
        errors: dereferencer.errors,
        refs: dereferencer.refs,
    }
}

struct Dereferencer {
    schema: Value,
    errors: Vec<ValidationError>,
    refs: Vec<String>,
}

impl Dereferencer {
    /// Expand the node at `segments`; `stack` holds the references expanded by its ancestors
    fn expand(&mut self, segments: Vec<String>, stack: &[String]) {
        let node_ref = pointer(&segments);

        let expanded = match self.resolve(&segments, stack) {
            Ok(expanded) => expanded,
            Err(err) => {
                debug!(path = %node_ref, error = %err, "Failed to dereference");
                self.errors
                    .push(ValidationError::new(format!("{node_ref}/$ref"), err.to_string()));
                return;
            }
        };

        let child_stack: Vec<String> = match expanded {
            Some(reference) => stack.iter().cloned().chain([reference]).collect(),
            None => stack.to_vec(),
        };

        let Some(node) = node_at(&self.schema, &segments) else {
            return;
        };

        let children: Vec<Vec<String>> = match node.get("type").and_then(Value::as_str) {
            Some("object") => object_children(node, &segments),
            Some("array") => vec![child(&segments, ["items"])],
            _ => Vec::new(),
        };

        for child_segments in children {
            self.expand(child_segments, &child_stack);
        }
    }

    /// Merge the node's reference target into it, returning the reference that was expanded
    fn resolve(&mut self, segments: &[String], stack: &[String]) -> Result<Option<String>> {
        let reference = match node_at(&self.schema, segments).and_then(|node| node.get("$ref")) {
            None => return Ok(None),
            Some(Value::String(reference)) => reference.clone(),
            Some(other) => {
                return Err(Error::NonStringReference {
                    value: other.to_string(),
                })
            }
        };

        if stack.contains(&reference) {
            return Err(Error::Cycle { reference });
        }

        let target = match get_path(&self.schema, &reference_path(&reference)?) {
            Some(Value::Object(target)) => target.clone(),
            _ => return Err(Error::UnresolvedReference { reference }),
        };

        if let Some(Value::Object(node)) = node_at_mut(&mut self.schema, segments) {
            merge_defaults(node, target);
            node.shift_remove("$ref");
        }

        debug!(reference = %reference, path = %pointer(segments), "Expanded reference");
        if !self.refs.contains(&reference) {
            self.refs.push(reference.clone());
        }

        Ok(Some(reference))
    }
}

/// Copy every key of `defaults` the node does not define itself
fn merge_defaults(node: &mut Map<String, Value>, defaults: Map<String, Value>) {
    for (key, value) in defaults {
        node.entry(key).or_insert(value);
    }
}

/// Paths of the property models of an object node, dependency properties last
fn object_children(node: &Value, segments: &[String]) -> Vec<Vec<String>> {
    let keys = |model: &Value| -> Vec<String> {
        model
            .get("properties")
            .and_then(Value::as_object)
            .map(|properties| properties.keys().cloned().collect())
            .unwrap_or_default()
    };

    let mut children: Vec<Vec<String>> = keys(node)
        .iter()
        .map(|key| child(segments, ["properties", key.as_str()]))
        .collect();

    let dependencies = node.get("dependencies").and_then(Value::as_object);
    for (name, dependency) in dependencies.into_iter().flatten() {
        children.extend(keys(dependency).iter().map(|key| {
            child(segments, ["dependencies", name.as_str(), "properties", key.as_str()])
        }));
    }

    children
}

fn child<const N: usize>(segments: &[String], extra: [&str; N]) -> Vec<String> {
    segments
        .iter()
        .cloned()
        .chain(extra.iter().map(|s| s.to_string()))
        .collect()
}

fn pointer(segments: &[String]) -> String {
    format!("#/{}", segments.join("/"))
}

fn node_at<'a>(schema: &'a Value, segments: &[String]) -> Option<&'a Value> {
    segments
        .iter()
        .try_fold(schema, |current, segment| current.get(segment.as_str()))
}

fn node_at_mut<'a>(schema: &'a mut Value, segments: &[String]) -> Option<&'a mut Value> {
    segments
        .iter()
        .try_fold(schema, |current, segment| current.get_mut(segment.as_str()))
}

/// True when `$ref` appears anywhere in the tree
pub fn contains_ref(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.contains_key("$ref") || map.values().any(contains_ref),
        Value::Array(items) => items.iter().any(contains_ref),
        _ => false,
    }
}
