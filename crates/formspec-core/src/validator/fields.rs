//! Attribute-level validation helpers
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use formspec_schemas::ValidationResult;
use serde_json::Value;

/// Model types currently supported
pub const SUPPORTED_TYPES: [&str; 5] = ["string", "object", "array", "number", "boolean"];

/// Validate that `attribute` is present on `object`
pub fn validate_required_attribute(object: &Value, path: &str, attribute: &str) -> ValidationResult {
    match object.get(attribute) {
        Some(_) => ValidationResult::ok(),
        None => missing(path, attribute),
    }
}

/// Validate that `attribute` is present on `object` and is one of `options`
pub fn validate_enumerated_attribute<S: AsRef<str>>(
    object: &Value,
    path: &str,
    attribute: &str,
    options: &[S],
) -> ValidationResult {
    let Some(value) = object.get(attribute) else {
        return missing(path, attribute);
    };

    let known = value
        .as_str()
        .is_some_and(|value| options.iter().any(|option| option.as_ref() == value));
    if known {
        return ValidationResult::ok();
    }

    let shown = match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    ValidationResult::error(
        path,
        format!(
            "Invalid value \"{shown}\" for \"{attribute}\" Valid options are {}",
            options_json(options)
        ),
    )
}

fn missing(path: &str, attribute: &str) -> ValidationResult {
    ValidationResult::error(path, format!("Missing required attribute \"{attribute}\""))
}

/// Render options as a compact JSON array (`["a","b"]`)
fn options_json<S: AsRef<str>>(options: &[S]) -> String {
    let quoted: Vec<String> = options
        .iter()
        .map(|option| Value::String(option.as_ref().to_string()).to_string())
        .collect();
    format!("[{}]", quoted.join(","))
}
