//! JSON intake and the general-purpose schema validation trait
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use crate::validation::error::{SchemaError, Violation};
use crate::validation::result::ValidationResult;
use jsonschema::error::ValidationErrorKind;
use jsonschema::Draft;
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::OnceLock;

/// The draft-04 meta-schema, bundled so every violation can be collected
pub const DRAFT4_META_SCHEMA_JSON: &str = include_str!("../../schemas/draft-04.schema.json");

const DRAFT4_URI: &str = "http://json-schema.org/draft-04/schema";

static DRAFT4_META_VALIDATOR: OnceLock<jsonschema::Validator> = OnceLock::new();

fn draft4_meta_validator() -> &'static jsonschema::Validator {
    DRAFT4_META_VALIDATOR.get_or_init(|| {
        let meta_schema: Value = serde_json::from_str(DRAFT4_META_SCHEMA_JSON)
            .expect("Bundled draft-04 meta-schema is valid JSON");
        jsonschema::options()
            .with_draft(Draft::Draft4)
            .build(&meta_schema)
            .expect("Failed to create draft-04 meta-schema validator")
    })
}

/// A document handed to a validator, either already parsed or as raw JSON text
#[derive(Debug, Clone, Copy)]
pub enum JsonInput<'a> {
    /// Raw JSON text, parsed on intake
    Text(&'a str),
    /// An already parsed document
    Value(&'a Value),
}

impl<'a> From<&'a str> for JsonInput<'a> {
    fn from(text: &'a str) -> Self {
        JsonInput::Text(text)
    }
}

impl<'a> From<&'a String> for JsonInput<'a> {
    fn from(text: &'a String) -> Self {
        JsonInput::Text(text.as_str())
    }
}

impl<'a> From<&'a Value> for JsonInput<'a> {
    /// A JSON string value is treated as JSON text, like any other string input
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(text) => JsonInput::Text(text.as_str()),
            other => JsonInput::Value(other),
        }
    }
}

/// Make sure the input is a parsed JSON document
///
/// Text input is parsed; on failure the `Err` holds the `Invalid JSON` result the caller
/// should return as-is. On success the optional result carries the text heuristic
/// warning from [`validate_json_text`] (always `None` for already parsed input).
pub fn ensure_json_object(
    input: JsonInput<'_>,
) -> Result<(Cow<'_, Value>, Option<ValidationResult>), ValidationResult> {
    match input {
        JsonInput::Value(value) => Ok((Cow::Borrowed(value), None)),
        JsonInput::Text(text) => match serde_json::from_str::<Value>(text) {
            Ok(parsed) => {
                let text_result = validate_json_text(text, &parsed);
                Ok((Cow::Owned(parsed), Some(text_result)))
            }
            Err(_) => Err(ValidationResult::error("", "Invalid JSON")),
        },
    }
}

/// Compare the entered JSON text against its parsed form
///
/// A length difference between the (tab-normalized) text and the 4-space pretty printed
/// document hints at content the parser silently dropped, such as duplicate keys.
pub fn validate_json_text(text: &str, parsed: &Value) -> ValidationResult {
    let entered = text.replace('\t', "    ");

    let Some(stringified) = to_pretty_json(parsed) else {
        return ValidationResult::ok();
    };

    if entered.encode_utf16().count() != stringified.encode_utf16().count() {
        return ValidationResult::warning(
            "",
            "The parsed JSON did not equal the entered JSON. You may have a duplicate key, etc.",
        );
    }

    ValidationResult::ok()
}

fn to_pretty_json(value: &Value) -> Option<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer).ok()?;
    String::from_utf8(buffer).ok()
}

/// Narrow interface to a general-purpose JSON Schema validator
pub trait SchemaValidator {
    /// Validate `instance` against `schema`, reporting every violation
    fn validate_instance(
        &self,
        instance: &Value,
        schema: &Value,
    ) -> Result<Vec<Violation>, SchemaError>;

    /// Validate `schema` itself against its meta-schema
    fn validate_schema(&self, schema: &Value) -> Vec<Violation>;

    /// Check an instance without collecting violations
    fn is_valid(&self, instance: &Value, schema: &Value) -> bool {
        matches!(self.validate_instance(instance, schema), Ok(violations) if violations.is_empty())
    }
}

/// [`SchemaValidator`] backed by the `jsonschema` crate
#[derive(Debug, Clone, Copy)]
pub struct JsonSchemaValidator {
    draft: Draft,
}

impl Default for JsonSchemaValidator {
    /// Draft-04, the draft the View schema is written in
    fn default() -> Self {
        Self {
            draft: Draft::Draft4,
        }
    }
}

impl JsonSchemaValidator {
    /// Create a validator for a specific draft
    pub fn with_draft(draft: Draft) -> Self {
        Self { draft }
    }

    /// The draft schemas are interpreted as
    pub fn draft(&self) -> Draft {
        self.draft
    }

    fn meta_schema_uri(&self) -> &'static str {
        match self.draft {
            Draft::Draft4 => "http://json-schema.org/draft-04/schema#",
            Draft::Draft6 => "http://json-schema.org/draft-06/schema#",
            Draft::Draft7 => "http://json-schema.org/draft-07/schema#",
            Draft::Draft201909 => "https://json-schema.org/draft/2019-09/schema",
            _ => "https://json-schema.org/draft/2020-12/schema",
        }
    }
}

impl SchemaValidator for JsonSchemaValidator {
    fn validate_instance(
        &self,
        instance: &Value,
        schema: &Value,
    ) -> Result<Vec<Violation>, SchemaError> {
        let validator = jsonschema::options()
            .with_draft(self.draft)
            .build(schema)
            .map_err(|e| SchemaError::InvalidSchema {
                message: e.to_string(),
            })?;

        Ok(validator.iter_errors(instance).map(to_violation).collect())
    }

    /// Draft-04 documents report every violation; documents declaring another draft
    /// report the first one the `jsonschema` meta validator finds.
    fn validate_schema(&self, schema: &Value) -> Vec<Violation> {
        let declared = schema.get("$schema").and_then(Value::as_str);
        let is_draft4 = match declared {
            Some(uri) => uri.trim_end_matches('#') == DRAFT4_URI,
            None => matches!(self.draft, Draft::Draft4),
        };

        if is_draft4 {
            return draft4_meta_validator()
                .iter_errors(schema)
                .map(to_violation)
                .collect();
        }

        // Documents without "$schema" are checked against this validator's draft
        let mut document = schema.clone();
        if let Value::Object(map) = &mut document {
            if !map.contains_key("$schema") {
                map.insert(
                    "$schema".to_string(),
                    Value::String(self.meta_schema_uri().to_string()),
                );
            }
        }

        match jsonschema::meta::validate(&document) {
            Ok(()) => Vec::new(),
            Err(error) => vec![to_violation(error)],
        }
    }
}

fn to_violation(error: jsonschema::ValidationError<'_>) -> Violation {
    let path = format!("#{}", error.instance_path);

    match &error.kind {
        ValidationErrorKind::Required { property } => {
            let name = match property {
                Value::String(name) => name.clone(),
                other => other.to_string(),
            };
            Violation::missing_property(path, name)
        }
        _ => Violation::other(path, error.to_string()),
    }
}
