//! Value validation
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use formspec_schemas::{
    JsonSchemaValidator, SchemaValidator, ValidationError, ValidationResult, Violation,
    ViolationKind,
};
use serde_json::Value;
use tracing::debug;

const FIELD_REQUIRED: &str = "Field is required.";

/// Validate a Value against its (dereferenced) Model
///
/// An empty string is the "nothing entered yet" sentinel form inputs use: it fails only
/// when `required` is set. Anything else goes through the general JSON Schema validator,
/// with missing required properties reported at the property's own path.
pub fn validate_value(value: &Value, model: &Value, required: bool) -> ValidationResult {
    validate_value_with(&JsonSchemaValidator::default(), value, model, required)
}

/// [`validate_value`] with a caller-provided schema validator
pub fn validate_value_with<V: SchemaValidator + ?Sized>(
    validator: &V,
    value: &Value,
    model: &Value,
    required: bool,
) -> ValidationResult {
    if value.as_str() == Some("") {
        return if required {
            ValidationResult::error("", FIELD_REQUIRED)
        } else {
            ValidationResult::ok()
        };
    }

    match validator.validate_instance(value, model) {
        Ok(violations) => {
            ValidationResult::from_errors(violations.into_iter().map(translate).collect())
        }
        Err(err) => {
            debug!(error = %err, "Model could not be compiled for value validation");
            ValidationResult::error("#", format!("Invalid model: {err}"))
        }
    }
}

fn translate(violation: Violation) -> ValidationError {
    match violation.kind {
        ViolationKind::MissingProperty(property) => {
            let separator = if violation.path.ends_with('/') { "" } else { "/" };
            ValidationError::new(
                format!("{}{separator}{property}", violation.path),
                FIELD_REQUIRED,
            )
        }
        ViolationKind::Other(message) => ValidationError::new(violation.path, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn model() -> Value {
        json!({
            "type": "object",
            "properties": {
                "firstName": {"type": "string"},
                "age": {"type": "number"},
                "address": {
                    "type": "object",
                    "properties": {"street": {"type": "string"}},
                    "required": ["street"]
                }
            },
            "required": ["firstName"]
        })
    }

    #[test]
    fn test_empty_sentinel() {
        let result = validate_value(&json!(""), &model(), true);
        assert!(!result.is_valid());
        assert_eq!(result.errors(), &[ValidationError::new("", "Field is required.")]);

        assert!(validate_value(&json!(""), &model(), false).is_valid());
    }

    #[test]
    fn test_valid_value() {
        let value = json!({"firstName": "Ada", "age": 36, "address": {"street": "Main"}});
        let result = validate_value(&value, &model(), false);
        assert!(result.is_valid());
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_missing_properties_are_required_fields() {
        let value = json!({"address": {}});
        let result = validate_value(&value, &model(), false);

        let mut errors = result.errors().to_vec();
        errors.sort_by(|a, b| a.path.cmp(&b.path));
        assert_eq!(
            errors,
            vec![
                ValidationError::new("#/address/street", "Field is required."),
                ValidationError::new("#/firstName", "Field is required."),
            ]
        );
    }

    #[test]
    fn test_other_messages_pass_through() {
        let value = json!({"firstName": "Ada", "age": "thirty"});
        let result = validate_value(&value, &model(), false);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].path, "#/age");
        assert_ne!(result.errors()[0].message, "Field is required.");
    }

    #[test]
    fn test_trailing_slash_parent() {
        let error = translate(Violation::missing_property("#/", "name"));
        assert_eq!(error.path, "#/name");
    }

    #[test]
    fn test_invalid_model() {
        let result = validate_value(&json!(1), &json!({"type": 12}), false);
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].path, "#");
        assert!(result.errors()[0].message.starts_with("Invalid model: "));
    }
}
