//! Integration tests for Model validation

use formspec_core::{validate_model, validate_model_with_config, ValidationConfig, ValidationError};
use serde_json::{json, Value};

const SIMPLE_MODEL: &str = include_str!("fixtures/simple-model.json");
const COMPLEX_MODEL: &str = include_str!("fixtures/complex-model.json");
const CYCLICAL_MODEL: &str = include_str!("fixtures/cyclical-model.json");
const REFS_MODEL: &str = include_str!("fixtures/refs-model.json");
const DEPENDENCIES_MODEL: &str = include_str!("fixtures/dependencies-model.json");

fn parse(text: &str) -> Value {
    serde_json::from_str(text).expect("fixture is valid JSON")
}

#[test]
fn test_fixture_models_are_valid() {
    for text in [SIMPLE_MODEL, COMPLEX_MODEL, REFS_MODEL, DEPENDENCIES_MODEL] {
        let result = validate_model(&parse(text));
        assert!(result.is_valid(), "{:?}", result.errors());
        assert!(result.warnings().is_empty());
    }
}

#[test]
fn test_pretty_printed_text_has_no_warnings() {
    let result = validate_model(SIMPLE_MODEL.trim_end());
    assert!(result.is_valid(), "{:?}", result.errors());
    assert!(result.warnings().is_empty(), "{:?}", result.warnings());
}

#[test]
fn test_duplicate_key_text_warns() {
    let text = "{\n    \"type\": \"object\",\n    \"type\": \"object\"\n}";
    let result = validate_model(text);
    assert!(result.is_valid());
    assert_eq!(result.warnings().len(), 1);
    assert_eq!(result.warnings()[0].path, "");
    assert_eq!(
        result.warnings()[0].message,
        "The parsed JSON did not equal the entered JSON. You may have a duplicate key, etc."
    );
}

#[test]
fn test_cycles_are_model_errors() {
    let result = validate_model(&parse(CYCLICAL_MODEL));
    assert!(!result.is_valid());
    assert_eq!(result.errors().len(), 2);
    for error in result.errors() {
        assert!(error.path.ends_with("/nestedInterface/$ref"));
        assert_eq!(
            error.message,
            "Cycle detected trying to dereference '#/definitions/interface'"
        );
    }
}

#[test]
fn test_unsupported_root_type_is_a_single_error() {
    let result = validate_model(&json!({"type": "foo-bar"}));
    assert_eq!(
        result.errors(),
        &[ValidationError::new(
            "#",
            "Invalid value \"foo-bar\" for \"type\" Valid options are [\"string\",\"object\",\"array\",\"number\",\"boolean\"]"
        )]
    );
}

#[test]
fn test_referenced_properties_are_checked_through_their_target() {
    let model = json!({
        "definitions": {"code": {"type": "integer"}},
        "type": "object",
        "properties": {"code": {"$ref": "#/definitions/code"}}
    });

    let result = validate_model(&model);
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].path, "#/properties/code");
}

#[test]
fn test_nested_errors_have_full_paths() {
    let mut model = parse(SIMPLE_MODEL);
    model["properties"]["phones"]["items"]["properties"]["number"]["type"] = json!("integer");
    model["properties"]["address"]["properties"]["zip"]["editable"] = json!(1);

    let result = validate_model(&model);
    let paths: Vec<&str> = result.errors().iter().map(|e| e.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "#/properties/address/properties/zip/editable",
            "#/properties/phones/items/properties/number",
        ]
    );
}

#[test]
fn test_invalid_json() {
    let result = validate_model("{\"type\": \"object\"");
    assert_eq!(result.errors(), &[ValidationError::new("", "Invalid JSON")]);
    assert!(result.warnings().is_empty());
}

#[test]
fn test_max_errors() {
    let model = json!({
        "type": "object",
        "properties": {
            "a.b": {"type": "string"},
            "c.d": {"type": "string"},
            "e.f": {"type": "string"}
        }
    });

    assert_eq!(validate_model(&model).errors().len(), 3);

    let config = ValidationConfig::default().with_max_errors(1);
    let result = validate_model_with_config(&model, &config);
    assert!(!result.is_valid());
    assert_eq!(result.errors().len(), 1);
}
