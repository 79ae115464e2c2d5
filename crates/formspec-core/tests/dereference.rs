//! Integration tests for Model dereferencing
//!
//! These tests run the dereferencer over the fixture Models, covering reference reuse
//! in sibling branches, nested cycles and partial overrides.

use formspec_core::dereference::contains_ref;
use formspec_core::{dereference, ValidationError};
use serde_json::{json, Value};

fn fixture(text: &str) -> Value {
    serde_json::from_str(text).expect("fixture is valid JSON")
}

fn complex_model() -> Value {
    fixture(include_str!("fixtures/complex-model.json"))
}

fn cyclical_model() -> Value {
    fixture(include_str!("fixtures/cyclical-model.json"))
}

fn refs_model() -> Value {
    fixture(include_str!("fixtures/refs-model.json"))
}

#[test]
fn test_complex_model_is_fully_expanded() {
    let model = complex_model();
    let result = dereference(&model);

    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert!(!contains_ref(&result.schema["properties"]));
    assert_eq!(
        result.refs,
        vec!["#/definitions/element", "#/definitions/interface"]
    );

    let host = &result.schema["properties"]["network"]["properties"]["host"];
    assert_eq!(host["title"], "Host");
    assert_eq!(host["type"], "object");
    assert_eq!(
        host["properties"]["interfaces"]["items"]["properties"]["ipAddress"]["title"],
        "IP Address"
    );

    let firewall = &result.schema["properties"]["network"]["properties"]["firewall"];
    assert!(firewall.get("title").is_none());
    assert_eq!(
        firewall["properties"]["interfaces"]["items"],
        model["definitions"]["interface"]
    );
}

#[test]
fn test_original_model_is_not_modified() {
    let model = complex_model();
    let before = model.clone();

    let _ = dereference(&model);
    assert_eq!(model, before);
}

#[test]
fn test_sibling_references_are_not_cycles() {
    let result = dereference(&refs_model());

    assert!(result.errors.is_empty());
    assert_eq!(result.refs, vec!["#/definitions/address"]);

    let billing = &result.schema["properties"]["billing"];
    let shipping = &result.schema["properties"]["shipping"];
    assert_eq!(billing["title"], "Billing Address");
    assert_eq!(billing["properties"], shipping["properties"]);
    assert_eq!(billing["required"], json!(["street", "city"]));
}

#[test]
fn test_nested_cycle_is_reported_once_per_branch() {
    let result = dereference(&cyclical_model());

    let message = "Cycle detected trying to dereference '#/definitions/interface'";
    assert_eq!(
        result.errors,
        vec![
            ValidationError::new(
                "#/properties/network/properties/host/properties/interfaces/items/properties/nestedInterface/$ref",
                message
            ),
            ValidationError::new(
                "#/properties/network/properties/firewall/properties/interfaces/items/properties/nestedInterface/$ref",
                message
            ),
        ]
    );
    assert_eq!(
        result.refs,
        vec!["#/definitions/element", "#/definitions/interface"]
    );

    // expansion continues everywhere except below the cyclic reference
    let items = &result.schema["properties"]["network"]["properties"]["host"]["properties"]
        ["interfaces"]["items"];
    assert_eq!(items["properties"]["name"], json!({"type": "string"}));
    assert_eq!(
        items["properties"]["nestedInterface"],
        json!({"$ref": "#/definitions/interface"})
    );
}

#[test]
fn test_dereferencing_is_idempotent() {
    let once = dereference(&complex_model()).schema;
    let twice = dereference(&once);

    assert_eq!(twice.schema, once);
    assert!(twice.errors.is_empty());
    assert!(twice.refs.is_empty());
}

#[test]
fn test_result_serializes() {
    let result = dereference(&json!({
        "type": "object",
        "properties": {"a": {"$ref": "#/definitions/missing"}}
    }));

    let serialized = serde_json::to_value(&result).unwrap();
    assert_eq!(
        serialized["errors"],
        json!([{"path": "#/properties/a/$ref", "message": "Invalid reference: '#/definitions/missing'"}])
    );
    assert_eq!(serialized["refs"], json!([]));
}
