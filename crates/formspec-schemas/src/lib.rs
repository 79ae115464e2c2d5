//! Formspec Schemas - View schema, validation results and JSON Schema adapter
//!
//! This crate holds the pieces of Formspec that every validator shares:
//! - **View Schema**: the published draft-04 JSON Schema describing the shape of a View
//! - **Validation Results**: `ValidationResult` and the aggregation helpers used to merge them
//! - **JSON Intake**: accepting documents either as parsed values or as JSON text
//! - **Schema Validation**: a narrow adapter over the `jsonschema` crate
//!
//! ## Quick Start
//!
//! ```rust
//! use formspec_schemas::{aggregate, ValidationResult};
//!
//! let result = aggregate([
//!     ValidationResult::ok(),
//!     ValidationResult::warning("#", "Unrecognized attribute \"foo\""),
//!     ValidationResult::error("#/version", "Field is required."),
//! ]);
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.errors().len(), 1);
//! assert_eq!(result.warnings().len(), 1);
//! ```
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

pub mod validation;
pub mod view_schema;

// Re-export commonly used types for convenience
pub use validation::{
    add_error, add_warning, aggregate, ensure_json_object, JsonInput, JsonSchemaValidator,
    SchemaError, SchemaValidator, ValidationError, ValidationResult, ValidationWarning, Violation,
    ViolationKind,
};
pub use view_schema::{
    button_label_defaults, cell_defaults, cell_property_names, view_schema, KNOWN_VIEW_ATTRIBUTES,
    VIEW_SCHEMA_JSON,
};
