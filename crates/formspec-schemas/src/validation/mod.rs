//! Validation primitives shared by the Model, View and Value validators
//!
//! - **error**: path-addressed errors and warnings, schema violations
//! - **result**: `ValidationResult` and the Result Aggregator helpers
//! - **base**: JSON text intake and the general-purpose JSON Schema adapter
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod error;
pub mod result;

// Re-export commonly used types
pub use base::{
    ensure_json_object, JsonInput, JsonSchemaValidator, SchemaValidator, DRAFT4_META_SCHEMA_JSON,
};
pub use error::{SchemaError, ValidationError, ValidationWarning, Violation, ViolationKind};
pub use result::{add_error, add_warning, aggregate, ValidationResult};
