//! Formspec Core - Model dereferencing, validation and default View generation
//!
//! This crate checks the three documents a Formspec form is built from and keeps them
//! consistent with each other:
//!
//! - **Model**: a JSON Schema subset describing the data shape
//! - **View**: an optional layout of containers, rows and cells referencing Model paths
//! - **Value**: a data instance that should conform to the Model
//!
//! # Main Components
//!
//! - **Dereferencer**: expands `$ref` pointers into a self-contained Model, detecting cycles
//! - **Model Validator**: structural checks on top of the JSON Schema meta-schema
//! - **Value Validator**: instance validation with form-friendly "required" errors
//! - **View Validator**: cross-checks containers, cells and renderers against the Model
//! - **Default View Generator**: synthesizes a valid View when none is supplied
//!
//! Every validation entry point returns a [`ValidationResult`]; problems in the documents
//! are never reported as `Err`.
//!
//! # Example
//!
//! ```rust
//! use formspec_core::{get_default_view, validate_model, validate_view, BUILTIN_RENDERERS};
//! use serde_json::json;
//!
//! let model = json!({
//!     "type": "object",
//!     "properties": {
//!         "firstName": {"type": "string"},
//!         "lastName": {"type": "string"}
//!     },
//!     "required": ["firstName", "lastName"]
//! });
//!
//! assert!(validate_model(&model).is_valid());
//!
//! let view = get_default_view(&model).to_value().unwrap();
//! assert!(validate_view(&view, &model, &BUILTIN_RENDERERS).is_valid());
//! ```
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

pub mod config;
pub mod dereference;
pub mod error;
pub mod generator;
pub mod model_path;
pub mod renderers;
pub mod types;
pub mod validator;

// Re-export main types for convenience
pub use config::ValidationConfig;
pub use dereference::{dereference, DereferenceResult};
pub use error::{Error, Result};
pub use generator::get_default_view;
pub use model_path::{get_model_path, get_path, get_sub_model, reference_path, remove_property};
pub use renderers::{RendererLookup, BUILTIN_RENDERERS};
pub use types::{ButtonLabels, Cell, Container, RootContainer, View};
pub use validator::{
    validate_enumerated_attribute, validate_model, validate_model_with_config,
    validate_required_attribute, validate_value, validate_view, validate_view_with_config,
    ContainerValidator,
};

// Re-export the shared result types so callers need only this crate
pub use formspec_schemas::{
    aggregate, JsonInput, ValidationError, ValidationResult, ValidationWarning,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
