//! Model, View and Value validation
//!
//! The validators are organized into focused modules:
//! - `fields`: required and enumerated attribute checks
//! - `model`: Model structure and reference integrity
//! - `value`: Value instances against a Model
//! - `container`: container/row/cell cross references
//! - `view`: whole-View validation built on the container validator
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

pub mod container;
pub mod fields;
pub mod model;
pub mod value;
pub mod view;

// Re-export public API
pub use container::{CellKind, ContainerValidator, KNOWN_CONTAINER_ATTRIBUTES};
pub use fields::{validate_enumerated_attribute, validate_required_attribute, SUPPORTED_TYPES};
pub use model::{validate_model, validate_model_with_config, validate_sub_model};
pub use value::{validate_value, validate_value_with};
pub use view::{validate_view, validate_view_with_config};
