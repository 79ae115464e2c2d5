//! Validation error types
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A validation error addressed by path
///
/// `path` is a `#/...` pointer-style string for schema and view validation, or an empty
/// string for whole-document failures such as unparseable JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub struct ValidationError {
    /// Path to the attribute where the error occurred
    pub path: String,
    /// Human-readable error message
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error at '{}': {}", self.path, self.message)
    }
}

impl ValidationError {
    /// Create a new validation error
    pub fn new<P, M>(path: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A non-fatal finding; never affects `valid`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    /// Path to the attribute the warning is about
    pub path: String,
    /// Human-readable warning message
    pub message: String,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Warning at '{}': {}", self.path, self.message)
    }
}

impl ValidationWarning {
    /// Create a new validation warning
    pub fn new<P, M>(path: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// What a general-purpose schema validator reported for one location of an instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    /// A property listed in `required` is absent from the object at the violation path
    MissingProperty(String),
    /// Any other failure, carrying the validator's own message
    Other(String),
}

/// A schema violation reported by a [`SchemaValidator`](crate::SchemaValidator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// `#`-prefixed JSON pointer to the failing location in the instance
    pub path: String,
    /// The kind of failure
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::MissingProperty(property) => {
                write!(f, "{}: missing required property '{}'", self.path, property)
            }
            ViolationKind::Other(message) => write!(f, "{}: {}", self.path, message),
        }
    }
}

impl Violation {
    /// Create a violation for an absent required property
    pub fn missing_property<P: Into<String>, N: Into<String>>(path: P, property: N) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::MissingProperty(property.into()),
        }
    }

    /// Create a violation carrying a validator message
    pub fn other<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::Other(message.into()),
        }
    }

    /// Render the violation as the validator reported it, without rewriting
    pub fn into_error(self) -> ValidationError {
        let message = match self.kind {
            ViolationKind::MissingProperty(property) => {
                format!("Missing required property: {}", property)
            }
            ViolationKind::Other(message) => message,
        };
        ValidationError::new(self.path, message)
    }
}

/// Failures of the schema adapter itself, as opposed to failures of the instance
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The schema could not be compiled into a validator
    #[error("{message}")]
    InvalidSchema { message: String },
}
