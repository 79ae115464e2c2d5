//! Error types for the Formspec core library
//!
//! Caller-facing operations report problems in the documents they are given through
//! `ValidationResult`s. The errors defined here are precondition failures of the
//! lower-level helpers; the dereferencer turns their messages into validation errors.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Main error type for Formspec core operations
#[derive(Error, Debug)]
pub enum Error {
    /// A `$ref` that is not a local `#/...` pointer
    #[error("Invalid reference \"{reference}\" must begin with \"#/\"")]
    InvalidReference { reference: String },

    /// A `$ref` whose target does not exist in the schema
    #[error("Invalid reference: '{reference}'")]
    UnresolvedReference { reference: String },

    /// A `$ref` that is already being expanded further up the same branch
    #[error("Cycle detected trying to dereference '{reference}'")]
    Cycle { reference: String },

    /// A `$ref` whose value is not a string
    #[error("Invalid reference {value} must be a string")]
    NonStringReference { value: String },

    /// JSON parsing and serialization errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_messages() {
        let err = Error::InvalidReference {
            reference: "definitions/foo".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid reference \"definitions/foo\" must begin with \"#/\""
        );

        let err = Error::UnresolvedReference {
            reference: "#/definitions/missing".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid reference: '#/definitions/missing'");

        let err = Error::Cycle {
            reference: "#/definitions/interface".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cycle detected trying to dereference '#/definitions/interface'"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = source.into();
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
