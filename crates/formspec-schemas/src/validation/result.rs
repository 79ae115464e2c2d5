//! Validation results and the helpers that merge them
//!
//! Every caller-facing validation returns a [`ValidationResult`]. Validators build up a
//! `Vec<ValidationResult>` of partial outcomes with [`add_error`] and [`add_warning`] and
//! fold them together with [`aggregate`].
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use crate::validation::error::{ValidationError, ValidationWarning};
use serde::Serialize;

/// Outcome of a validation call
///
/// `valid` is always exactly `errors.is_empty()`; every constructor recomputes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

impl ValidationResult {
    /// A valid result with nothing to report
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Build a result from its parts
    pub fn new(errors: Vec<ValidationError>, warnings: Vec<ValidationWarning>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Build a result holding only errors
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self::new(errors, Vec::new())
    }

    /// Build a result holding only warnings
    pub fn from_warnings(warnings: Vec<ValidationWarning>) -> Self {
        Self::new(Vec::new(), warnings)
    }

    /// A result with a single error
    pub fn error<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::from_errors(vec![ValidationError::new(path, message)])
    }

    /// A result with a single warning
    pub fn warning<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::from_warnings(vec![ValidationWarning::new(path, message)])
    }

    /// True when no errors were found
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The errors, in discovery order
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The warnings, in discovery order
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    /// Split the result into its error and warning lists
    pub fn into_parts(self) -> (Vec<ValidationError>, Vec<ValidationWarning>) {
        (self.errors, self.warnings)
    }

    /// Keep at most `max_errors` errors (0 keeps all)
    ///
    /// A truncated result never drops below one error, so validity is preserved.
    pub fn truncate_errors(mut self, max_errors: usize) -> Self {
        if max_errors > 0 {
            self.errors.truncate(max_errors);
        }
        self
    }
}

impl FromIterator<ValidationResult> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        aggregate(iter)
    }
}

/// Aggregate validation results into a single one
///
/// Errors and warnings are concatenated in order; `valid` is recomputed rather than read
/// from the inputs.
pub fn aggregate<I>(results: I) -> ValidationResult
where
    I: IntoIterator<Item = ValidationResult>,
{
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for result in results {
        errors.extend(result.errors);
        warnings.extend(result.warnings);
    }

    ValidationResult::new(errors, warnings)
}

/// Append a single-error result to `results`
pub fn add_error<P, M>(results: &mut Vec<ValidationResult>, path: P, message: M)
where
    P: Into<String>,
    M: Into<String>,
{
    results.push(ValidationResult::error(path, message));
}

/// Append a single-warning result to `results`
pub fn add_warning<P, M>(results: &mut Vec<ValidationResult>, path: P, message: M)
where
    P: Into<String>,
    M: Into<String>,
{
    results.push(ValidationResult::warning(path, message));
}
