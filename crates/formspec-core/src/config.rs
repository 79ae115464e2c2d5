//! Validation configuration
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use formspec_schemas::ValidationResult;

/// Options shared by the model and view validators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Warn when JSON text does not match its parsed form (duplicate keys, etc.)
    pub check_json_text: bool,
    /// Maximum number of errors to report (0 = unlimited)
    pub max_errors: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            check_json_text: true,
            max_errors: 0,
        }
    }
}

impl ValidationConfig {
    /// Configuration without the JSON text heuristic
    pub fn lenient() -> Self {
        Self {
            check_json_text: false,
            max_errors: 0,
        }
    }

    /// Disable the JSON text heuristic
    pub fn without_json_text_check(mut self) -> Self {
        self.check_json_text = false;
        self
    }

    /// Set maximum number of errors to report
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    /// Keep the JSON text result only when the heuristic is enabled
    pub(crate) fn text_result(&self, result: Option<ValidationResult>) -> Option<ValidationResult> {
        result.filter(|_| self.check_json_text)
    }

    /// Apply the error limit to a final result
    pub(crate) fn finish(&self, result: ValidationResult) -> ValidationResult {
        result.truncate_errors(self.max_errors)
    }
}
