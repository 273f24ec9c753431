// File: src/report.rs
// Purpose: Outcome of one validation run

use serde::{Deserialize, Serialize};

use crate::config::MissingFieldPolicy;

/// A failing check: which field, and what to tell the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result of running one form's checklist against a set of field values
///
/// Errors keep the order in which checks are declared, so rendering is
/// deterministic. A field may appear more than once if several checks fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
    /// Fields referenced by a check but absent from the values
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}

impl ValidationReport {
    /// True when no check failed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether submission must be cancelled under the given policy
    pub fn blocks_submission(&self, policy: MissingFieldPolicy) -> bool {
        match policy {
            MissingFieldPolicy::Skip => !self.is_valid(),
            MissingFieldPolicy::Block => !self.is_valid() || !self.missing.is_empty(),
        }
    }

    /// First error message recorded for a field
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Fields with at least one error, in first-failure order
    pub fn failing_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for error in &self.errors {
            if !fields.contains(&error.field.as_str()) {
                fields.push(error.field.as_str());
            }
        }
        fields
    }

    pub(crate) fn push_error(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError::new(field, message));
    }

    pub(crate) fn push_missing(&mut self, field: &str) {
        if !self.missing.iter().any(|m| m == field) {
            self.missing.push(field.to_string());
        }
    }
}
