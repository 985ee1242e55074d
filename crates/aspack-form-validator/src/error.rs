//! Validation error types and handling

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type SchemaResult<T> = Result<T, SchemaError>;

/// A single failed rule on a field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the rule that failed
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Generic failure for a rule without a dedicated message.
    ///
    /// Every [`RuleKind`](crate::RuleKind) has its own message, so the engine
    /// does not emit this today. It is the fallback a rule added to the
    /// registry uses until its message is written, and it lets callers
    /// report failures of their own checks alongside schema results.
    pub fn failed(rule: impl Into<String>) -> Self {
        let rule = rule.into();
        let message = format!("Failed {} validation", rule);
        Self { rule, message }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule, self.message)
    }
}

/// Faults in the schema itself, as opposed to failures of the validated data.
///
/// A `SchemaError` means the schema author made a mistake (a regex that does
/// not compile, a misspelled rule under strict mode, a malformed schema
/// document). It is never produced by the values being validated.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown validation rule '{rule}'")]
    UnknownRule { rule: String },

    #[error("Invalid schema for field '{field}': {reason}")]
    InvalidSchema { field: String, reason: String },
}

impl SchemaError {
    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create an unknown rule error
    pub fn unknown_rule(rule: impl Into<String>) -> Self {
        Self::UnknownRule { rule: rule.into() }
    }

    /// Create an invalid schema error
    pub fn invalid_schema(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSchema {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_creation() {
        let error = ValidationError::new("required", "This field is required");
        assert_eq!(error.rule, "required");
        assert_eq!(error.message, "This field is required");
        assert_eq!(error.to_string(), "required: This field is required");
    }

    #[test]
    fn test_generic_failure_message() {
        let error = ValidationError::failed("between");
        assert_eq!(error.message, "Failed between validation");
    }

    #[test]
    fn test_schema_error_display() {
        let error = SchemaError::unknown_rule("minLenght");
        assert_eq!(error.to_string(), "Unknown validation rule 'minLenght'");

        let source = regex::Regex::new("(").unwrap_err();
        let error = SchemaError::invalid_pattern("(", source);
        assert!(error.to_string().starts_with("Invalid pattern '('"));
    }
}
