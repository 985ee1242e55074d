//! Field and record validation results

use crate::error::ValidationError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of validating one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldResult {
    is_valid: bool,
    errors: Vec<ValidationError>,
}

impl FieldResult {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Failed rules in schema order
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Just the error messages, in schema order
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    /// Check whether a particular rule failed
    pub fn has_rule_error(&self, rule: &str) -> bool {
        self.errors.iter().any(|e| e.rule == rule)
    }
}

/// Outcome of validating a whole record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResult {
    is_valid: bool,
    results: BTreeMap<String, FieldResult>,
    error_map: BTreeMap<String, Vec<String>>,
}

impl RecordResult {
    /// Build a record result; validity and the error map follow from `results`
    pub fn new(results: BTreeMap<String, FieldResult>) -> Self {
        let is_valid = results.values().all(FieldResult::is_valid);
        let error_map = results
            .iter()
            .filter(|(_, result)| !result.errors.is_empty())
            .map(|(field, result)| (field.clone(), result.messages()))
            .collect();

        Self {
            is_valid,
            results,
            error_map,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Per-field results, keyed by field name
    pub fn results(&self) -> &BTreeMap<String, FieldResult> {
        &self.results
    }

    /// Result for a single field
    pub fn field(&self, name: &str) -> Option<&FieldResult> {
        self.results.get(name)
    }

    /// Error messages for every field that failed at least one rule
    pub fn error_map(&self) -> &BTreeMap<String, Vec<String>> {
        &self.error_map
    }

    /// Check if a specific field has errors
    pub fn has_field_errors(&self, field: &str) -> bool {
        self.error_map.contains_key(field)
    }

    /// Number of fields with errors
    pub fn failed_fields(&self) -> usize {
        self.error_map.len()
    }

    /// Total number of failed rules across all fields
    pub fn total_errors(&self) -> usize {
        self.results.values().map(|r| r.errors.len()).sum()
    }
}
