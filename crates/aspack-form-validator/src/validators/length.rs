//! Length-based validators

use crate::coerce::{string_form, to_number};
use crate::error::SchemaResult;
use serde_json::Value;

/// Passes when the value's textual length is at least `argument`
pub fn min_length(value: &Value, argument: &Value) -> SchemaResult<bool> {
    Ok(length_of(value).map_or(true, |len| len >= to_number(argument)))
}

/// Passes when the value's textual length is at most `argument`
pub fn max_length(value: &Value, argument: &Value) -> SchemaResult<bool> {
    Ok(length_of(value).map_or(true, |len| len <= to_number(argument)))
}

/// Length of the value's string form in chars; `None` for null values.
///
/// Non-string values are measured through their string form, so `12345`
/// has length 5 and `[1, 2]` has length 3.
fn length_of(value: &Value) -> Option<f64> {
    if value.is_null() {
        return None;
    }
    Some(string_form(value).chars().count() as f64)
}
