//! Numeric value validators

use crate::coerce::to_number;
use crate::error::SchemaResult;
use serde_json::Value;

/// Passes when the numeric reading of the value is at least `argument`
pub fn min(value: &Value, argument: &Value) -> SchemaResult<bool> {
    if value.is_null() {
        return Ok(true);
    }
    Ok(to_number(value) >= to_number(argument))
}

/// Passes when the numeric reading of the value is at most `argument`
pub fn max(value: &Value, argument: &Value) -> SchemaResult<bool> {
    if value.is_null() {
        return Ok(true);
    }
    Ok(to_number(value) <= to_number(argument))
}
