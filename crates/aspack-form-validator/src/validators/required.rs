//! Required field validator

use crate::error::SchemaResult;
use serde_json::Value;

/// Passes when the value is present and not the empty string.
///
/// The rule argument is ignored: `required: false` still requires the field.
/// Unlike the other rules this one is the only check that fails on absence.
pub fn required(value: &Value, _argument: &Value) -> SchemaResult<bool> {
    Ok(!is_empty(value))
}

/// Check if a value counts as missing
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(value: Value) -> bool {
        required(&value, &json!(true)).unwrap()
    }

    #[test]
    fn test_required_with_null() {
        assert!(!check(Value::Null));
    }

    #[test]
    fn test_required_with_empty_string() {
        assert!(!check(json!("")));
    }

    #[test]
    fn test_required_with_whitespace_string() {
        // Only the exact empty string counts as missing
        assert!(check(json!("   ")));
    }

    #[test]
    fn test_required_with_valid_string() {
        assert!(check(json!("John")));
    }

    #[test]
    fn test_required_with_empty_containers() {
        assert!(check(json!([])));
        assert!(check(json!({})));
    }

    #[test]
    fn test_required_with_numbers_and_booleans() {
        // Zero and false are present values
        assert!(check(json!(0)));
        assert!(check(json!(false)));
    }

    #[test]
    fn test_required_ignores_argument() {
        assert!(!required(&Value::Null, &json!(false)).unwrap());
    }
}
