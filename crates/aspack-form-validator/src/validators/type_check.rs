//! Runtime type validator

use crate::coerce::string_form;
use crate::error::SchemaResult;
use crate::rules::TypeTag;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use url::Url;

static EMAIL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Passes when the value has the type named by `argument`.
///
/// Absent and null values pass, so `type` composes with `required` instead
/// of implying it. An argument that is not a known type tag always fails.
pub fn type_of(value: &Value, argument: &Value) -> SchemaResult<bool> {
    if value.is_null() {
        return Ok(true);
    }

    let tag = match argument.as_str().and_then(|s| s.parse::<TypeTag>().ok()) {
        Some(tag) => tag,
        None => return Ok(false),
    };

    Ok(matches_tag(value, tag))
}

/// Check a non-null value against a type tag
pub fn matches_tag(value: &Value, tag: TypeTag) -> bool {
    match tag {
        TypeTag::String => value.is_string(),
        TypeTag::Number => value.is_number(),
        TypeTag::Boolean => value.is_boolean(),
        TypeTag::Object => value.is_object(),
        TypeTag::Array => value.is_array(),
        TypeTag::Email => value.as_str().map_or(false, is_email),
        TypeTag::Url => is_url(&string_form(value)),
    }
}

fn is_email(text: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .map_or(false, |pattern| pattern.is_match(text))
}

fn is_url(text: &str) -> bool {
    Url::parse(text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(value: Value, tag: &str) -> bool {
        type_of(&value, &json!(tag)).unwrap()
    }

    #[test]
    fn test_type_passes_on_null() {
        for tag in ["string", "number", "email", "url", "nonsense"] {
            assert!(check(Value::Null, tag), "null should pass type '{}'", tag);
        }
    }

    #[test]
    fn test_native_types() {
        assert!(check(json!("5"), "string"));
        assert!(!check(json!(5), "string"));
        assert!(check(json!(5), "number"));
        assert!(check(json!(2.5), "number"));
        assert!(!check(json!("5"), "number"));
        assert!(check(json!(false), "boolean"));
        assert!(!check(json!(0), "boolean"));
    }

    #[test]
    fn test_object_and_array() {
        assert!(check(json!({"a": 1}), "object"));
        assert!(!check(json!([1]), "object"));
        assert!(check(json!([1, 2]), "array"));
        assert!(!check(json!({}), "array"));
    }

    #[test]
    fn test_email() {
        let valid = ["a@b.com", "user.name+tag@example.co.uk", "x@y.z"];
        for email in valid {
            assert!(check(json!(email), "email"), "Email '{}' should be valid", email);
        }

        let invalid = ["abc@", "a@b", "a b@c.com", "a@@b.com", "@b.com", ""];
        for email in invalid {
            assert!(!check(json!(email), "email"), "Email '{}' should be invalid", email);
        }

        // Only strings can be email addresses
        assert!(!check(json!(42), "email"));
    }

    #[test]
    fn test_url() {
        assert!(check(json!("https://example.com/path?q=1"), "url"));
        assert!(check(json!("mailto:someone@example.com"), "url"));
        assert!(check(json!("ftp://files.example.com"), "url"));
        assert!(!check(json!("example.com"), "url"));
        assert!(!check(json!("not a url"), "url"));
        assert!(!check(json!(5), "url"));
    }

    #[test]
    fn test_unknown_tag_fails() {
        assert!(!check(json!("x"), "date"));
        assert!(!type_of(&json!("x"), &json!(3)).unwrap());
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert!(!check(json!("x"), "String"));
    }
}
