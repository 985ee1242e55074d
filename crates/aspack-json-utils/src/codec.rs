//! Parsing and serialization that fall back to defaults instead of failing

use crate::error::{JsonError, JsonResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::debug;

/// Widest indentation `stringify` will produce
pub const MAX_INDENT: usize = 10;

/// Parse a JSON document
pub fn try_parse(text: &str) -> JsonResult<Value> {
    serde_json::from_str(text).map_err(JsonError::Parse)
}

/// Parse a JSON document straight into a typed value
pub fn parse_as<T: DeserializeOwned>(text: &str) -> JsonResult<T> {
    serde_json::from_str(text).map_err(JsonError::Parse)
}

/// Parse a JSON document, returning `null` if it is malformed
pub fn parse(text: &str) -> Value {
    parse_or(text, Value::Null)
}

/// Parse a JSON document, returning `default` if it is malformed
pub fn parse_or(text: &str, default: Value) -> Value {
    match try_parse(text) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "JSON parse failed, using default");
            default
        }
    }
}

/// Serialize a value; `indent` of 0 is compact, otherwise pretty-printed
/// with that many spaces per level (capped at [`MAX_INDENT`])
pub fn try_stringify<T: Serialize + ?Sized>(value: &T, indent: usize) -> JsonResult<String> {
    if indent == 0 {
        return serde_json::to_string(value).map_err(JsonError::Serialize);
    }

    let indent = " ".repeat(indent.min(MAX_INDENT));
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer).map_err(JsonError::Serialize)?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Serialize a value, returning an empty string on failure
pub fn stringify<T: Serialize + ?Sized>(value: &T, indent: usize) -> String {
    stringify_or(value, indent, "")
}

/// Serialize a value, returning `default` on failure
pub fn stringify_or<T: Serialize + ?Sized>(value: &T, indent: usize, default: &str) -> String {
    match try_stringify(value, indent) {
        Ok(text) => text,
        Err(e) => {
            debug!(error = %e, "JSON serialization failed, using default");
            default.to_string()
        }
    }
}
