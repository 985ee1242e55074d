//! Loose value coercions shared by the rule predicates.
//!
//! Rules compare values the way form data is usually compared: a length rule
//! measures the textual form of whatever it is given, and a numeric rule
//! accepts `"42"` as well as `42`.

use serde_json::{Number, Value};

/// Name of the JSON type of `value`, as reported in type-mismatch messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Textual form of a value.
///
/// Strings are returned unquoted, integral numbers without a fractional
/// part, arrays as their elements joined by `,` and objects as
/// `[object Object]`.
pub fn string_form(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_form(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => string_form(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Shortest decimal form; exponent notation below 1e-6 and from 1e21 up
fn number_form(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        // also covers -0
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.abs() < 1e-6 || f.abs() >= 1e21 => exponent_form(f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn exponent_form(f: f64) -> String {
    let formatted = format!("{:e}", f);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Numeric coercion of a value; `NaN` when the value has no numeric reading
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(true) => 1.0,
        Value::Bool(false) => 0.0,
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s),
        Value::Array(_) => parse_number(&string_form(value)),
        Value::Object(_) => f64::NAN,
    }
}

/// Parse a numeric literal the way a form field would be read.
///
/// Surrounding whitespace is ignored and an empty string reads as zero.
/// Accepts decimal and exponent notation, `0x`/`0o`/`0b` integer literals
/// and `Infinity` with an optional sign.
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&text[2..], radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }

    // f64::from_str also takes "inf" and "nan", which are not numbers here
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_form_scalars() {
        assert_eq!(string_form(&json!("hello")), "hello");
        assert_eq!(string_form(&json!(42)), "42");
        assert_eq!(string_form(&json!(18.0)), "18");
        assert_eq!(string_form(&json!(2.5)), "2.5");
        assert_eq!(string_form(&json!(true)), "true");
        assert_eq!(string_form(&Value::Null), "null");
    }

    #[test]
    fn test_string_form_number_edges() {
        assert_eq!(string_form(&json!(-0.0)), "0");
        assert_eq!(string_form(&json!(0.000001)), "0.000001");
        assert_eq!(string_form(&json!(1e-7)), "1e-7");
        assert_eq!(string_form(&json!(-2.5e-8)), "-2.5e-8");
        assert_eq!(string_form(&json!(1e20)), "100000000000000000000");
        assert_eq!(string_form(&json!(1e21)), "1e+21");
        assert_eq!(string_form(&json!(1.5e300)), "1.5e+300");
    }

    #[test]
    fn test_string_form_containers() {
        assert_eq!(string_form(&json!([1, "a", null, [2, 3]])), "1,a,,2,3");
        assert_eq!(string_form(&json!([])), "");
        assert_eq!(string_form(&json!({"a": 1})), "[object Object]");
    }

    #[test]
    fn test_to_number() {
        assert_eq!(to_number(&json!(7)), 7.0);
        assert_eq!(to_number(&json!(" 12.5 ")), 12.5);
        assert_eq!(to_number(&json!("")), 0.0);
        assert_eq!(to_number(&json!(true)), 1.0);
        assert_eq!(to_number(&json!([])), 0.0);
        assert_eq!(to_number(&json!(["3"])), 3.0);
        assert!(to_number(&json!([1, 2])).is_nan());
        assert!(to_number(&json!({})).is_nan());
    }

    #[test]
    fn test_parse_number_literals() {
        assert_eq!(parse_number("0x1A"), 26.0);
        assert_eq!(parse_number("0b101"), 5.0);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("12abc").is_nan());
        assert!(parse_number("-0x10").is_nan());
    }

    #[test]
    fn test_type_name() {
        assert_eq!(type_name(&json!("x")), "string");
        assert_eq!(type_name(&json!([1])), "array");
        assert_eq!(type_name(&json!({})), "object");
        assert_eq!(type_name(&json!(1.5)), "number");
    }
}
