//! Pattern-based validators using regular expressions

use crate::coerce::string_form;
use crate::error::{SchemaError, SchemaResult};
use regex::Regex;
use serde_json::Value;

/// Passes when the regex in `argument` matches somewhere in the value.
///
/// Null values and the empty string are skipped. The match is unanchored;
/// write `^...$` to require a full match. A pattern that does not compile is
/// a schema error, not a failed check.
pub fn pattern(value: &Value, argument: &Value) -> SchemaResult<bool> {
    if is_blank(value) {
        return Ok(true);
    }

    let source = string_form(argument);
    let regex = Regex::new(&ascii_perl_classes(&source))
        .map_err(|e| SchemaError::invalid_pattern(source.clone(), e))?;

    Ok(regex.is_match(&string_form(value)))
}

/// Rewrite `\d`, `\D`, `\w` and `\W` as their ASCII classes.
///
/// The `regex` crate makes these Unicode-aware, so `^\d+$` would accept
/// Arabic-Indic digits. Nested bracket classes are valid inside a class too,
/// so the rewrite does not need to know whether it is inside `[...]`.
fn ascii_perl_classes(source: &str) -> String {
    let mut rewritten = String::with_capacity(source.len());
    let mut chars = source.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            rewritten.push(c);
            continue;
        }
        match chars.next() {
            Some('d') => rewritten.push_str("[[:digit:]]"),
            Some('D') => rewritten.push_str("[[:^digit:]]"),
            Some('w') => rewritten.push_str("[[:word:]]"),
            Some('W') => rewritten.push_str("[[:^word:]]"),
            Some(other) => {
                rewritten.push('\\');
                rewritten.push(other);
            }
            None => rewritten.push('\\'),
        }
    }

    rewritten
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
