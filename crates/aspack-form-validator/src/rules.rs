//! Rule registry: the closed set of validation rules and type tags

use crate::coerce::{string_form, type_name};
use crate::error::{SchemaResult, ValidationError};
use crate::validators;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Signature shared by every rule predicate: `(value, argument) -> passed`
pub type RulePredicate = fn(&Value, &Value) -> SchemaResult<bool>;

/// Every rule paired with its predicate.
///
/// Callers may invoke a predicate directly, bypassing the engine.
pub const RULES: [(RuleKind, RulePredicate); 7] = [
    (RuleKind::Required, validators::required),
    (RuleKind::Type, validators::type_of),
    (RuleKind::MinLength, validators::min_length),
    (RuleKind::MaxLength, validators::max_length),
    (RuleKind::Pattern, validators::pattern),
    (RuleKind::Min, validators::min),
    (RuleKind::Max, validators::max),
];

/// Type tags understood by the `type` rule
pub const TYPES: [TypeTag; 7] = [
    TypeTag::String,
    TypeTag::Number,
    TypeTag::Boolean,
    TypeTag::Object,
    TypeTag::Array,
    TypeTag::Email,
    TypeTag::Url,
];

/// Identifies a rule in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuleKind {
    #[serde(rename = "required")]
    Required,
    #[serde(rename = "type")]
    Type,
    #[serde(rename = "minLength")]
    MinLength,
    #[serde(rename = "maxLength")]
    MaxLength,
    #[serde(rename = "pattern")]
    Pattern,
    #[serde(rename = "min")]
    Min,
    #[serde(rename = "max")]
    Max,
}

impl RuleKind {
    pub const ALL: [RuleKind; 7] = [
        RuleKind::Required,
        RuleKind::Type,
        RuleKind::MinLength,
        RuleKind::MaxLength,
        RuleKind::Pattern,
        RuleKind::Min,
        RuleKind::Max,
    ];

    /// Name used for this rule in schemas
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::Type => "type",
            RuleKind::MinLength => "minLength",
            RuleKind::MaxLength => "maxLength",
            RuleKind::Pattern => "pattern",
            RuleKind::Min => "min",
            RuleKind::Max => "max",
        }
    }

    /// Look up a rule by its schema name; names are case-sensitive
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// The predicate registered for this rule
    pub fn predicate(self) -> RulePredicate {
        match self {
            RuleKind::Required => validators::required,
            RuleKind::Type => validators::type_of,
            RuleKind::MinLength => validators::min_length,
            RuleKind::MaxLength => validators::max_length,
            RuleKind::Pattern => validators::pattern,
            RuleKind::Min => validators::min,
            RuleKind::Max => validators::max,
        }
    }

    /// Run the rule's predicate
    pub fn check(self, value: &Value, argument: &Value) -> SchemaResult<bool> {
        (self.predicate())(value, argument)
    }

    /// Error reported when this rule rejects `value`
    pub fn error(self, value: &Value, argument: &Value) -> ValidationError {
        let message = match self {
            RuleKind::Required => "This field is required".to_string(),
            RuleKind::Type => format!(
                "Expected {}, got {}",
                string_form(argument),
                type_name(value)
            ),
            RuleKind::MinLength => format!("Minimum length is {}", string_form(argument)),
            RuleKind::MaxLength => format!("Maximum length is {}", string_form(argument)),
            RuleKind::Min => format!("Minimum value is {}", string_form(argument)),
            RuleKind::Max => format!("Maximum value is {}", string_form(argument)),
            RuleKind::Pattern => "Invalid format".to_string(),
        };
        ValidationError::new(self.name(), message)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up a rule predicate by schema name
pub fn rule(name: &str) -> Option<RulePredicate> {
    RuleKind::from_name(name).map(RuleKind::predicate)
}

/// Value types the `type` rule can check for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Email,
    Url,
}

impl TypeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Number => "number",
            TypeTag::Boolean => "boolean",
            TypeTag::Object => "object",
            TypeTag::Array => "array",
            TypeTag::Email => "email",
            TypeTag::Url => "url",
        }
    }
}

/// Returned when a string is not one of the [`TYPES`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type tag '{0}'")]
pub struct UnknownTypeTag(pub String);

impl FromStr for TypeTag {
    type Err = UnknownTypeTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TYPES
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownTypeTag(s.to_string()))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TypeTag> for Value {
    fn from(tag: TypeTag) -> Self {
        Value::String(tag.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registry_covers_every_rule() {
        for (kind, predicate) in RULES {
            assert_eq!(RuleKind::from_name(kind.name()), Some(kind));
            assert!(rule(kind.name()).is_some());
            // Table entry and enum dispatch agree
            assert_eq!(
                predicate(&json!("abc"), &json!(2)).ok(),
                kind.check(&json!("abc"), &json!(2)).ok()
            );
        }
        assert_eq!(RULES.len(), RuleKind::ALL.len());
    }

    #[test]
    fn test_unknown_rule_names() {
        assert_eq!(RuleKind::from_name("fooBar"), None);
        assert_eq!(RuleKind::from_name("minlength"), None);
        assert!(rule("email").is_none());
    }

    #[test]
    fn test_direct_predicate_call() {
        let min_length = rule("minLength").unwrap();
        assert!(!min_length(&json!("hi"), &json!(3)).unwrap());
    }

    #[test]
    fn test_null_passes_everything_but_required() {
        for kind in RuleKind::ALL {
            let argument = match kind {
                RuleKind::Type => json!("string"),
                RuleKind::Pattern => json!("^x$"),
                _ => json!(3),
            };
            let passed = kind.check(&Value::Null, &argument).unwrap();
            assert_eq!(passed, kind != RuleKind::Required, "rule {}", kind);
        }
    }

    #[test]
    fn test_messages() {
        let cases = [
            (RuleKind::Required, json!(true), Value::Null, "This field is required"),
            (RuleKind::Type, json!("number"), json!("5"), "Expected number, got string"),
            (RuleKind::MinLength, json!(3), json!("hi"), "Minimum length is 3"),
            (RuleKind::MaxLength, json!(2), json!("abc"), "Maximum length is 2"),
            (RuleKind::Min, json!(18), json!(15), "Minimum value is 18"),
            (RuleKind::Max, json!(2.5), json!(3), "Maximum value is 2.5"),
            (RuleKind::Min, json!(1e21), json!(0), "Minimum value is 1e+21"),
            (RuleKind::Pattern, json!("^a"), json!("b"), "Invalid format"),
        ];

        for (kind, argument, value, expected) in cases {
            let error = kind.error(&value, &argument);
            assert_eq!(error.rule, kind.name());
            assert_eq!(error.message, expected);
        }
    }

    #[test]
    fn test_type_tags() {
        assert_eq!(TYPES.len(), 7);
        for tag in TYPES {
            assert_eq!(tag.as_str().parse::<TypeTag>(), Ok(tag));
        }
        assert_eq!(
            "date".parse::<TypeTag>().unwrap_err().to_string(),
            "unknown type tag 'date'"
        );
        assert_eq!(Value::from(TypeTag::Email), json!("email"));
    }

    #[test]
    fn test_rule_kind_serde_names() {
        assert_eq!(serde_json::to_value(RuleKind::MinLength).unwrap(), json!("minLength"));
        let kind: RuleKind = serde_json::from_value(json!("type")).unwrap();
        assert_eq!(kind, RuleKind::Type);
    }
}
