//! Declarative field and record schemas

use crate::error::SchemaError;
use crate::rules::{RuleKind, TypeTag};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Rules for a single field: ordered `(rule name, argument)` pairs.
///
/// Rule names are kept as written so that a schema loaded from JSON
/// round-trips unchanged, including names the registry does not know.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct FieldSchema {
    entries: Vec<(String, Value)>,
}

impl FieldSchema {
    /// Create an empty field schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule by name, replacing the argument if the rule is already set
    pub fn rule(mut self, name: impl Into<String>, argument: impl Into<Value>) -> Self {
        let name = name.into();
        let argument = argument.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = argument,
            None => self.entries.push((name, argument)),
        }
        self
    }

    /// Add a rule from the registry
    pub fn with(self, kind: RuleKind, argument: impl Into<Value>) -> Self {
        self.rule(kind.name(), argument)
    }

    pub fn required(self) -> Self {
        self.with(RuleKind::Required, true)
    }

    pub fn type_of(self, tag: TypeTag) -> Self {
        self.with(RuleKind::Type, tag)
    }

    pub fn min_length(self, min: usize) -> Self {
        self.with(RuleKind::MinLength, min)
    }

    pub fn max_length(self, max: usize) -> Self {
        self.with(RuleKind::MaxLength, max)
    }

    pub fn pattern(self, source: &str) -> Self {
        self.with(RuleKind::Pattern, source)
    }

    pub fn min(self, min: f64) -> Self {
        self.with(RuleKind::Min, number(min))
    }

    pub fn max(self, max: f64) -> Self {
        self.with(RuleKind::Max, number(max))
    }

    /// Rule entries in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, argument)| (name.as_str(), argument))
    }

    /// Argument for a rule, if the schema sets it
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, argument)| argument)
    }

    /// Rule names not present in the registry
    pub fn unknown_rules(&self) -> Vec<&str> {
        self.entries()
            .map(|(name, _)| name)
            .filter(|name| RuleKind::from_name(name).is_none())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a field schema from a JSON object
    pub fn from_value(field: &str, value: &Value) -> Result<Self, SchemaError> {
        match value {
            Value::Object(map) => Ok(Self::from(map.clone())),
            other => Err(SchemaError::invalid_schema(
                field,
                format!("expected an object of rules, got {}", crate::coerce::type_name(other)),
            )),
        }
    }
}

/// Integral bounds are stored as integers so messages read "18", not "18.0"
fn number(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

impl From<Map<String, Value>> for FieldSchema {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }
}

impl From<FieldSchema> for Map<String, Value> {
    fn from(schema: FieldSchema) -> Self {
        schema.entries.into_iter().collect()
    }
}

/// Rules for every validated field of a record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct RecordSchema {
    fields: Vec<(String, FieldSchema)>,
}

impl RecordSchema {
    /// Create an empty record schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schema for a field, replacing any earlier one
    pub fn field(mut self, name: impl Into<String>, schema: FieldSchema) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = schema,
            None => self.fields.push((name, schema)),
        }
        self
    }

    /// Fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSchema)> {
        self.fields.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    /// Schema for a single field
    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, schema)| schema)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse a record schema from a JSON object of field schemas
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        match value {
            Value::Object(map) => Self::try_from(map.clone()),
            other => Err(SchemaError::invalid_schema(
                "<root>",
                format!("expected an object of fields, got {}", crate::coerce::type_name(other)),
            )),
        }
    }
}

impl TryFrom<Map<String, Value>> for RecordSchema {
    type Error = SchemaError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields = map
            .into_iter()
            .map(|(name, value)| {
                let schema = FieldSchema::from_value(&name, &value)?;
                Ok((name, schema))
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;
        Ok(Self { fields })
    }
}

impl From<RecordSchema> for Map<String, Value> {
    fn from(schema: RecordSchema) -> Self {
        schema
            .fields
            .into_iter()
            .map(|(name, field)| (name, Value::Object(field.into())))
            .collect()
    }
}
