//! Schema-driven field and record validation

use crate::config::{ConfigError, UnknownRulePolicy, ValidatorConfig};
use crate::error::{SchemaError, SchemaResult};
use crate::report::{FieldResult, RecordResult};
use crate::rules::RuleKind;
use crate::schema::{FieldSchema, RecordSchema};
use crate::traits::Record;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, trace};

static MISSING: Value = Value::Null;

/// Runs schemas against values.
///
/// Holds only configuration; every call is independent and the validator
/// can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Validator configured from `ASPACK_VALIDATOR_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ValidatorConfig::from_env()?))
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a single value against a field schema.
    ///
    /// Rules run in schema order and every failing rule contributes one
    /// error. Returns `Err` only for faults in the schema itself.
    pub fn validate_field(&self, value: &Value, schema: &FieldSchema) -> SchemaResult<FieldResult> {
        let mut errors = Vec::new();

        for (name, argument) in schema.entries() {
            let kind = match RuleKind::from_name(name) {
                Some(kind) => kind,
                None => match *self.config.get_unknown_rules() {
                    UnknownRulePolicy::Ignore => {
                        debug!(rule = name, "Skipping unknown validation rule");
                        continue;
                    }
                    UnknownRulePolicy::Reject => return Err(SchemaError::unknown_rule(name)),
                },
            };

            if !kind.check(value, argument)? {
                errors.push(kind.error(value, argument));
            }
        }

        Ok(FieldResult::new(errors))
    }

    /// Validate every field declared in `schema` against `record`.
    ///
    /// Fields missing from the record are validated as null. Fields present
    /// in the record but absent from the schema are not looked at.
    pub fn validate<R>(&self, record: &R, schema: &RecordSchema) -> SchemaResult<RecordResult>
    where
        R: Record + ?Sized,
    {
        let mut results = BTreeMap::new();

        for (field, field_schema) in schema.fields() {
            let value = record.field(field).unwrap_or(&MISSING);
            let result = self.validate_field(value, field_schema)?;

            if !result.is_valid() && *self.config.get_log_failures() {
                debug!(field, errors = ?result.messages(), "Field failed validation");
            } else {
                trace!(field, valid = result.is_valid(), "Validated field");
            }

            results.insert(field.to_string(), result);
        }

        Ok(RecordResult::new(results))
    }
}

/// Validate a single value with the default configuration
pub fn validate_field(value: &Value, schema: &FieldSchema) -> SchemaResult<FieldResult> {
    Validator::default().validate_field(value, schema)
}

/// Validate a record with the default configuration
pub fn validate<R>(record: &R, schema: &RecordSchema) -> SchemaResult<RecordResult>
where
    R: Record + ?Sized,
{
    Validator::default().validate(record, schema)
}
