//! Validator configuration and builder

use serde::{Deserialize, Serialize};
use service_builder::builder;
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const UNKNOWN_RULES_ENV: &str = "ASPACK_VALIDATOR_UNKNOWN_RULES";
pub const LOG_FAILURES_ENV: &str = "ASPACK_VALIDATOR_LOG_FAILURES";

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': '{value}'. Expected: {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },
}

impl ConfigError {
    /// Create an invalid value error
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }
}

/// What the engine does with schema keys that name no registered rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownRulePolicy {
    /// Skip the key without reporting anything
    #[default]
    Ignore,
    /// Fail the call with `SchemaError::UnknownRule`
    Reject,
}

impl FromStr for UnknownRulePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ignore" | "skip" => Ok(UnknownRulePolicy::Ignore),
            "reject" | "strict" => Ok(UnknownRulePolicy::Reject),
            _ => Err(ConfigError::invalid_value(
                "unknown_rules",
                s,
                "ignore or reject",
            )),
        }
    }
}

impl fmt::Display for UnknownRulePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownRulePolicy::Ignore => write!(f, "ignore"),
            UnknownRulePolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Validator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder]
pub struct ValidatorConfig {
    /// Handling of unrecognized rule names in schemas
    #[builder(getter, default)]
    pub unknown_rules: UnknownRulePolicy,

    /// Emit a debug event for every field that fails validation
    #[builder(getter, default)]
    pub log_failures: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            unknown_rules: UnknownRulePolicy::Ignore,
            log_failures: false,
        }
    }
}

impl ValidatorConfig {
    /// Strict configuration: unknown rule names are schema errors
    pub fn strict() -> Self {
        Self {
            unknown_rules: UnknownRulePolicy::Reject,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let unknown_rules = get_env_or_default(UNKNOWN_RULES_ENV, "ignore");
        let log_failures = get_env_or_default(LOG_FAILURES_ENV, "false");

        Self::from_values(&unknown_rules, &log_failures)
    }

    fn from_values(unknown_rules: &str, log_failures: &str) -> Result<Self, ConfigError> {
        let unknown_rules = UnknownRulePolicy::from_str(unknown_rules)?;
        let log_failures = parse_bool(log_failures)
            .ok_or_else(|| ConfigError::invalid_value("log_failures", log_failures, "true or false"))?;

        Ok(Self {
            unknown_rules,
            log_failures,
        })
    }
}

// Add convenience methods to the generated builder
impl ValidatorConfigBuilder {
    pub fn reject_unknown_rules(self) -> Self {
        self.unknown_rules(UnknownRulePolicy::Reject)
    }

    pub fn build_config(self) -> ValidatorConfig {
        self.build_with_defaults().unwrap_or_default()
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
