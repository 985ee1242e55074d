//! # aspack-form-validator
//!
//! Declarative validation of form fields and records. A schema maps rule
//! names to arguments; the engine runs every rule against the value and
//! reports failures as data rather than errors.
//!
//! ```
//! use aspack_form_validator::{validate, FieldSchema, RecordSchema, TypeTag};
//! use serde_json::json;
//!
//! let schema = RecordSchema::new()
//!     .field("email", FieldSchema::new().required().type_of(TypeTag::Email))
//!     .field("age", FieldSchema::new().min(18.0));
//!
//! let result = validate(&json!({"email": "a@b.com", "age": 15}), &schema).unwrap();
//! assert!(!result.is_valid());
//! assert_eq!(result.error_map()["age"], vec!["Minimum value is 18"]);
//! ```

pub mod coerce;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod rules;
pub mod schema;
pub mod traits;
pub mod validators;

// Re-exports for easy access
pub use config::{ConfigError, UnknownRulePolicy, ValidatorConfig};
pub use engine::{validate, validate_field, Validator};
pub use error::{SchemaError, SchemaResult, ValidationError};
pub use report::{FieldResult, RecordResult};
pub use rules::{rule, RuleKind, RulePredicate, TypeTag, RULES, TYPES};
pub use schema::{FieldSchema, RecordSchema};
pub use traits::Record;
