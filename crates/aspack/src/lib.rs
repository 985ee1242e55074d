//! # aspack
//!
//! Umbrella crate re-exporting the aspack utility libraries:
//!
//! - [`json_utils`]: forgiving JSON parse/stringify and dot-path lookup
//! - [`form_validator`]: declarative field and record validation

pub use aspack_form_validator as form_validator;
pub use aspack_json_utils as json_utils;

/// Common imports for working with both libraries
pub mod prelude {
    pub use aspack_form_validator::{
        validate, validate_field, FieldResult, FieldSchema, RecordResult, RecordSchema,
        SchemaError, TypeTag, Validator, ValidatorConfig,
    };
    pub use aspack_json_utils::{get_path, get_path_or, parse, parse_or, stringify};
    pub use serde_json::{json, Value};
}
