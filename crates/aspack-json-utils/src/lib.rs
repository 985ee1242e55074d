//! # aspack-json-utils
//!
//! Forgiving JSON helpers: parse and serialize with a fallback value instead
//! of an error, and read nested values by dot path.

pub mod codec;
pub mod error;
pub mod path;

pub use codec::{parse, parse_as, parse_or, stringify, stringify_or, try_parse, try_stringify, MAX_INDENT};
pub use error::{JsonError, JsonResult};
pub use path::{get_path, get_path_or};
