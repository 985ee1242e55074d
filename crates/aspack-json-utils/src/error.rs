//! JSON utility error types

use thiserror::Error;

pub type JsonResult<T> = Result<T, JsonError>;

/// Errors from the fallible `try_*` variants
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("Failed to parse JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to serialize value: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl JsonError {
    /// Line and column where parsing stopped, for parse errors
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            JsonError::Parse(e) => Some((e.line(), e.column())),
            JsonError::Serialize(_) => None,
        }
    }
}
