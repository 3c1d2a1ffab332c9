//! Error types for pattern operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;

/// Errors that can occur while working with patterns and value specs.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("'keys' must be a mapping, got {found}")]
    InvalidBaseType { found: &'static str },

    #[error("Variable not provided: {0}")]
    MissingVariable(String),

    #[error("Invalid value spec: {0}")]
    InvalidSpec(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Name of the JSON type of `value`, as reported in error messages.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
