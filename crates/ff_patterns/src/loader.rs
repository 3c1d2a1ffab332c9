//! Loading value specs and key mappings from YAML or JSON files.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{PatternError, PatternResult};

/// Read a YAML (`.yaml`/`.yml`) or JSON document. Mapping key order is kept.
pub fn load_value_file(path: &Path) -> PatternResult<Value> {
    let content = fs::read_to_string(path).map_err(|source| PatternError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_yaml = path
        .extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            ext == "yaml" || ext == "yml"
        })
        .unwrap_or(false);

    let value = if is_yaml {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };

    info!("Loaded values from {:?}", path);
    Ok(value)
}

/// Parse a command-line style value list, `"1,2,abc"`.
///
/// Each item is read as JSON when it parses (numbers, booleans, quoted
/// strings) and writes back to exactly the same text; anything else, such
/// as `1.50` or `007`, is kept as a plain string so it renders verbatim.
pub fn parse_value_list(raw: &str) -> Vec<Value> {
    raw.split(',').map(parse_scalar).collect()
}

/// Parse a single command-line value the same way as [`parse_value_list`].
pub fn parse_scalar(raw: &str) -> Value {
    let raw = raw.trim();
    match serde_json::from_str::<Value>(raw) {
        Ok(value) if !value.is_object() && !value.is_array() && value.to_string() == raw => {
            value
        }
        _ => {
            debug!("Treating {:?} as a string", raw);
            Value::String(raw.to_string())
        }
    }
}

/// Render a value for substitution into a path. Strings appear without
/// quotes, `null` as an empty string.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
