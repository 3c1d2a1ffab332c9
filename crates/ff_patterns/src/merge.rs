//! Merging a base mapping of keys with overrides.

use std::hash::Hash;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{json_type_name, PatternError, PatternResult};

/// Copy `base` (empty when `None`) and apply `overrides` on top.
///
/// Existing keys keep their position; new keys are appended in override
/// order. Neither input is modified.
pub fn merge_maps<K, V>(base: Option<&IndexMap<K, V>>, overrides: &IndexMap<K, V>) -> IndexMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    let mut merged = base.cloned().unwrap_or_default();
    merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Merge loosely-typed keys, as read from a YAML/JSON document.
///
/// `base` must be a mapping when given. Anything else, including an
/// explicit `null`, fails with [`PatternError::InvalidBaseType`] naming the
/// type that was received. Override names are expected to be identifiers
/// but this is not checked.
pub fn merge_keys(
    base: Option<&Value>,
    overrides: &Map<String, Value>,
) -> PatternResult<Map<String, Value>> {
    let mut merged = match base {
        None => Map::new(),
        Some(Value::Object(map)) => map.clone(),
        Some(other) => {
            return Err(PatternError::InvalidBaseType {
                found: json_type_name(other),
            })
        }
    };

    for (key, value) in overrides {
        if merged.insert(key.clone(), value.clone()).is_some() {
            debug!("Overriding key: {}", key);
        }
    }

    Ok(merged)
}
