use crate::config::Config;
use crate::errors::AppResult;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every configuration file is expected to carry.
pub const KNOWN_KEYS: &[&str] = &[
    "database",
    "user_id",
    "clock_in_from",
    "lunch_window",
    "min_lunch_minutes",
    "refresh_seconds",
    "bypass_time_restrictions",
    "history_page_size",
];

/// Return the known keys missing from a YAML document.
/// A document that does not parse as a mapping is missing everything.
pub fn missing_keys(content: &str) -> Vec<&'static str> {
    let map = match serde_yaml::from_str::<Value>(content) {
        Ok(Value::Mapping(m)) => m,
        _ => return KNOWN_KEYS.to_vec(),
    };

    KNOWN_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect()
}

/// Add the missing keys (with their default values) to the config file.
/// Existing values are never touched.
///   Returns the list of keys that were added.
pub fn fill_missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let content = fs::read_to_string(path)?;
    let missing = missing_keys(&content);
    if missing.is_empty() {
        return Ok(missing);
    }

    let mut current = match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(m)) => m,
        _ => Mapping::new(),
    };

    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => Mapping::new(),
    };

    for key in &missing {
        let k = Value::String((*key).to_string());
        if let Some(v) = defaults.get(&k) {
            current.insert(k, v.clone());
        }
    }

    fs::write(path, serde_yaml::to_string(&Value::Mapping(current))?)?;
    Ok(missing)
}
