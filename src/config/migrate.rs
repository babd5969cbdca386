//! Config file upgrades: detect keys added in newer versions and fill them
//! in with their defaults, preserving every value already set.

use super::{Config, default_chart_width, default_log_level, default_storage_key};
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every config file is expected to carry, with their default values.
fn expected_keys() -> Vec<(&'static str, Value)> {
    vec![
        (
            "database",
            Value::String(Config::database_file().to_string_lossy().to_string()),
        ),
        ("storage_key", Value::String(default_storage_key())),
        (
            "chart_width",
            Value::Number((default_chart_width() as u64).into()),
        ),
        ("log_level", Value::String(default_log_level())),
    ]
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Names of the keys missing from the config file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;

    Ok(expected_keys()
        .into_iter()
        .filter(|(k, _)| !map.contains_key(Value::String(k.to_string())))
        .map(|(k, _)| k)
        .collect())
}

/// Add the missing keys to the config file. Returns the keys written.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = read_mapping(path)?;
    let mut added = Vec::new();

    for (key, default) in expected_keys() {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k) {
            map.insert(k, default);
            added.push(key);
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(map))?;
        fs::write(path, serialized)?;
    }

    Ok(added)
}
