//! Config file migrations: fill in keys introduced after the file was
//! first written, without touching values the user already set.

use crate::ui::messages::success;
use serde_yaml::Value;
use std::fs;
use std::io;

/// Keys added since 0.1, with their default serialized values.
fn added_keys() -> Vec<(&'static str, Value)> {
    vec![
        ("worker", Value::String("default".into())),
        ("default_work_mode", Value::String("office".into())),
        ("refresh_secs", Value::Number(60u64.into())),
        ("separator_char", Value::String("-".into())),
    ]
}

/// Report which known keys are missing from the config file.
/// Returns an empty list when the file does not exist (defaults apply).
pub fn missing_keys() -> io::Result<Vec<&'static str>> {
    let conf_file = super::Config::config_file();

    if !conf_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&conf_file)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| io::Error::other(format!("parse config: {}", e)))?;

    let Some(map) = yaml.as_mapping() else {
        return Ok(added_keys().iter().map(|(k, _)| *k).collect());
    };

    Ok(added_keys()
        .iter()
        .filter(|(k, _)| !map.contains_key(&Value::String(k.to_string())))
        .map(|(k, _)| *k)
        .collect())
}

/// Insert any missing keys with their defaults and rewrite the file.
/// Returns the keys that were added.
pub fn fill_missing_keys() -> io::Result<Vec<&'static str>> {
    let conf_file = super::Config::config_file();

    if !conf_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&conf_file)?;
    let mut yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| io::Error::other(format!("parse config: {}", e)))?;

    let mut added = Vec::new();

    if let Some(map) = yaml.as_mapping_mut() {
        for (key, default) in added_keys() {
            let k = Value::String(key.to_string());
            if !map.contains_key(&k) {
                map.insert(k, default);
                added.push(key);
            }
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&yaml)
            .map_err(|e| io::Error::other(format!("serialize config: {}", e)))?;
        fs::write(&conf_file, serialized)?;

        success(format!("Config updated: added {}", added.join(", ")));
    }

    Ok(added)
}
