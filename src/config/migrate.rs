//! Configuration file checks and upgrades.
//!
//! Older config files may lack keys added in later releases. `missing_keys`
//! reports them and `fill_missing_keys` writes their defaults back while
//! leaving every existing value untouched.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn defaults_mapping() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(Config::default()).map_err(|_| AppError::ConfigSave)?;
    match value {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(AppError::Config(format!(
            "{}: top level must be a mapping",
            path.display()
        ))),
        Err(e) => Err(AppError::Config(format!("{}: {}", path.display(), e))),
    }
}

/// Keys present in the default configuration but absent from `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = defaults_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add defaults for every missing key. Returns the keys that were added.
pub fn fill_missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = defaults_mapping()?;
    let mut added = Vec::new();

    for (k, v) in defaults {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            current.insert(k, v);
        }
    }

    if !added.is_empty() {
        let yaml =
            serde_yaml::to_string(&Value::Mapping(current)).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(added)
}

/// Semantic problems that parse fine but make the grid unusable.
pub fn validate(cfg: &Config) -> Vec<String> {
    let mut problems = Vec::new();

    if cfg.lifespan_years == 0 {
        problems.push("lifespan_years must be greater than 0".to_string());
    }
    if cfg.weeks_per_year == 0 {
        problems.push("weeks_per_year must be greater than 0".to_string());
    }
    if cfg.lifespan_years > 0
        && cfg.weeks_per_year > 0
        && let Err(e) = cfg.horizon().total_weeks()
    {
        problems.push(e.to_string());
    }
    if let Some(raw) = &cfg.default_birthdate
        && crate::utils::date::parse_date(raw).is_none()
    {
        problems.push(format!("default_birthdate '{}' is not YYYY-MM-DD", raw));
    }

    problems
}
