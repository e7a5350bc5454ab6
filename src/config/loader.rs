// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{FileConfig, RawFileConfig};
use crate::errors::{ForeachError, Result};

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV: &str = "KUBECTL_FOREACH_CONFIG";

/// Load a configuration file from a given path and return the raw
/// `RawFileConfig`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for
/// semantic checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawFileConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        ForeachError::ConfigError(format!("reading config file {}: {e}", path.display()))
    })?;

    let config: RawFileConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<FileConfig> {
    let raw_config = load_from_path(&path)?;
    let config = FileConfig::try_from(raw_config)?;
    Ok(config)
}

/// Pick the config file to use: the explicit path, else `$KUBECTL_FOREACH_CONFIG`.
pub fn resolve_config_path(explicit: Option<&Path>, env_value: Option<String>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// Load the config file if one is configured; no file means defaults.
pub fn load_optional(explicit: Option<&Path>) -> Result<FileConfig> {
    match resolve_config_path(explicit, std::env::var(CONFIG_ENV).ok()) {
        Some(path) => load_and_validate(path),
        None => Ok(FileConfig::default()),
    }
}
