use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Config filenames checked in the working directory when `--config` is not given.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["fuzzsift.toml", "fuzzsift.json"];

/// Whether one of the default config files exists in the working directory.
#[must_use]
pub fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|candidate| Path::new(candidate).exists())
}

/// Loads a configuration file from the provided path or default locations.
///
/// # Errors
///
/// Returns an error when the config file cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> AppResult<Option<ConfigFile>> {
    if let Some(path) = path {
        let path = PathBuf::from(path);
        return Ok(Some(load_config_file(&path)?));
    }

    for candidate in DEFAULT_CONFIG_FILES {
        let path = PathBuf::from(candidate);
        if path.exists() {
            tracing::debug!("Using config file {}", path.display());
            return Ok(Some(load_config_file(&path)?));
        }
    }

    Ok(None)
}

pub(crate) fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some("json") => serde_json::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some(ext) => Err(AppError::config(ConfigError::UnsupportedExtension {
            ext: ext.to_owned(),
        })),
        None => Err(AppError::config(ConfigError::MissingExtension)),
    }
}
