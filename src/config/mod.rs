//! Configuration management for rtype-setup

pub mod schema;

pub use schema::{BuildType, Config};

use crate::error::{SetupError, SetupResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File name of the project-local configuration
pub const LOCAL_CONFIG_NAME: &str = ".rtype-setup.toml";

/// Loads and merges global and project-local configuration
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a config manager reading the default global path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom global path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default global config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rtype-setup")
            .join("config.toml")
    }

    /// Find a project-local config, walking up from `start`
    pub fn find_local_config(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load the global config, overlaid by the project-local file when given
    ///
    /// Missing files mean defaults. Tables merge key-by-key; local values
    /// win over global ones.
    pub async fn load_merged(&self, local: Option<&Path>) -> SetupResult<Config> {
        let mut merged = match read_value(&self.config_path).await? {
            Some(value) => value,
            None => {
                debug!("global config not found, using defaults");
                toml::Value::Table(toml::map::Map::new())
            }
        };

        if let Some(local_path) = local {
            if let Some(overlay) = read_value(local_path).await? {
                debug!("overlaying local config from {}", local_path.display());
                merge_value(&mut merged, overlay);
            }
        }

        merged.try_into().map_err(|e| SetupError::ConfigInvalid {
            path: local.unwrap_or(&self.config_path).to_path_buf(),
            reason: e.to_string(),
        })
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Read and parse a TOML file; `None` when the file does not exist
async fn read_value(path: &Path) -> SetupResult<Option<toml::Value>> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(SetupError::io(format!("reading {}", path.display()), e)),
    };

    let value = content
        .parse::<toml::Value>()
        .map_err(|e| SetupError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    Ok(Some(value))
}

/// Merge `overlay` into `base`; tables merge recursively, leaves replace
fn merge_value(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_value(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (base_slot, overlay) => *base_slot = overlay,
    }
}
