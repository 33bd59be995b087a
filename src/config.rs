use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Locator configuration, usually loaded from a JSON file. Command-line
/// flags take precedence over file values.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LocatorConfig {
    /// Executable name of the tool to locate.
    pub tool: Option<String>,
    /// Requested tool version, verbatim; malformed text is diagnosed during
    /// resolution, not here.
    pub version: Option<String>,
    /// Explicit install directory that bypasses repository and PATH search.
    pub override_dir: Option<PathBuf>,
    /// Root of the managed package repository.
    pub repository_dir: Option<PathBuf>,
    pub provisioning: ProvisioningConfig,
}

/// Provisioning policy.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProvisioningConfig {
    /// Invoke the provisioning hook when resolution fails terminally.
    pub on_failure: bool,
}

impl Default for ProvisioningConfig {
    fn default() -> Self {
        Self { on_failure: false }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse configuration file: {0}")]
    Json(#[from] serde_json::Error),
}

impl LocatorConfig {
    /// Loads configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

/// Returns the default configuration file path.
/// Uses $XDG_CONFIG_HOME/tool-locator if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/tool-locator,
/// or ./tool-locator if neither is available.
pub fn config_path() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
        .join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("tool-locator")
}
