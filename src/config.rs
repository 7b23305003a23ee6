//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/comptree/comptree.toml`
//! 3. Explicit config file (`--config <FILE>`)
//! 4. Environment variables: `COMPTREE_*` prefix
//!
//! Settings only steer the command-line host. Tree semantics are fixed.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Unified configuration for comptree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Depth passed to the root when displaying (default: 0)
    pub depth: usize,
    /// Log verbosity used when no `-d` flag is given (default: 0 = warn)
    pub verbosity: u8,
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub depth: Option<usize>,
    pub verbosity: Option<u8>,
}

/// Get the XDG config directory for comptree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "comptree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("comptree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Read one environment override; a missing key is "not set", anything
/// unparsable is an error.
fn env_value<T>(config: &Config, key: &str) -> Result<Option<T>, ApplicationError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = match config.get_string(key) {
        Ok(raw) => raw,
        Err(ConfigError::NotFound(_)) => return Ok(None),
        Err(e) => return Err(config_err(e)),
    };
    raw.trim().parse().map(Some).map_err(|e| ApplicationError::Config {
        message: format!("COMPTREE_{}={:?}: {}", key.to_uppercase(), raw, e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            depth: overlay.depth.unwrap_or(self.depth),
            verbosity: overlay.verbosity.unwrap_or(self.verbosity),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = config_file {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply COMPTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("COMPTREE"))
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(&config, "depth")? {
            settings.depth = val;
        }
        if let Some(val) = env_value(&config, "verbosity")? {
            settings.verbosity = val;
        }

        Ok(settings)
    }

    /// Render as TOML, e.g. to seed a config file.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
