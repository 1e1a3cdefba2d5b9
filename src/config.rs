//! Configuration loaded from a TOML file.
//!
//! Looks at `--config` first, then `~/.config/pocketcalc/config.toml`.
//! A missing default file means built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::calculator::MAX_EXPONENT_DIGITS;
use crate::error::ConfigError;

const APP_DIR: &str = "pocketcalc";
const CONFIG_FILE: &str = "config.toml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fallback log filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            display: DisplayConfig::default(),
        }
    }
}

/// Limits for rendering the display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Longest text shown as-is before switching to scientific notation.
    pub max_length: usize,
    /// Fractional digits in scientific notation.
    pub exponent_digits: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_length: 9,
            exponent_digits: 3,
        }
    }
}

/// Where a loaded config came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl Config {
    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from an explicit path, or from the default location.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    /// Returns where the config came from so the caller can log it once
    /// logging is set up.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path().filter(|path| path.exists()),
        };

        match path {
            Some(path) => Ok((Self::from_file(&path)?, ConfigSource::File(path))),
            None => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&content).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        Ok(config)
    }

    /// Parse config from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.display.max_length == 0 {
            return Err(ConfigError::Invalid(
                "display.max_length must be at least 1".to_string(),
            ));
        }
        if self.display.exponent_digits > MAX_EXPONENT_DIGITS {
            return Err(ConfigError::Invalid(format!(
                "display.exponent_digits must be at most {}",
                MAX_EXPONENT_DIGITS
            )));
        }
        Ok(())
    }
}
