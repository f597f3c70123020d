//! Configuration for applications built on corridor.

use crate::error::{CorridorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "corridor.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Which context realization root dependents are bound to.
    #[serde(default)]
    pub profile: Profile,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from `path`, or defaults if the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| CorridorError::ConfigError(format!("failed to read config: {}", e)))?;
        toml::from_str(&content).map_err(|e| CorridorError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Save configuration to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CorridorError::ConfigError(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| CorridorError::ConfigError(format!("failed to write config: {}", e)))?;
        Ok(())
    }
}

/// Named context realization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Live values (current time, real connections).
    #[default]
    Production,
    /// Deterministic sentinel values for tests and demos.
    Mock,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Production => f.write_str("production"),
            Profile::Mock => f.write_str("mock"),
        }
    }
}

impl FromStr for Profile {
    type Err = CorridorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Profile::Production),
            "mock" | "test" => Ok(Profile::Mock),
            other => Err(CorridorError::UnknownProfile(other.to_string())),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` env-filter directive used when `RUST_LOG` is unset
    /// (default: "warn").
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}
