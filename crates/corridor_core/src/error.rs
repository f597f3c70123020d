//! Error types for corridor_core operations.
//!
//! Addressed lookups and context swaps are total and never produce these
//! errors. Only the surfaces around them (configuration, profile parsing)
//! can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for corridor_core operations.
#[derive(Error, Debug)]
pub enum CorridorError {
    /// Configuration could not be read, parsed, or written.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Configuration file exists but is not valid TOML for [`crate::Config`].
    #[error("invalid config at {}: {}", path.display(), reason)]
    InvalidConfig {
        /// Path to the offending file
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// A profile name did not match any known realization.
    #[error("unknown profile: {0} (expected 'production' or 'mock')")]
    UnknownProfile(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CorridorError {
    /// Returns a user-friendly recovery suggestion for the error, if available.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidConfig { .. } => {
                Some("Fix the file or delete it to fall back to the default configuration.")
            }
            Self::UnknownProfile(_) => Some("Use 'production' or 'mock'."),
            _ => None,
        }
    }
}

/// Convenience Result type for corridor_core operations.
pub type Result<T> = std::result::Result<T, CorridorError>;
