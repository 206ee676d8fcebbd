//! Error types for the engine crate.

use inputs::InputError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the engine's fallible entry points.
///
/// Scoring itself never fails; these cover raw input, configuration and
/// sweep parameters.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Raw input could not be parsed or validated
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    /// Configuration file could not be read
    #[error("Failed to read configuration from {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file was not valid JSON for an EngineConfig
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A configuration value was unusable
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidConfig { key: &'static str, message: String },

    /// Sweep step must be at least one minute
    #[error("Sweep step must be at least 1 minute, got {0}")]
    InvalidSweepStep(u32),
}

/// Result type alias for EngineError
pub type Result<T, E = EngineError> = std::result::Result<T, E>;
