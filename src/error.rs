//! Domain-specific error types for oomoxify.
//!
//! This module provides structured error types for the two domains of the
//! crate: the persisted export configuration and the export invocation itself.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config directory could not be determined.
    #[error("Config directory not found")]
    NoDirFound,

    /// Failed to read the config file.
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Failed to parse the config file.
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[source] toml::de::Error),

    /// Failed to serialize the config.
    #[error("Failed to serialize config: {0}")]
    SerializeFailed(#[source] toml::ser::Error),

    /// Failed to save the config file.
    #[error("Failed to save config: {0}")]
    SaveFailed(#[source] std::io::Error),

    /// A key the core relies on is missing from the store.
    ///
    /// Every key read by the export core is seeded from the default mapping
    /// at load time, so hitting this is a programming error, not a user one.
    #[error("Config key '{0}' missing from export config")]
    MissingKey(String),

    /// A persisted value is not one of the accepted values for its key.
    #[error("Invalid value '{value}' for config key '{key}'")]
    InvalidValue { key: String, value: String },
}

/// Export invocation errors.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The oomoxify script could not be found.
    #[error("oomoxify script not found at {}", .0.display())]
    ScriptNotFound(PathBuf),

    /// Failed to spawn the export process.
    #[error("Failed to spawn export process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    /// Failed while waiting on the export process.
    #[error("Failed to wait on export process: {0}")]
    WaitFailed(#[source] std::io::Error),

    /// The export process exceeded its time budget and was killed.
    #[error("Export timed out after {0} seconds")]
    Timeout(u64),

    /// The export process exited with a non-zero status.
    #[error("Export process failed with {0}")]
    ScriptFailed(std::process::ExitStatus),
}
