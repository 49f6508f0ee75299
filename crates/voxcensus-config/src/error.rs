//! Configuration error types.

use std::path::PathBuf;

/// Errors that can occur when loading or saving configuration.
///
/// File-level variants name the offending path, the way the world and table
/// errors do, so a failed run always says which file it tripped over.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path of the config file.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file or its directory could not be written.
    #[error("failed to write config {path}: {source}")]
    Write {
        /// Path being written.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file was read but is not valid RON for this schema.
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// The in-memory config could not be rendered as RON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] ron::Error),
}
