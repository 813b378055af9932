//! Error types for rakex configuration.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::de;

/// Errors raised while loading configuration or writing starter files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A `.rakex.toml` could not be read.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// The unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A `.rakex.toml` is not valid TOML or has a malformed setting.
    ///
    /// Malformed numbers such as `min_word_len = "three"` or `-1` land here.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// The malformed file.
        path: PathBuf,
        /// Underlying TOML error.
        source: de::Error,
    },

    /// A `~` stopword path was used but there is no home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// `rakex init` found a config where it would write one.
    #[error("configuration file already exists: {path}")]
    AlreadyExists {
        /// The existing config file.
        path: PathBuf,
    },

    /// A starter config or stopword list could not be written.
    #[error("failed to write {path}: {source}")]
    WriteFile {
        /// The file being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
