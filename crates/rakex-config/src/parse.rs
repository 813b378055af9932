//! Configuration file parsing.
//!
//! Parses individual `.rakex.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::{ConfigError, ExtractMode};

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Extraction settings section.
    pub extract: Option<RawExtractSettings>,
}

/// Raw extraction settings.
///
/// The upper-case aliases accept the property names used by older `rake.properties`
/// files (`MIN_WORD_LEN`, `MIN_TOKEN_LEN`, `STOPTAG`).
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawExtractSettings {
    /// Segmentation strategy.
    pub mode: Option<ExtractMode>,
    /// Minimum word length for words inside candidate phrases.
    #[serde(alias = "MIN_WORD_LEN")]
    pub min_word_len: Option<usize>,
    /// Minimum character length of a candidate phrase.
    #[serde(alias = "MIN_TOKEN_LEN")]
    pub min_token_len: Option<usize>,
    /// Path to a stopword file, relative to the config file.
    pub stopwords: Option<String>,
    /// Part-of-speech tags that break phrases in linguistic mode.
    /// Accepts either a single string or an array of strings; entries are split on commas.
    #[serde(alias = "STOPTAG")]
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub stoptags: Option<Vec<String>>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
///
/// Useful for validating template content (tests only).
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// This is used during discovery to stop traversal at root configs.
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
