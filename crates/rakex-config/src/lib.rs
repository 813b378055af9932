//! Configuration system for rakex.
//!
//! rakex uses TOML configuration files named `.rakex.toml`. Configuration is resolved by walking
//! up the directory tree from the current working directory, collecting any `.rakex.toml` files
//! found, then loading `~/.rakex.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;

use std::{
    fmt,
    path::{Path, PathBuf},
    str,
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs, split_stoptags};
pub use parse::{RawConfig, RawExtractSettings, parse_config_file, parse_config_str};
pub use resolve::resolve_stopword_path;
use serde::{Deserialize, Serialize};
pub use templates::{Scope, StarterFiles, write_starter_files};

/// Default minimum word length inside candidate phrases.
pub const DEFAULT_MIN_WORD_LEN: usize = 0;

/// Default minimum character length of a scored candidate phrase.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 0;

/// Top-level merged configuration for rakex.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.rakex.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Extraction settings.
    pub extract: ExtractSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.rakex.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.rakex.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.rakex.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    ///
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// This outputs the merged configuration settings in the same format as a `.rakex.toml`
    /// file, making it easy to see the effective configuration.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            extract: &self.extract,
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Extraction settings.
    extract: &'a ExtractSettings,
}

/// Segmentation strategy used to cut text into candidate phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractMode {
    /// Split sentences on punctuation and phrases on stopwords.
    #[default]
    #[serde(alias = "punctuation")]
    Simple,
    /// Read part-of-speech tagged text; stop tags break phrases as well as stopwords.
    #[serde(alias = "nlp", alias = "tagged")]
    Linguistic,
}

impl ExtractMode {
    /// Returns a brief description of the mode.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Simple => "punctuation sentence splitting, stopword phrase breaks",
            Self::Linguistic => "tagged morphemes, stopword and stop-tag phrase breaks",
        }
    }
}

impl fmt::Display for ExtractMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Linguistic => write!(f, "linguistic"),
        }
    }
}

impl str::FromStr for ExtractMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" | "punctuation" => Ok(Self::Simple),
            "linguistic" | "nlp" | "tagged" => Ok(Self::Linguistic),
            _ => Err(format!(
                "unknown mode '{s}', expected one of: simple, linguistic"
            )),
        }
    }
}

/// Settings for keyword extraction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractSettings {
    /// Segmentation strategy.
    pub mode: ExtractMode,
    /// Words inside a candidate phrase shorter than this are ignored.
    pub min_word_len: usize,
    /// Candidate phrases with fewer characters than this are not scored.
    pub min_token_len: usize,
    /// Resolved stopword file; `None` selects the built-in English list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopwords: Option<PathBuf>,
    /// Part-of-speech tags that break phrases in linguistic mode.
    pub stoptags: Vec<String>,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            mode: ExtractMode::default(),
            min_word_len: DEFAULT_MIN_WORD_LEN,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            stopwords: None,
            stoptags: Vec::new(),
        }
    }
}
