//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, ExtractSettings,
    parse::{RawConfig, RawExtractSettings},
    resolve::resolve_stopword_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Stoptags: the whole list from the highest-precedence file that sets it
/// - Stopword path: resolved against the directory of the file that sets it
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let extract = merge_extract_settings(configs)?;
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent().map(Path::to_path_buf));

    Ok(Config {
        extract,
        config_root,
    })
}

/// Merges extraction settings, taking first defined value for each field.
fn merge_extract_settings(configs: &[ParsedConfig]) -> Result<ExtractSettings, ConfigError> {
    let mut result = ExtractSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref extract) = parsed.config.extract {
            apply_raw_extract(&mut result, extract, &parsed.path)?;
        }
    }

    Ok(result)
}

/// Applies raw extraction settings to result, overwriting any present values.
fn apply_raw_extract(
    result: &mut ExtractSettings,
    raw: &RawExtractSettings,
    source: &Path,
) -> Result<(), ConfigError> {
    if let Some(v) = raw.mode {
        result.mode = v;
    }
    if let Some(v) = raw.min_word_len {
        result.min_word_len = v;
    }
    if let Some(v) = raw.min_token_len {
        result.min_token_len = v;
    }
    if let Some(ref path) = raw.stopwords {
        let config_dir = source.parent().unwrap_or_else(|| Path::new("."));
        result.stopwords = Some(resolve_stopword_path(path, config_dir)?);
    }
    if let Some(ref tags) = raw.stoptags {
        result.stoptags = split_stoptags(tags);
    }
    Ok(())
}

/// Splits comma-separated stoptag entries into individual, trimmed tags.
pub fn split_stoptags<S: AsRef<str>>(entries: &[S]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| entry.as_ref().split(','))
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
