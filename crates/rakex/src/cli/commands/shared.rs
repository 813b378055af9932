//! Shared helpers for command implementations.

use std::{
    fs,
    io::{self, Read},
    path::Path,
    process::ExitCode,
};

use rakex_config::{ExtractSettings, split_stoptags};

use crate::cli::args::ExtractOverridesArgs;

/// Applies command-line overrides on top of configured settings.
///
/// A relative `--stopwords` path is resolved against `cwd`. Any `--stoptags` replace the
/// configured list.
pub fn apply_overrides(
    settings: &ExtractSettings,
    overrides: &ExtractOverridesArgs,
    cwd: &Path,
) -> ExtractSettings {
    let mut effective = settings.clone();
    if let Some(mode) = overrides.mode {
        effective.mode = mode;
    }
    if let Some(path) = &overrides.stopwords {
        effective.stopwords = Some(cwd.join(path));
    }
    if !overrides.stoptags.is_empty() {
        effective.stoptags = split_stoptags(&overrides.stoptags);
    }
    if let Some(len) = overrides.min_word_len {
        effective.min_word_len = len;
    }
    if let Some(len) = overrides.min_token_len {
        effective.min_token_len = len;
    }
    effective
}

/// Reads a file to a string, exiting with a consistent error on failure.
pub fn read_file_or_failure(path: &Path) -> Result<String, ExitCode> {
    fs::read_to_string(path).map_err(|e| {
        eprintln!("error: failed to read {}: {e}", path.display());
        ExitCode::FAILURE
    })
}

/// Reads all of stdin, exiting with a consistent error on failure.
pub fn read_stdin_or_failure() -> Result<String, ExitCode> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text).map_err(|e| {
        eprintln!("error: failed to read stdin: {e}");
        ExitCode::FAILURE
    })?;
    Ok(text)
}
