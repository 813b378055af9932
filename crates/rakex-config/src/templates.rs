//! Starter files written by `rakex init`.
//!
//! A new config enables a single setting, `stopwords`, pointing at a stopword list written
//! next to it. Every other setting is listed commented out with its default.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{CONFIG_FILENAME, ConfigError};

/// Project configuration template.
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Home directory configuration template.
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Which configuration `rakex init` creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `.rakex.toml` in a project directory.
    Local,
    /// `~/.rakex.toml`.
    Global,
}

impl Scope {
    /// Config file contents for this scope.
    pub fn template(self) -> &'static str {
        match self {
            Self::Local => LOCAL_TEMPLATE,
            Self::Global => GLOBAL_TEMPLATE,
        }
    }

    /// Stopword list the template points at, relative to the config's directory.
    pub fn stopwords_filename(self) -> &'static str {
        match self {
            Self::Local => "stopwords.txt",
            Self::Global => ".rakex-stopwords.txt",
        }
    }
}

/// Files produced by [`write_starter_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterFiles {
    /// The config file.
    pub config: PathBuf,
    /// The stopword list the config points at.
    pub stopwords: PathBuf,
    /// False when an existing stopword list was left in place.
    pub stopwords_written: bool,
}

/// Writes the config for `scope` into `dir`, plus a stopword list holding `stopwords`.
///
/// An existing config is replaced only with `force`. An existing stopword list is never
/// replaced.
pub fn write_starter_files(
    dir: &Path,
    scope: Scope,
    stopwords: &str,
    force: bool,
) -> Result<StarterFiles, ConfigError> {
    let config = dir.join(CONFIG_FILENAME);
    if config.exists() && !force {
        return Err(ConfigError::AlreadyExists { path: config });
    }
    write_file(&config, scope.template())?;

    let list = dir.join(scope.stopwords_filename());
    let stopwords_written = !list.exists();
    if stopwords_written {
        write_file(&list, stopwords)?;
    }

    Ok(StarterFiles {
        config,
        stopwords: list,
        stopwords_written,
    })
}

/// Writes `contents` to `path`.
fn write_file(path: &Path, contents: &str) -> Result<(), ConfigError> {
    fs::write(path, contents).map_err(|source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
