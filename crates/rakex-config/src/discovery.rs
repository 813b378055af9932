//! Configuration file discovery.
//!
//! `.rakex.toml` files are collected from the working directory and each of its ancestors.
//! The global `~/.rakex.toml` comes last unless a `root = true` file ended the walk.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".rakex.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global (`~/.rakex.toml`) last.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    discover_with_global(cwd, global_config_path())
}

/// Returns the path to the global configuration file (`~/.rakex.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Walks `cwd` and its ancestors, then appends `global` if it exists and was not already seen.
fn discover_with_global(cwd: &Path, global: Option<PathBuf>) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for config in cwd.ancestors().map(|dir| dir.join(CONFIG_FILENAME)) {
        if !config.is_file() {
            continue;
        }
        let is_root = is_root_config(&config);
        configs.push(config);
        if is_root {
            return configs;
        }
    }

    if let Some(global) = global.filter(|path| path.is_file() && !configs.contains(path)) {
        configs.push(global);
    }
    configs
}
