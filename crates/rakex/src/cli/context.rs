//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use rakex_config::{Config, ExtractSettings};
use rakex_core::{RakeExtractor, TaggedTextEngine};
use tracing::info;

use super::{args::ExtractOverridesArgs, commands::apply_overrides};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Returns the configured extraction settings with command-line overrides applied.
    pub fn settings(&self, overrides: &ExtractOverridesArgs) -> ExtractSettings {
        apply_overrides(&self.config.extract, overrides, &self.cwd)
    }

    /// Builds an extractor from the effective settings.
    pub fn extractor(&self, overrides: &ExtractOverridesArgs) -> Result<RakeExtractor, ExitCode> {
        let settings = self.settings(overrides);
        let extractor = RakeExtractor::from_settings(&settings, TaggedTextEngine::default())
            .map_err(|e| {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            })?;
        info!(
            mode = %settings.mode,
            stopwords = %extractor.stopwords().source(),
            "extractor ready"
        );
        Ok(extractor)
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
