//! Implementation of `rakex config`.

use std::process::ExitCode;

use rakex_config::Config;

use crate::cli::{args::ConfigCommand, context::CommandContext};

/// Shows effective configuration settings, including command-line overrides.
pub fn run(ctx: &CommandContext, cmd: &ConfigCommand) -> ExitCode {
    let effective = Config {
        extract: ctx.settings(&cmd.overrides),
        config_root: ctx.config.config_root.clone(),
    };
    if let Some(root) = &effective.config_root {
        println!("# config root: {}", root.display());
    }
    let mode = effective.extract.mode;
    println!("# mode {mode}: {}", mode.description());
    print!("{}", effective.settings_to_toml());
    ExitCode::SUCCESS
}
