//! Command implementations and dispatch.

pub mod batch;
pub mod config;
pub mod extract;
pub mod init;
pub mod repl;
mod shared;

use std::process::ExitCode;

pub use shared::apply_overrides;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Extract(cmd) => extract::run(ctx, &cmd),
        Commands::Batch(cmd) => batch::run(ctx, &cmd),
        Commands::Repl(cmd) => repl::run(ctx, &cmd),
        Commands::Config(cmd) => config::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
    }
}
