//! Implementation of `rakex init`.

use std::{path::Path, process::ExitCode};

use rakex_config::{ConfigError, Scope, global_config_path, write_starter_files};
use rakex_core::StopwordSet;

use crate::cli::{args::InitCommand, context::CommandContext};

/// Creates a `.rakex.toml` and the stopword list it points at.
///
/// Run from the home directory, or with `--global`, this creates `~/.rakex.toml`.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let home = global_config_path().and_then(|p| p.parent().map(Path::to_path_buf));
    let scope = if cmd.global || home.as_ref() == Some(&ctx.cwd) {
        Scope::Global
    } else {
        Scope::Local
    };

    let dir = match scope {
        Scope::Local => ctx.cwd.clone(),
        Scope::Global => match home {
            Some(home) => home,
            None => {
                eprintln!("error: could not determine home directory");
                return ExitCode::FAILURE;
            }
        },
    };

    let files = match write_starter_files(&dir, scope, &starter_stopwords(), cmd.force) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("error: {e}");
            if matches!(e, ConfigError::AlreadyExists { .. }) {
                eprintln!("use --force to overwrite");
            }
            return ExitCode::FAILURE;
        }
    };

    println!("Created {}", files.config.display());
    if files.stopwords_written {
        println!("Created {}", files.stopwords.display());
    } else {
        println!("Kept existing {}", files.stopwords.display());
    }
    println!();
    println!("Configuration written:");
    for line in scope.template().lines() {
        println!("  {line}");
    }

    ExitCode::SUCCESS
}

/// The built-in English list as an editable stopword file.
fn starter_stopwords() -> String {
    let mut list = String::from("# rakex stopwords: one per line\n");
    for word in StopwordSet::english().words() {
        list.push_str(word);
        list.push('\n');
    }
    list
}
