//! Implementation of `rakex repl`.

use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use rakex_core::{RakeExtractor, Truncation};

use crate::cli::{args::ReplCommand, context::CommandContext};

/// Prompt printed before each line of input.
const PROMPT: &str = "INPUT: ";

/// Runs an interactive extraction session on stdin.
pub fn run(ctx: &CommandContext, cmd: &ReplCommand) -> ExitCode {
    let extractor = match ctx.extractor(&cmd.overrides) {
        Ok(extractor) => extractor,
        Err(code) => return code,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match session(&extractor, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Reads lines until `quit` or end of input.
///
/// Commands match case-insensitively. `reload` reloads stopwords; a failed reload is reported
/// and the session keeps the previous list. Any other non-blank line is extracted and printed
/// as `phrase : score`, best first.
fn session<R: BufRead, W: Write>(
    extractor: &RakeExtractor,
    input: R,
    mut output: W,
) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            return Ok(());
        };

        let text = line.trim();
        match text.to_lowercase().as_str() {
            "" => {}
            "quit" => return Ok(()),
            "reload" => match extractor.reload_stopwords() {
                Ok(count) => writeln!(output, "reloaded {count} stopwords")?,
                Err(e) => eprintln!("error: reload failed, keeping previous stopwords: {e}"),
            },
            _ => {
                for keyword in extractor.extract_ranked(text, Truncation::All) {
                    writeln!(output, "{keyword}")?;
                }
            }
        }
    }
}
