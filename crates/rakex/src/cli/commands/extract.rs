//! Implementation of `rakex extract`.

use std::process::ExitCode;

use rakex_core::Truncation;

use super::shared::{read_file_or_failure, read_stdin_or_failure};
use crate::cli::{args::ExtractCommand, context::CommandContext, output::output_keywords};

/// Extracts and prints ranked keywords.
pub fn run(ctx: &CommandContext, cmd: &ExtractCommand) -> ExitCode {
    let extractor = match ctx.extractor(&cmd.overrides) {
        Ok(extractor) => extractor,
        Err(code) => return code,
    };

    let text = match input_text(cmd) {
        Ok(text) => text,
        Err(code) => return code,
    };

    let truncation = if cmd.top_third {
        Truncation::TopThird
    } else {
        Truncation::All
    };
    let mut keywords = extractor.extract_ranked(&text, truncation);
    if let Some(limit) = cmd.limit {
        keywords.truncate(limit);
    }

    output_keywords(&keywords, cmd.json)
}

/// Returns the text from arguments, the input file, or stdin, in that order.
fn input_text(cmd: &ExtractCommand) -> Result<String, ExitCode> {
    if !cmd.text.is_empty() {
        return Ok(cmd.text.join(" "));
    }
    match &cmd.file {
        Some(path) => read_file_or_failure(path),
        None => read_stdin_or_failure(),
    }
}
