//! Implementation of `rakex batch`.

use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use rakex_core::{ScoredKeyword, Truncation};
use tracing::{info, warn};

use crate::cli::{args::BatchCommand, context::CommandContext};

/// Writes the top third of each document's phrases to the output directory.
pub fn run(ctx: &CommandContext, cmd: &BatchCommand) -> ExitCode {
    if !cmd.documents.is_dir() {
        eprintln!(
            "error: documents path is not a directory: {}",
            cmd.documents.display()
        );
        return ExitCode::FAILURE;
    }

    let extractor = match ctx.extractor(&cmd.overrides) {
        Ok(extractor) => extractor,
        Err(code) => return code,
    };

    if let Err(e) = fs::create_dir_all(&cmd.output) {
        eprintln!(
            "error: failed to create output directory {}: {e}",
            cmd.output.display()
        );
        return ExitCode::FAILURE;
    }

    let documents = match list_documents(&cmd.documents) {
        Ok(documents) => documents,
        Err(e) => {
            eprintln!(
                "error: failed to read directory {}: {e}",
                cmd.documents.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let mut written = 0;
    for path in &documents {
        let Some(name) = path.file_name() else {
            continue;
        };

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable document");
                continue;
            }
        };

        let keywords = extractor.extract_ranked(&text, Truncation::TopThird);
        let output_path = cmd.output.join(name);
        if let Err(e) = fs::write(&output_path, render_keywords(&keywords)) {
            eprintln!("error: failed to write {}: {e}", output_path.display());
            return ExitCode::FAILURE;
        }
        info!(path = %path.display(), keywords = keywords.len(), "wrote keywords");
        written += 1;
    }

    println!(
        "Wrote {written} keyword file(s) to {}",
        cmd.output.display()
    );
    ExitCode::SUCCESS
}

/// Lists regular files in `dir`, sorted by path.
fn list_documents(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            documents.push(path);
        }
    }
    documents.sort();
    Ok(documents)
}

/// Renders phrases one per line.
fn render_keywords(keywords: &[ScoredKeyword]) -> String {
    keywords
        .iter()
        .map(|keyword| format!("{}\n", keyword.phrase))
        .collect()
}
