//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use rakex_core::ScoredKeyword;
use serde::Serialize;

/// JSON output for `rakex extract`.
#[derive(Serialize)]
struct JsonKeywordOutput<'a> {
    /// Ranked phrases with their scores.
    keywords: &'a [ScoredKeyword],
    /// Number of phrases returned.
    total: usize,
}

/// Prints ranked keywords as a table, or as JSON when `json` is set.
pub fn output_keywords(keywords: &[ScoredKeyword], json: bool) -> ExitCode {
    if json {
        let json_output = JsonKeywordOutput {
            keywords,
            total: keywords.len(),
        };
        match serde_json::to_string_pretty(&json_output) {
            Ok(json_str) => println!("{json_str}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    if keywords.is_empty() {
        println!("No keywords found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", keyword_table(keywords));
    ExitCode::SUCCESS
}

/// Builds a two-column phrase/score table.
fn keyword_table(keywords: &[ScoredKeyword]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Phrase", "Score"]);
    for keyword in keywords {
        table.add_row(vec![
            Cell::new(&keyword.phrase),
            Cell::new(format!("{:.2}", keyword.score)),
        ]);
    }
    table
}
