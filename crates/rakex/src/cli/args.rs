//! Clap argument definitions for the `rakex` CLI.

use std::{env, path::PathBuf, process::exit};

use clap::{Args, CommandFactory, Parser, Subcommand, error::ErrorKind};
use rakex_config::ExtractMode;

/// Parse an extraction mode from a string.
fn parse_mode(s: &str) -> Result<ExtractMode, String> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "rakex")]
#[command(about = "Rapid automatic keyword extraction")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags that override extraction settings from configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct ExtractOverridesArgs {
    /// Segmentation mode: simple (punctuation) or linguistic (surface/TAG input) [default: simple]
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<ExtractMode>,

    /// Stopword file, one word per line [default: built-in English list]
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// Part-of-speech tags that break phrases in linguistic mode (comma-separated)
    #[arg(long)]
    pub stoptags: Vec<String>,

    /// Ignore words shorter than N characters inside phrases [default: 0]
    #[arg(long)]
    pub min_word_len: Option<usize>,

    /// Skip phrases with fewer than N characters [default: 0]
    #[arg(long)]
    pub min_token_len: Option<usize>,
}

/// Arguments for `rakex extract`.
#[derive(Args, Debug, Clone)]
pub struct ExtractCommand {
    /// Text to extract from; reads stdin when neither text nor --file is given
    #[arg(conflicts_with = "file")]
    pub text: Vec<String>,

    /// Read text from a file
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Keep only the top third of ranked phrases
    #[arg(long)]
    pub top_third: bool,

    /// Maximum phrases to show
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    /// Extraction setting overrides.
    pub overrides: ExtractOverridesArgs,
}

/// Arguments for `rakex batch`.
#[derive(Args, Debug, Clone)]
pub struct BatchCommand {
    /// Directory of documents to process
    #[arg(short = 'd', long)]
    pub documents: PathBuf,

    /// Directory to write keyword files to
    #[arg(short = 'o', long)]
    pub output: PathBuf,

    #[command(flatten)]
    /// Extraction setting overrides.
    pub overrides: ExtractOverridesArgs,
}

/// Arguments for `rakex repl`.
#[derive(Args, Debug, Clone)]
pub struct ReplCommand {
    #[command(flatten)]
    /// Extraction setting overrides.
    pub overrides: ExtractOverridesArgs,
}

/// Arguments for `rakex config`.
#[derive(Args, Debug, Clone)]
pub struct ConfigCommand {
    #[command(flatten)]
    /// Extraction setting overrides.
    pub overrides: ExtractOverridesArgs,
}

/// Arguments for `rakex init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.rakex.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `rakex` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Extract ranked keywords from text
    #[command(after_help = "\
EXAMPLES:
  rakex extract 'Compatibility of systems of linear constraints'
  rakex extract --file paper.txt --top-third
  cat paper.txt | rakex extract --json -n 10
  rakex extract --mode linguistic --stoptags JKS,JKO --file tagged.txt")]
    Extract(ExtractCommand),

    /// Extract keywords for every document in a directory
    #[command(after_help = "\
Each file in DOCUMENTS is ranked and the top third of its phrases is written,
one per line, to a file of the same name in OUTPUT.")]
    Batch(BatchCommand),

    /// Interactive extraction; type 'reload' to reload stopwords, 'quit' to exit
    Repl(ReplCommand),

    /// Show effective configuration settings
    Config(ConfigCommand),

    /// Initialize rakex configuration in current directory
    Init(InitCommand),
}

/// Parses CLI arguments, printing a compact command list for top-level `--help`.
pub fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelp {
                let args: Vec<_> = env::args().collect();
                if args.len() <= 2 {
                    print_command_help();
                    exit(0);
                }
            }
            e.exit();
        }
    }
}

/// Prints top-level help with one line per subcommand.
fn print_command_help() {
    let cmd = Cli::command();
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    println!("{about}");
    println!();
    println!("Usage: rakex <COMMAND>");
    println!();
    println!("Commands:");

    for sub in cmd.get_subcommands() {
        let name = sub.get_name();
        if name == "help" {
            continue;
        }
        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        println!("  {name:10} {about}");
    }

    println!(
        "  {:<10} Print this message or the help of the given subcommand(s)",
        "help"
    );
    println!();
    println!("Options:");
    println!("  -h, --help  Print help");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=info) to see stopword loading and reload logs.");
}
