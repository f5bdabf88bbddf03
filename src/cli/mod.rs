//! CLI command definitions and handlers

mod init;
mod score;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// specscore - completeness scoring for API specification documents
#[derive(Parser, Debug)]
#[command(name = "specscore")]
#[command(
    version,
    about = "Score an OpenAPI-style specification document for completeness and documentation quality",
    long_about = "specscore reads a JSON or YAML API specification, checks it for missing \
required elements (issues) and documentation gaps (suggestions), and prints a 0-100 \
score with a qualitative grade.\n\n\
Findings never change the exit status; only usage and parse errors do.",
    after_help = "\
Examples:
  specscore openapi.yaml                        Score a document
  specscore openapi.json --format json          JSON output for scripting
  specscore openapi.json -f json --compact      Single-line JSON
  specscore openapi.yaml -f md -o report.md     Markdown report to a file
  specscore openapi.yaml --write-report         Also write openapi.report.txt next to the input
  specscore openapi.yaml --explain-score        Show the scoring breakdown
  specscore init                                Write an example specscore.toml"
)]
pub struct Cli {
    /// Specification document to score (JSON or YAML)
    pub file: Option<PathBuf>,

    /// Output format: text, json, markdown (or md). Defaults to the config value, then text
    #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
    pub format: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Also write the report next to the input as <name>.report.<ext>
    #[arg(long)]
    pub write_report: bool,

    /// Show the scoring breakdown
    #[arg(long)]
    pub explain_score: bool,

    /// Single-line JSON (with --format json)
    #[arg(long)]
    pub compact: bool,

    /// Configuration file (default: specscore.toml or .specscorerc.json next to the input)
    #[arg(long, env = "SPECSCORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write an example specscore.toml with the default settings
    Init {
        /// Directory to write the config into
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    match cli.command {
        Some(Commands::Init { dir, force }) => init::run(&dir, force),

        None => {
            let Some(file) = cli.file else {
                Cli::command()
                    .error(
                        clap::error::ErrorKind::MissingRequiredArgument,
                        "the following required arguments were not provided:\n  <FILE>",
                    )
                    .exit();
            };

            score::run(score::ScoreArgs {
                file,
                format: cli.format,
                output: cli.output,
                write_report: cli.write_report,
                explain_score: cli.explain_score,
                compact: cli.compact,
                config: cli.config,
            })
        }
    }
}
