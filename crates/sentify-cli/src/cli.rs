//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sentify",
    version,
    about = "Generate all valid phrasings of templated sentences from a workbook",
    long_about = "Expand interchangeable word chunks from a spreadsheet into every\n\
                  valid sentence variant, grouped by length and sorted with a\n\
                  language-specific collation, exported to xlsx or docx.\n\
                  A second mode reassembles per-version sentence fragments."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Expand a template workbook into every sentence variant.
    Generate(GenerateArgs),

    /// Reassemble per-version sentence fragments into a document.
    Versions(VersionsArgs),

    /// List supported language tags and their properties.
    Languages,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Template workbook (.xlsx), one sentence per sheet.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path (default: <INPUT stem>_sentences.<format>).
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Language tag ("bo" for Tibetan, anything else takes the generic path).
    #[arg(long = "lang", default_value = "bo")]
    pub lang: String,

    /// Output format: xlsx or docx.
    #[arg(long = "format", default_value = "xlsx")]
    pub format: String,
}

#[derive(Parser)]
pub struct VersionsArgs {
    /// Version workbook (.xlsx): labels in column A, fragments in column D.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output document path (default: <INPUT stem>_versions.docx).
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Language tag ("bo" enables Tibetan surface formatting).
    #[arg(long = "lang", default_value = "bo")]
    pub lang: String,

    /// Skip the Tibetan surface formatting pass.
    #[arg(long = "no-formatting")]
    pub no_formatting: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
