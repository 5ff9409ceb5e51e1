//! CLI argument definitions for the screener.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use screen_model::{DomainFilter, StatusFilter};

use crate::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "screener",
    version,
    about = "Candidate screener - score and triage a candidate spreadsheet",
    long_about = "Score candidates from a CSV/TSV export.\n\n\
                  Each row gets a weighted composite score from its Education, Domain Fit,\n\
                  Experience and Skills sub-scores and a Shortlisted, Borderline or\n\
                  Rejected status."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for more detail, -q for errors only).
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

    /// Allow candidate values (names, cells) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (default: ./screener.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a spreadsheet and print the current page or board.
    View(ViewArgs),

    /// Show how the spreadsheet headers were interpreted.
    Columns(InputArgs),

    /// Show one candidate with a score breakdown.
    Detail(DetailArgs),

    /// Write the scored spreadsheet with score and status columns appended.
    Export(ExportArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// Candidate spreadsheet (.csv or .tsv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// Controls shared by every command that derives scores.
#[derive(Args, Default)]
pub struct StateArgs {
    /// Dimension weight as DIMENSION=VALUE (edu, dom, exp, req; 0-10). Repeatable.
    #[arg(long = "weight", value_name = "DIM=VALUE")]
    pub weights: Vec<String>,

    /// Case-insensitive search across every field.
    #[arg(long = "search")]
    pub search: Option<String>,

    /// Minimum years of experience.
    #[arg(long = "min-exp", value_name = "YEARS")]
    pub min_experience: Option<f64>,

    /// Domain-match filter.
    #[arg(long = "domain", value_name = "all|true|false", default_value = "all")]
    pub domain: DomainFilter,

    /// Status filter (all, shortlisted, borderline, rejected).
    #[arg(long = "status", default_value = "all")]
    pub status: StatusFilter,

    /// Sort column (Exp or Score). Repeat to toggle like header clicks.
    #[arg(long = "sort", value_name = "COLUMN")]
    pub sort: Vec<String>,

    /// Sort the last --sort column descending.
    #[arg(long = "desc", requires = "sort")]
    pub descending: bool,

    /// Force a status as ROW=STATUS (1-based data row). Repeatable.
    #[arg(long = "override", value_name = "ROW=STATUS")]
    pub overrides: Vec<String>,
}

#[derive(Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub state: StateArgs,

    /// Page to show (1-based).
    #[arg(long = "page", default_value_t = 1)]
    pub page: usize,

    /// Rows per page (default: 10, or the settings file value).
    #[arg(long = "page-size")]
    pub page_size: Option<usize>,

    /// Show a hidden column. Repeatable.
    #[arg(long = "show", value_name = "COLUMN")]
    pub show: Vec<String>,

    /// Hide a column (Candidate, Score and Status always stay). Repeatable.
    #[arg(long = "hide", value_name = "COLUMN")]
    pub hide: Vec<String>,

    /// Group candidates into status lanes instead of a table.
    #[arg(long = "board")]
    pub board: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct DetailArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// 1-based data row of the candidate.
    #[arg(value_name = "ROW")]
    pub row: usize,

    #[command(flatten)]
    pub state: StateArgs,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file; the format follows the extension (.csv or .tsv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub state: StateArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
