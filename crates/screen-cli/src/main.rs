//! Candidate screener CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use screen_cli::cli::{Cli, Command};
use screen_cli::commands::{load_settings, run_columns, run_detail, run_export, run_view};
use screen_cli::logging::{LogConfig, init_logging};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli.config.as_deref())?;
    match &cli.command {
        Command::View(args) => run_view(args, &settings),
        Command::Columns(args) => run_columns(args, &settings),
        Command::Detail(args) => run_detail(args, &settings),
        Command::Export(args) => {
            let (path, rows) = run_export(args, &settings)?;
            println!("Exported {rows} candidates to {}", path.display());
            Ok(())
        }
    }
}

/// An explicit `--log-level` beats `-v/-q`; either one disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit = cli.verbosity.is_present() || cli.log_level.is_some();
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter: cli
            .log_level
            .map_or_else(|| cli.verbosity.tracing_level_filter(), LevelFilter::from),
        use_env_filter: !explicit,
        with_ansi,
        format: cli.log_format.into(),
        log_file: cli.log_file.clone(),
        log_data: cli.log_data,
        ..LogConfig::default()
    }
}
