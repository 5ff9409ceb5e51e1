use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use screen_ingest::{codec_for_path, write_output};
use screen_transform::score_breakdown;
use screen_view::CandidateDetail;

use crate::cli::{DetailArgs, ExportArgs, InputArgs, OutputFormatArg, StateArgs, ViewArgs};
use crate::config::Settings;
use crate::session::{ViewOptions, open_session};
use crate::summary::{print_columns, print_detail, print_view, view_report};

/// Settings from `--config`, or `screener.toml` in the working directory.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let cwd = std::env::current_dir().context("resolve working directory")?;
    Settings::resolve(explicit, &cwd)
}

pub fn run_view(args: &ViewArgs, settings: &Settings) -> Result<()> {
    let span = info_span!("view", input = %args.input.input.display());
    let _guard = span.enter();
    let options = ViewOptions {
        page: args.page,
        page_size: args.page_size,
        show: args.show.clone(),
        hide: args.hide.clone(),
        board: args.board,
    };
    let screener = open_session(&args.input.input, &args.state, settings, Some(&options))?;
    let view = screener.view();
    match args.format {
        OutputFormatArg::Table => print_view(&view),
        OutputFormatArg::Json => {
            let report = view_report(&view);
            let json = serde_json::to_string_pretty(&report).context("serialize view")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_columns(args: &InputArgs, settings: &Settings) -> Result<()> {
    let screener = open_session(&args.input, &StateArgs::default(), settings, None)?;
    print_columns(screener.schema());
    Ok(())
}

pub fn run_detail(args: &DetailArgs, settings: &Settings) -> Result<()> {
    let screener = open_session(&args.input.input, &args.state, settings, None)?;
    let id = screener
        .record_id_for_row(args.row)
        .ok_or_else(|| anyhow!("no candidate at row {}", args.row))?;
    let view = screener.view();
    let row = view
        .row(&id)
        .ok_or_else(|| anyhow!("no candidate at row {}", args.row))?;
    let breakdown = score_breakdown(
        row.record,
        &screener.schema().score_columns,
        screener.weights(),
    );
    let detail = CandidateDetail::from_row(row, screener.schema());
    print_detail(&detail, &breakdown);
    Ok(())
}

/// Writes the scored rows and returns the path and row count.
pub fn run_export(args: &ExportArgs, settings: &Settings) -> Result<(PathBuf, usize)> {
    let span = info_span!("export", output = %args.output.display());
    let _guard = span.enter();
    let codec = codec_for_path(&args.output)?;
    let screener = open_session(&args.input.input, &args.state, settings, None)?;
    let bytes = screener.export(codec.as_ref())?;
    write_output(&args.output, &bytes)?;
    let rows = screener.records().len();
    info!(rows, codec = codec.name(), "export complete");
    Ok((args.output.clone(), rows))
}
