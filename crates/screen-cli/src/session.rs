//! Builds a screening session from command-line state flags.
//!
//! Flags are replayed as [`Command`]s in the same order a user would click
//! through the viewer: load, weights, overrides, sort, filters, paging.

use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, trace};

use screen_core::{Command, FilterChange, PageChange, Screener, ViewMode};
use screen_ingest::read_dataset;
use screen_model::{Dimension, SortDirection, Status, find_column};

use crate::cli::StateArgs;
use crate::config::Settings;
use crate::logging::redact_value;

/// Table options only `view` uses.
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    pub page: usize,
    pub page_size: Option<usize>,
    pub show: Vec<String>,
    pub hide: Vec<String>,
    pub board: bool,
}

/// Parses `edu=7`.
pub fn parse_weight(raw: &str) -> Result<(Dimension, u32)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected DIMENSION=VALUE, got '{raw}'"))?;
    let dimension: Dimension = name.parse()?;
    let value: u32 = value
        .trim()
        .parse()
        .with_context(|| format!("invalid weight value in '{raw}'"))?;
    Ok((dimension, value))
}

/// Parses `3=shortlisted`.
pub fn parse_override(raw: &str) -> Result<(usize, Status)> {
    let (row, status) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected ROW=STATUS, got '{raw}'"))?;
    let row: usize = row
        .trim()
        .parse()
        .with_context(|| format!("invalid row number in '{raw}'"))?;
    Ok((row, status.parse()?))
}

/// Loads `input` and applies the state flags.
pub fn open_session(
    input: &Path,
    state: &StateArgs,
    settings: &Settings,
    view: Option<&ViewOptions>,
) -> Result<Screener> {
    let dataset =
        read_dataset(input).with_context(|| format!("load input: {}", input.display()))?;
    if dataset.is_empty() {
        bail!("no candidate rows in {}", input.display());
    }
    let mut screener = Screener::with_weights(settings.weights.to_weights()?);
    screener.apply(Command::DatasetLoaded(dataset));
    apply_state(&mut screener, state)?;
    if let Some(view) = view {
        apply_view(&mut screener, view, settings)?;
    }
    info!(
        records = screener.records().len(),
        generation = screener.generation(),
        "session ready"
    );
    Ok(screener)
}

/// Replays weight, override, sort and filter flags.
pub fn apply_state(screener: &mut Screener, state: &StateArgs) -> Result<()> {
    for raw in &state.weights {
        let (dimension, value) = parse_weight(raw)?;
        screener.apply(Command::WeightChanged { dimension, value });
    }

    for raw in &state.overrides {
        let (row, status) = parse_override(raw)?;
        let record = screener
            .record_id_for_row(row)
            .ok_or_else(|| anyhow!("no candidate at row {row}"))?;
        if let Some(found) = screener.records().iter().find(|r| r.id == record) {
            let name = found.text(screener.schema().mapping.candidate.as_deref());
            trace!(row, candidate = redact_value(&name), %status, "override");
        }
        screener.apply(Command::OverrideSet { record, status });
    }

    let last = state.sort.len().saturating_sub(1);
    for (idx, column) in state.sort.iter().enumerate() {
        let definition = find_column(&screener.schema().columns, column)
            .ok_or_else(|| anyhow!("unknown column '{column}'"))?;
        if !definition.sortable {
            bail!("column '{}' is not sortable", definition.id);
        }
        let direction = (idx == last && state.descending).then_some(SortDirection::Descending);
        let column = definition.id.clone();
        screener.apply(Command::SortChanged { column, direction });
    }

    if let Some(search) = &state.search {
        screener.apply(Command::FilterChanged(FilterChange::Search(search.clone())));
    }
    screener.apply(Command::FilterChanged(FilterChange::MinExperience(
        state.min_experience,
    )));
    screener.apply(Command::FilterChanged(FilterChange::Domain(state.domain)));
    screener.apply(Command::FilterChanged(FilterChange::Status(state.status)));
    Ok(())
}

fn apply_view(screener: &mut Screener, view: &ViewOptions, settings: &Settings) -> Result<()> {
    let show = settings.view.show.iter().chain(&view.show);
    for column in show {
        toggle(screener, column, true)?;
    }
    let hide = settings.view.hide.iter().chain(&view.hide);
    for column in hide {
        toggle(screener, column, false)?;
    }
    if let Some(size) = view.page_size.or(settings.view.page_size) {
        screener.apply(Command::PageChanged(PageChange::PageSize(size)));
    }
    screener.apply(Command::PageChanged(PageChange::GoTo(view.page)));
    if view.board {
        screener.apply(Command::ViewModeChanged(ViewMode::Board));
    }
    Ok(())
}

fn toggle(screener: &mut Screener, column: &str, visible: bool) -> Result<()> {
    let id = find_column(&screener.schema().columns, column)
        .map(|definition| definition.id.clone())
        .ok_or_else(|| anyhow!("unknown column '{column}'"))?;
    screener.apply(Command::ColumnToggled { column: id, visible });
    Ok(())
}
