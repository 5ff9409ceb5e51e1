//! Session state and the command reducer.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use screen_ingest::{LoadOptions, load_records};
use screen_map::infer_schema_opt;
use screen_model::{
    ColumnDefinition, FilterState, Record, RecordId, Schema, SortState, StatusOverrides, Weight,
    Weights,
};
use screen_transform::{DerivedRow, recompute};
use screen_view::{Pagination, apply_filters, apply_sort};

use crate::command::{Command, FilterChange, PageChange, ViewMode};
use crate::view::ScreeningView;

/// One screening session: a loaded dataset plus the user's controls.
///
/// Only inputs are stored. Scores, statuses and the visible page are rebuilt
/// from them whenever a view is requested.
#[derive(Debug, Clone, Default)]
pub struct Screener {
    source: String,
    generation: u64,
    records: Vec<Record>,
    schema: Schema,
    weights: Weights,
    overrides: StatusOverrides,
    filters: FilterState,
    sort: SortState,
    pagination: Pagination,
    visibility: BTreeMap<String, bool>,
    mode: ViewMode,
}

impl Screener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session with preset weights, for example from a config file.
    pub fn with_weights(weights: Weights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn overrides(&self) -> &StatusOverrides {
        &self.overrides
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of datasets loaded so far in this session.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Record id for a 1-based source row number.
    pub fn record_id_for_row(&self, row_number: usize) -> Option<RecordId> {
        self.records
            .iter()
            .find(|record| record.row_number == row_number)
            .map(|record| record.id)
    }

    /// Applies a command and returns the freshly derived view.
    pub fn update(&mut self, command: Command) -> ScreeningView<'_> {
        self.apply(command);
        self.view()
    }

    /// Applies a command without deriving a view.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::DatasetLoaded(dataset) => {
                if dataset.is_empty() {
                    warn!(source = %dataset.source, "ignoring empty dataset");
                    return;
                }
                self.generation += 1;
                let records = load_records(
                    dataset.rows,
                    LoadOptions {
                        source_id: &dataset.source,
                        generation: self.generation,
                    },
                );
                self.schema = infer_schema_opt(records.first().map(|record| &record.fields));
                self.records = records;
                self.source = dataset.source;
                self.overrides.clear();
                self.sort.clear();
                self.pagination.reset();
                info!(
                    source = %self.source,
                    generation = self.generation,
                    records = self.records.len(),
                    "dataset loaded"
                );
            }
            Command::WeightChanged { dimension, value } => {
                if self.mode == ViewMode::Board {
                    warn!(%dimension, "weights are locked on the board");
                    return;
                }
                let weight = Weight::saturating(value);
                self.weights.set(dimension, weight);
                debug!(%dimension, %weight, "weight changed");
            }
            Command::OverrideSet { record, status } => {
                if !self.records.iter().any(|r| r.id == record) {
                    warn!(%record, "ignoring override for unknown record");
                    return;
                }
                self.overrides.set(record, status);
                debug!(%record, %status, "status override set");
            }
            Command::FilterChanged(change) => {
                match change {
                    FilterChange::Search(text) => self.filters.set_search(&text),
                    FilterChange::MinExperience(min) => self.filters.min_experience = min,
                    FilterChange::Domain(domain) => self.filters.domain = domain,
                    FilterChange::Status(status) => self.filters.status = status,
                }
                self.pagination.reset();
            }
            Command::FiltersCleared => {
                self.filters = FilterState::default();
                self.pagination.reset();
            }
            Command::SortChanged { column, direction } => {
                self.sort.select(&column, direction);
                self.pagination.reset();
                debug!(column = %column, direction = ?self.sort.direction, "sort changed");
            }
            Command::PageChanged(PageChange::GoTo(page)) => self.pagination.go_to(page),
            Command::PageChanged(PageChange::PageSize(size)) => {
                self.pagination.set_page_size(size);
            }
            Command::ColumnToggled { column, visible } => {
                let Some(definition) = self.schema.columns.iter().find(|c| c.id == column) else {
                    warn!(column = %column, "ignoring toggle for unknown column");
                    return;
                };
                if definition.is_pinned() && !visible {
                    warn!(column = %column, "column cannot be hidden");
                    return;
                }
                self.visibility.insert(column, visible);
            }
            Command::ViewModeChanged(mode) => self.mode = mode,
        }
    }

    fn is_visible(&self, column: &ColumnDefinition) -> bool {
        column.is_pinned() || self.visibility.get(&column.id).copied().unwrap_or(column.show)
    }

    /// All records scored and in the current sort order, ignoring filters.
    pub fn sorted_rows(&self) -> Vec<DerivedRow<'_>> {
        let derivation = recompute(&self.records, &self.schema, &self.weights, &self.overrides);
        apply_sort(derivation.rows, &self.sort, &self.schema.columns)
    }

    /// Derives the current view: recompute, sort, filter, page.
    pub fn view(&self) -> ScreeningView<'_> {
        let derivation = recompute(&self.records, &self.schema, &self.weights, &self.overrides);
        let counts = derivation.counts;
        let sorted = apply_sort(derivation.rows, &self.sort, &self.schema.columns);
        let filtered = apply_filters(&sorted, &self.filters, &self.schema.mapping);
        let (page, page_rows) = self.pagination.slice(&filtered);
        let page_rows = page_rows.to_vec();
        let columns = self
            .schema
            .columns
            .iter()
            .filter(|column| self.is_visible(column))
            .collect();
        ScreeningView {
            schema: &self.schema,
            weights: self.weights,
            mode: self.mode,
            columns,
            counts,
            page,
            page_rows,
            all_rows: sorted,
            filtered,
        }
    }
}
