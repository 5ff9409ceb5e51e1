//! Commands accepted by [`Screener::update`](crate::Screener::update).
//!
//! Every user interaction is one of these variants. A command mutates the
//! smallest piece of input state it concerns; everything derived is rebuilt
//! afterwards.

use serde::{Deserialize, Serialize};

use screen_ingest::Dataset;
use screen_model::{Dimension, DomainFilter, RecordId, SortDirection, Status, StatusFilter};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // =========================================================================
    // Data
    // =========================================================================
    /// Replace the dataset. Empty datasets are ignored.
    DatasetLoaded(Dataset),

    // =========================================================================
    // Scoring
    // =========================================================================
    /// Set one dimension's weight; values above 10 saturate.
    WeightChanged { dimension: Dimension, value: u32 },

    /// Force a status for one record.
    OverrideSet { record: RecordId, status: Status },

    // =========================================================================
    // Table controls
    // =========================================================================
    FilterChanged(FilterChange),

    FiltersCleared,

    /// Sort by a column; no direction behaves like a header click.
    SortChanged {
        column: String,
        direction: Option<SortDirection>,
    },

    PageChanged(PageChange),

    ColumnToggled { column: String, visible: bool },

    ViewModeChanged(ViewMode),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    Search(String),
    MinExperience(Option<f64>),
    Domain(DomainFilter),
    Status(StatusFilter),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
    GoTo(usize),
    PageSize(usize),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Table,
    /// Kanban lanes per status. Weights are locked in this mode.
    Board,
}
