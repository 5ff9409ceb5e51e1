//! Data model for the candidate screener.
//!
//! Records are immutable after load; everything else in this crate is either
//! static catalog data or small pieces of user-controlled state (weights,
//! overrides, filters, sort).

pub mod column;
pub mod error;
pub mod filter;
pub mod ids;
pub mod mapping;
pub mod numeric;
pub mod record;
pub mod scoring;
pub mod sort;
pub mod status;

pub use column::{
    CANDIDATE_COLUMN, ColumnDefinition, ColumnKind, EXPERIENCE_COLUMN, SCORE_COLUMN,
    STATUS_COLUMN, default_columns, find_column,
};
pub use error::{ModelError, Result};
pub use filter::{DomainFilter, FilterState, StatusFilter};
pub use ids::RecordId;
pub use mapping::{FieldMapping, Schema, ScoreColumns};
pub use numeric::{format_numeric, lenient_f64, parse_leading_f64};
pub use record::{CellValue, FieldMap, Record};
pub use scoring::{
    DEFAULT_WEIGHT, Dimension, MAX_WEIGHT, SCORING_PARAMS, ScoringParam, Weight, Weights,
};
pub use sort::{SortDirection, SortState};
pub use status::{
    REJECT_THRESHOLD, SHORTLIST_THRESHOLD, Status, StatusCounts, StatusOverrides,
};
