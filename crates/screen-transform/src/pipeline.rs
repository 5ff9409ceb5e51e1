//! Derivation pipeline: score every record and tally statuses.

use tracing::debug;

use screen_model::{Record, Schema, Status, StatusCounts, StatusOverrides, Weights};

use crate::scoring::{composite_score, derive_status};

/// A record with its derived score and status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedRow<'a> {
    pub record: &'a Record,
    pub composite_score: i64,
    pub status: Status,
}

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation<'a> {
    /// One row per record, in load order.
    pub rows: Vec<DerivedRow<'a>>,
    pub counts: StatusCounts,
}

/// Scores every record and applies overrides.
///
/// Pure: the same inputs always give the same output.
pub fn recompute<'a>(
    records: &'a [Record],
    schema: &Schema,
    weights: &Weights,
    overrides: &StatusOverrides,
) -> Derivation<'a> {
    let rows: Vec<DerivedRow<'a>> = records
        .iter()
        .map(|record| {
            let composite_score = composite_score(record, &schema.score_columns, weights);
            DerivedRow {
                record,
                composite_score,
                status: derive_status(composite_score, overrides.get(&record.id)),
            }
        })
        .collect();
    let counts: StatusCounts = rows.iter().map(|row| row.status).collect();
    debug!(
        rows = rows.len(),
        overrides = overrides.len(),
        shortlisted = counts.shortlisted,
        borderline = counts.borderline,
        rejected = counts.rejected,
        "recomputed scores"
    );
    Derivation { rows, counts }
}
