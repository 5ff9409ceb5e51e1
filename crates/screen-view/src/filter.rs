//! Row filtering.

use screen_model::{FieldMapping, FilterState, Record};
use screen_transform::DerivedRow;
use tracing::trace;

/// Keeps the rows that satisfy every active filter, in input order.
pub fn apply_filters<'a>(
    rows: &[DerivedRow<'a>],
    filter: &FilterState,
    mapping: &FieldMapping,
) -> Vec<DerivedRow<'a>> {
    if filter.is_default() {
        return rows.to_vec();
    }
    let kept: Vec<DerivedRow<'a>> = rows
        .iter()
        .filter(|row| matches_filter(row, filter, mapping))
        .copied()
        .collect();
    trace!(total = rows.len(), kept = kept.len(), "filters applied");
    kept
}

pub fn matches_filter(row: &DerivedRow<'_>, filter: &FilterState, mapping: &FieldMapping) -> bool {
    matches_search(row, filter.search())
        && filter
            .min_experience
            .is_none_or(|min| experience_years(row.record, mapping) >= min)
        && filter.domain.accepts(domain_matched(row.record, mapping))
        && filter.status.accepts(row.status)
}

/// Case-insensitive substring search over every field plus the derived
/// score and status. The record id is not searchable.
fn matches_search(row: &DerivedRow<'_>, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    row.record
        .fields
        .iter()
        .any(|(_, value)| value.as_display().to_lowercase().contains(needle))
        || row.composite_score.to_string().contains(needle)
        || row.status.as_str().to_lowercase().contains(needle)
}

/// Years of experience; unbound or unparsable reads as 0.
pub fn experience_years(record: &Record, mapping: &FieldMapping) -> f64 {
    record.number(mapping.experience.as_deref())
}

pub fn domain_matched(record: &Record, mapping: &FieldMapping) -> bool {
    record
        .value(mapping.domain_match.as_deref())
        .is_some_and(|value| value.as_flag())
}
