//! Stable column sort.

use std::cmp::Ordering;

use screen_model::{ColumnDefinition, EXPERIENCE_COLUMN, SCORE_COLUMN, SortState};
use screen_transform::DerivedRow;
use tracing::debug;

/// Orders rows by the active sort column.
///
/// The experience column sorts numerically, the score column by composite
/// score and any other sortable, resolved column by case-insensitive text.
/// With no active, known or sortable column the order is left as is.
pub fn apply_sort<'a>(
    mut rows: Vec<DerivedRow<'a>>,
    sort: &SortState,
    columns: &[ColumnDefinition],
) -> Vec<DerivedRow<'a>> {
    let Some(column_id) = sort.column.as_deref() else {
        return rows;
    };
    let Some(column) = columns.iter().find(|c| c.id == column_id) else {
        debug!(column = column_id, "sort column not in catalog");
        return rows;
    };
    let direction = sort.direction;
    let header = column.header.as_deref();

    if column.id == EXPERIENCE_COLUMN {
        rows.sort_by(|a, b| {
            let ordering = a
                .record
                .number(header)
                .partial_cmp(&b.record.number(header))
                .unwrap_or(Ordering::Equal);
            direction.apply(ordering)
        });
    } else if column.id == SCORE_COLUMN {
        rows.sort_by(|a, b| direction.apply(a.composite_score.cmp(&b.composite_score)));
    } else if column.sortable && header.is_some() {
        rows.sort_by(|a, b| direction.apply(compare_text(a, b, header)));
    }
    rows
}

fn compare_text(a: &DerivedRow<'_>, b: &DerivedRow<'_>, header: Option<&str>) -> Ordering {
    let left = a.record.text(header).to_lowercase();
    let right = b.record.text(header).to_lowercase();
    left.cmp(&right)
}
