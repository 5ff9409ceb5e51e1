//! The view model handed to renderers.

use screen_model::{ColumnDefinition, RecordId, Schema, StatusCounts, Weights};
use screen_transform::DerivedRow;
use screen_view::{Board, CandidateDetail, PageInfo, group_board};

use crate::command::ViewMode;

/// Everything a renderer needs; no further business logic is required.
#[derive(Debug, Clone)]
pub struct ScreeningView<'a> {
    pub(crate) schema: &'a Schema,
    pub weights: Weights,
    pub mode: ViewMode,
    /// Visible columns in catalog order.
    pub columns: Vec<&'a ColumnDefinition>,
    /// Status tallies over the whole dataset, filters ignored.
    pub counts: StatusCounts,
    pub page: PageInfo,
    pub page_rows: Vec<DerivedRow<'a>>,
    pub(crate) all_rows: Vec<DerivedRow<'a>>,
    pub(crate) filtered: Vec<DerivedRow<'a>>,
}

impl<'a> ScreeningView<'a> {
    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Rows passing the filters, sorted.
    pub fn visible_rows(&self) -> &[DerivedRow<'a>] {
        &self.filtered
    }

    pub fn visible_count(&self) -> usize {
        self.filtered.len()
    }

    /// Weight shares in percent, summing to 100 (or all 0).
    pub fn weight_percentages(&self) -> [u32; 4] {
        self.weights.percentages()
    }

    /// Kanban lanes over the filtered rows.
    pub fn board(&self) -> Board<'a> {
        group_board(&self.filtered)
    }

    /// Detail for any loaded record, whether or not it is visible.
    pub fn detail(&self, id: &RecordId) -> Option<CandidateDetail> {
        self.all_rows
            .iter()
            .find(|row| row.record.id == *id)
            .map(|row| CandidateDetail::from_row(row, self.schema))
    }

    pub fn row(&self, id: &RecordId) -> Option<&DerivedRow<'a>> {
        self.all_rows.iter().find(|row| row.record.id == *id)
    }
}
