//! Export of the processed dataset.

use tracing::info;

use screen_ingest::TabularCodec;
use screen_model::{CellValue, FieldMap};

use crate::error::{CoreError, Result};
use crate::screener::Screener;

pub const EXPORT_SHEET_NAME: &str = "Screening Results";
pub const SCORE_EXPORT_HEADER: &str = "Composite Score";
pub const STATUS_EXPORT_HEADER: &str = "Screening Status";

impl Screener {
    /// Every record in the current sort order with its score and status
    /// appended. Filters do not apply.
    ///
    /// Source columns are never overwritten: a derived header that is
    /// already taken gets a ` (2)`, ` (3)`, ... suffix.
    pub fn export_rows(&self) -> Vec<FieldMap> {
        let (score_header, status_header) = self.export_headers();
        self.sorted_rows()
            .into_iter()
            .map(|row| {
                let mut fields = row.record.fields.clone();
                fields.insert(
                    score_header.as_str(),
                    CellValue::Number(row.composite_score as f64),
                );
                fields.insert(
                    status_header.as_str(),
                    CellValue::Text(row.status.as_str().to_string()),
                );
                fields
            })
            .collect()
    }

    /// Headers the derived score and status columns are written under.
    pub fn export_headers(&self) -> (String, String) {
        let taken: Vec<&str> = self
            .records()
            .first()
            .map(|record| record.fields.headers().collect())
            .unwrap_or_default();
        let score = free_header(&taken, SCORE_EXPORT_HEADER);
        let mut taken = taken;
        taken.push(&score);
        let status = free_header(&taken, STATUS_EXPORT_HEADER);
        (score, status)
    }

    /// Encodes the export with `codec`.
    pub fn export(&self, codec: &dyn TabularCodec) -> Result<Vec<u8>> {
        if self.records().is_empty() {
            return Err(CoreError::NothingToExport);
        }
        let rows = self.export_rows();
        let bytes = codec.encode(&rows, EXPORT_SHEET_NAME)?;
        info!(
            codec = codec.name(),
            rows = rows.len(),
            bytes = bytes.len(),
            "exported results"
        );
        Ok(bytes)
    }
}

fn free_header(taken: &[&str], base: &str) -> String {
    if !taken.contains(&base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{base} ({n})"))
        .find(|candidate| !taken.contains(&candidate.as_str()))
        .unwrap_or_else(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_header_suffixes_on_collision() {
        assert_eq!(free_header(&["Name"], "Composite Score"), "Composite Score");
        assert_eq!(
            free_header(&["Composite Score", "Composite Score (2)"], "Composite Score"),
            "Composite Score (3)"
        );
    }
}
