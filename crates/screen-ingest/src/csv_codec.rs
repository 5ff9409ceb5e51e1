use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use screen_model::{CellValue, FieldMap, format_numeric};

use crate::codec::TabularCodec;
use crate::error::{IngestError, Result};

/// Delimited-text codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvCodec {
    pub delimiter: u8,
    /// Store cells holding a canonical finite number as `Number`.
    pub infer_numbers: bool,
}

impl Default for CsvCodec {
    fn default() -> Self {
        Self {
            delimiter: b',',
            infer_numbers: true,
        }
    }
}

impl CsvCodec {
    pub fn tab_delimited() -> Self {
        Self {
            delimiter: b'\t',
            ..Self::default()
        }
    }

    fn to_cell(&self, raw: &str) -> CellValue {
        let value = normalize_cell(raw);
        if value.is_empty() {
            return CellValue::Empty;
        }
        // Only cells that read back unchanged become numbers, so `0712` stays text.
        if self.infer_numbers
            && let Ok(number) = value.parse::<f64>()
            && number.is_finite()
            && format_numeric(number) == value
        {
            return CellValue::Number(number);
        }
        CellValue::Text(value)
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn is_blank_line(record: &csv::StringRecord) -> bool {
    record.iter().all(|value| value.trim().is_empty())
}

impl TabularCodec for CsvCodec {
    fn name(&self) -> &'static str {
        if self.delimiter == b'\t' { "tsv" } else { "csv" }
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<FieldMap>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(bytes);

        let mut records = reader.records();
        let mut headers: Vec<String> = Vec::new();
        for record in records.by_ref() {
            let record = record.map_err(IngestError::CsvParse)?;
            if is_blank_line(&record) {
                continue;
            }
            headers = record.iter().map(normalize_header).collect();
            break;
        }

        let mut rows = Vec::new();
        for record in records {
            let record = record.map_err(IngestError::CsvParse)?;
            if is_blank_line(&record) {
                continue;
            }
            let mut row = FieldMap::new();
            for (idx, header) in headers.iter().enumerate() {
                let cell = record
                    .get(idx)
                    .map_or(CellValue::Empty, |raw| self.to_cell(raw));
                row.insert(header.as_str(), cell);
            }
            rows.push(row);
        }
        debug!(
            codec = self.name(),
            columns = headers.len(),
            rows = rows.len(),
            "decoded table"
        );
        Ok(rows)
    }

    fn encode(&self, rows: &[FieldMap], sheet_name: &str) -> Result<Vec<u8>> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());
        let headers: Vec<&str> = rows
            .first()
            .map(|row| row.headers().collect())
            .unwrap_or_default();
        if !headers.is_empty() {
            writer
                .write_record(&headers)
                .map_err(|e| IngestError::CsvWrite {
                    message: e.to_string(),
                })?;
        }
        for row in rows {
            let cells: Vec<String> = headers
                .iter()
                .map(|header| {
                    row.get(header)
                        .map(|value| value.as_display().into_owned())
                        .unwrap_or_default()
                })
                .collect();
            writer
                .write_record(&cells)
                .map_err(|e| IngestError::CsvWrite {
                    message: e.to_string(),
                })?;
        }
        // Delimited text has no sheets.
        debug!(codec = self.name(), sheet = sheet_name, rows = rows.len(), "encoded table");
        writer.into_inner().map_err(|e| IngestError::CsvWrite {
            message: e.to_string(),
        })
    }
}
