//! Codec selection.

use std::path::Path;

use screen_model::FieldMap;

use crate::csv_codec::CsvCodec;
use crate::error::{IngestError, Result};

/// Converts between raw bytes and header-keyed rows.
pub trait TabularCodec {
    /// Short format name used in logs.
    fn name(&self) -> &'static str;

    /// Decodes rows. The first row's headers define the schema; cells missing
    /// from a row read as empty.
    fn decode(&self, bytes: &[u8]) -> Result<Vec<FieldMap>>;

    /// Encodes rows under the first row's headers.
    fn encode(&self, rows: &[FieldMap], sheet_name: &str) -> Result<Vec<u8>>;
}

/// Picks a codec from the file extension.
pub fn codec_for_path(path: &Path) -> Result<Box<dyn TabularCodec>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("csv") => Ok(Box::new(CsvCodec::default())),
        Some("tsv") => Ok(Box::new(CsvCodec::tab_delimited())),
        _ => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
