//! Dataset loading: read a file, decode it and assign record ids.

use std::path::Path;

use tracing::info;

use screen_model::{FieldMap, Record, RecordId};

use crate::codec::codec_for_path;
use crate::error::{IngestError, Result};

/// Decoded rows together with the name of their source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// File name (or any stable label) mixed into record ids.
    pub source: String,
    pub rows: Vec<FieldMap>,
}

impl Dataset {
    pub fn new(source: impl Into<String>, rows: Vec<FieldMap>) -> Self {
        Self {
            source: source.into(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Options for assigning record ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions<'a> {
    pub source_id: &'a str,
    /// Per-session load counter.
    pub generation: u64,
}

/// Turns decoded rows into records with ids and 1-based row numbers.
pub fn load_records(rows: Vec<FieldMap>, options: LoadOptions<'_>) -> Vec<Record> {
    rows.into_iter()
        .enumerate()
        .map(|(idx, fields)| {
            let row_number = idx + 1;
            let id = RecordId::derive(options.source_id, options.generation, row_number);
            Record::new(id, row_number, fields)
        })
        .collect()
}

/// Reads and decodes a file with the codec matching its extension.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let codec = codec_for_path(path)?;
    let bytes = std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = codec.decode(&bytes)?;
    let source = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    info!(path = %path.display(), codec = codec.name(), rows = rows.len(), "read dataset");
    Ok(Dataset::new(source, rows))
}

/// Reads a file straight into records for the given load generation.
pub fn read_records(path: &Path, generation: u64) -> Result<Vec<Record>> {
    let dataset = read_dataset(path)?;
    Ok(load_records(
        dataset.rows,
        LoadOptions {
            source_id: &dataset.source,
            generation,
        },
    ))
}

/// Writes encoded bytes to `path`.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}
