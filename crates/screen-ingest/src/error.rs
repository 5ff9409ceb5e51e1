//! Error types for spreadsheet ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, decoding or encoding tabular data.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read an input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not well-formed delimited text.
    #[error("failed to parse CSV: {0}")]
    CsvParse(#[source] csv::Error),

    /// Failed to serialize rows.
    #[error("failed to write CSV: {message}")]
    CsvWrite { message: String },

    /// No codec handles this file extension.
    #[error("unsupported file format: {path} (expected .csv or .tsv)")]
    UnsupportedFormat { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, IngestError>;
