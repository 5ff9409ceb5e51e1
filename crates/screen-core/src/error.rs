use thiserror::Error;

use screen_ingest::IngestError;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Export was requested before any records were loaded.
    #[error("no data to export")]
    NothingToExport,

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
