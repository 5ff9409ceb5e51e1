use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("weight {0} is out of range (expected 0-10)")]
    WeightOutOfRange(u32),
    #[error("unknown status: {0}")]
    UnknownStatus(String),
    #[error("unknown scoring dimension: {0}")]
    UnknownDimension(String),
    #[error("unknown domain selector: {0} (expected all, true or false)")]
    UnknownDomainFilter(String),
    #[error("invalid record id: {0}")]
    InvalidRecordId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
