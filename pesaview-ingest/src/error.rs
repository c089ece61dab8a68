use thiserror::Error;

/// Failures that stop a load before any record reaches the engine.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("source unavailable: {source_desc}: {reason}")]
    SourceUnavailable { source_desc: String, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV header is missing required column `{0}`")]
    MissingColumn(String),

    #[error("invalid date pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;
