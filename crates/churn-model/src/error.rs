use thiserror::Error;

/// Failure classes of the preparation pipeline.
///
/// Nothing is caught or retried; every variant propagates to the caller and
/// terminates the run.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing required column `{0}`")]
    MissingColumn(String),
    #[error("column `{column}` has non-numeric value `{value}`")]
    NonNumeric { column: String, value: String },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, PrepError>;
