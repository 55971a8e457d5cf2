use std::path::PathBuf;

use nad_model::NadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse CSV {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{path}: missing `{column}` column")]
    MissingColumn { path: PathBuf, column: String },
    #[error("{path}: row {row}: `{column}` is not a number: {value:?}")]
    InvalidNumber {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },
    #[error("remote location {0} is not supported; download it and pass the local path")]
    RemoteLocation(String),
    #[error("unsupported source format: {0}")]
    UnsupportedFormat(PathBuf),
}

impl From<IngestError> for NadError {
    fn from(err: IngestError) -> Self {
        NadError::Message(err.to_string())
    }
}
