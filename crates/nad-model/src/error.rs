use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NadError {
    #[error("external source `{source_name}` unavailable: {message}")]
    ExternalSourceUnavailable {
        source_name: String,
        message: String,
    },
    #[error("duplicate code `{code}` in {table} table")]
    DuplicateDomainCode { table: String, code: String },
    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

impl NadError {
    pub fn unavailable(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::ExternalSourceUnavailable {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NadError>;
