//! Dataset error types.
//!
//! Typed so callers can tell a missing file from a malformed record
//! without string matching; every variant carries enough context to point
//! at the offending line.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a line-delimited JSON dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line did not decode to a problem record.
    #[error("line {line}: invalid problem record")]
    Record {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A problem record did not carry exactly five options.
    #[error("line {line}: expected 5 options, found {found}")]
    OptionCount { line: usize, found: usize },
}

impl DatasetError {
    /// The 1-based dataset line this error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            DatasetError::Io { .. } => None,
            DatasetError::Record { line, .. } | DatasetError::OptionCount { line, .. } => {
                Some(*line)
            }
        }
    }
}
