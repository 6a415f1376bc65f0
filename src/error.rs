// ============================================================
// Pipeline Errors
// ============================================================
// Failure modes of the data pipeline itself. The application and
// CLI layers wrap these in anyhow with extra context; the pipeline
// stages return them directly so callers can match on the kind.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The corpus or vocabulary file could not be opened.
    #[error("cannot open '{}': {source}", path.display())]
    FileAccess {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line could not be read after the file was opened
    /// (for example it is not valid UTF-8).
    #[error("cannot read line {line} of '{}': {source}", path.display())]
    Read {
        path:   PathBuf,
        line:   usize,
        #[source]
        source: io::Error,
    },

    #[error("tokenization failed: {0}")]
    Tokenize(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An id, pad value or length does not fit a 32-bit tensor element.
    #[error("value {0} does not fit in an i32 tensor element")]
    OutOfTensorRange(i64),
}

impl PipelineError {
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess { path: path.into(), source }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
