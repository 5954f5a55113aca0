//! Error types for the introspect crate.

use thiserror::Error;

/// Loading/export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Result file not found: {0}")]
    FileNotFound(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("XZ/LZMA decompression error: {0}")]
    Decompression(String),

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// The flattened sequence breaks the depth invariant.
    #[error("Invalid input at node {index}: {reason}")]
    InvalidInput { index: usize, reason: String },

    /// The output sink rejected a write.
    #[error("Write failure: {0}")]
    Write(#[from] std::io::Error),
}

impl ExportError {
    /// Create an InvalidInput error.
    pub fn invalid_input(index: usize, reason: impl Into<String>) -> Self {
        ExportError::InvalidInput {
            index,
            reason: reason.into(),
        }
    }
}

pub type ExportResult<T> = Result<T, ExportError>;
