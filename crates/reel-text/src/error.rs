//! Error types for text processing.

use thiserror::Error;

/// Result type for text operations.
pub type TextResult<T> = Result<T, TextError>;

/// Errors that can occur during text processing.
#[derive(Debug, Error)]
pub enum TextError {
    #[error("empty input text")]
    EmptyInput,

    #[error("text processing failed: {0}")]
    ProcessingFailed(String),
}

impl TextError {
    /// Create a processing failure error.
    pub fn processing_failed(message: impl Into<String>) -> Self {
        Self::ProcessingFailed(message.into())
    }
}
