//! Pipeline error types.

use thiserror::Error;

use reel_media::MediaError;
use reel_text::TextError;

pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no fragments fetched")]
    NoFragments,

    #[error("no images in the daily batch")]
    NoImages,

    #[error("fragment fetch failed: {0}")]
    Fetch(String),

    #[error("image render failed: {0}")]
    Render(String),

    #[error("text error: {0}")]
    Text(#[from] TextError),

    #[error("media error: {0}")]
    Media(#[from] MediaError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
