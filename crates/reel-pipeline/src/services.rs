//! Service seams for the pipeline's external collaborators.
//!
//! The fetch and render services are black boxes to the orchestrator;
//! they are modelled as traits so tests and alternative backends can be
//! dropped in.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::NaiveDate;

use reel_media::{MediaResult, ReelCompiler};
use reel_models::{TextFragment, TransformedText};

/// Produces candidate text fragments in discovery order.
#[async_trait]
pub trait FragmentSource: Send + Sync {
    /// Fetch the current set of fragments. An empty result means no
    /// content is available right now.
    async fn fetch_fragments(&self) -> anyhow::Result<Vec<TextFragment>>;
}

/// Turns an excerpt into a raster image on disk.
#[async_trait]
pub trait ImageRenderer: Send + Sync {
    /// Render the excerpt and return the image path. A failure or a
    /// degraded placeholder are treated alike by the orchestrator: no
    /// image.
    async fn render(&self, excerpt: &TransformedText) -> anyhow::Result<PathBuf>;
}

/// Compiles ordered images into one dated video file.
#[async_trait]
pub trait VideoCompiler: Send + Sync {
    async fn compile(&self, images: &[PathBuf], date: NaiveDate) -> MediaResult<PathBuf>;
}

#[async_trait]
impl VideoCompiler for ReelCompiler {
    async fn compile(&self, images: &[PathBuf], date: NaiveDate) -> MediaResult<PathBuf> {
        ReelCompiler::compile(self, images, date).await
    }
}
