//! The daily pipeline orchestrator.
//!
//! Two cycles share the daily post batch: the post cycle appends, the
//! compile cycle reads and clears. Both go through a single lock, and
//! the compile cycle holds it across the encode, so neither can observe
//! the other mid-mutation.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use reel_media::prune_older_than;
use reel_models::DailyPost;
use reel_text::{select_fragment, TextTransformer};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::services::{FragmentSource, ImageRenderer, VideoCompiler};

/// Sequences fragment selection, transformation, rendering, and daily
/// compilation over a shared post batch.
pub struct Orchestrator {
    source: Arc<dyn FragmentSource>,
    renderer: Arc<dyn ImageRenderer>,
    compiler: Arc<dyn VideoCompiler>,
    transformer: Mutex<TextTransformer>,
    batch: Mutex<Vec<DailyPost>>,
    config: PipelineConfig,
}

impl Orchestrator {
    /// Create an orchestrator over the given collaborators.
    pub fn new(
        source: Arc<dyn FragmentSource>,
        renderer: Arc<dyn ImageRenderer>,
        compiler: Arc<dyn VideoCompiler>,
        transformer: TextTransformer,
        config: PipelineConfig,
    ) -> Self {
        Self {
            source,
            renderer,
            compiler,
            transformer: Mutex::new(transformer),
            batch: Mutex::new(Vec::new()),
            config,
        }
    }

    /// Number of posts currently in the daily batch.
    pub async fn batch_len(&self) -> usize {
        self.batch.lock().await.len()
    }

    /// Image paths currently in the daily batch, in batch order.
    pub async fn batch_images(&self) -> Vec<PathBuf> {
        self.batch
            .lock()
            .await
            .iter()
            .map(|post| post.image_path.clone())
            .collect()
    }

    /// Post cycle: fetch -> select -> transform -> render -> append.
    ///
    /// A failure at any stage leaves the batch exactly as it was; no
    /// partial entries are ever appended.
    pub async fn create_post(&self) -> PipelineResult<()> {
        info!("starting post creation");

        let fragments = self
            .source
            .fetch_fragments()
            .await
            .map_err(|e| PipelineError::fetch(e.to_string()))?;
        if fragments.is_empty() {
            warn!("no fragments available");
            return Err(PipelineError::NoFragments);
        }

        let tale = select_fragment(&fragments).ok_or(PipelineError::NoFragments)?;
        info!(source = %tale.source, chars = tale.len(), "selected fragment");

        let excerpt = self.transformer.lock().await.process_tale(&tale.content)?;

        let image_path = self
            .renderer
            .render(&excerpt)
            .await
            .map_err(|e| PipelineError::render(e.to_string()))?;

        let mut batch = self.batch.lock().await;
        batch.push(DailyPost::new(excerpt, image_path));
        info!(batch_len = batch.len(), "post created");
        Ok(())
    }

    /// Compile cycle: consume the entire batch into one dated reel.
    ///
    /// The batch lock is held across the compile, so a successful
    /// compile clears exactly the posts it consumed; a failed compile
    /// leaves every entry intact for retry.
    pub async fn compile_daily(&self, date: NaiveDate) -> PipelineResult<PathBuf> {
        info!(%date, "starting daily compilation");

        let mut batch = self.batch.lock().await;
        if batch.is_empty() {
            warn!("daily batch is empty, nothing to compile");
            return Err(PipelineError::NoImages);
        }

        let images: Vec<PathBuf> = batch.iter().map(|post| post.image_path.clone()).collect();

        let video_path = self.compiler.compile(&images, date).await?;

        batch.clear();
        drop(batch);

        info!(video = %video_path.display(), "daily reel compiled, batch cleared");
        self.retention_sweep().await;

        Ok(video_path)
    }

    /// Housekeeping after a successful compile: prune expired staged
    /// images and old reels. Sweep failures are logged, never fatal.
    async fn retention_sweep(&self) {
        let days = self.config.retention_days;
        if let Err(e) = prune_older_than(&self.config.image_dir, "png", days).await {
            error!(error = %e, "image staging sweep failed");
        }
        if let Err(e) = prune_older_than(&self.config.output_dir, "mp4", days).await {
            error!(error = %e, "reel output sweep failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use reel_media::{MediaError, MediaResult};
    use reel_models::{TextFragment, TransformedText};

    struct StaticSource(Vec<TextFragment>);

    #[async_trait]
    impl FragmentSource for StaticSource {
        async fn fetch_fragments(&self) -> anyhow::Result<Vec<TextFragment>> {
            Ok(self.0.clone())
        }
    }

    struct CountingRenderer {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingRenderer {
        fn ok() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl ImageRenderer for CountingRenderer {
        async fn render(&self, _excerpt: &TransformedText) -> anyhow::Result<PathBuf> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("render backend down");
            }
            Ok(PathBuf::from(format!("/tmp/img_{}.png", n)))
        }
    }

    struct FakeCompiler {
        fail: bool,
        calls: AtomicUsize,
    }

    impl FakeCompiler {
        fn ok() -> Self {
            Self {
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl VideoCompiler for FakeCompiler {
        async fn compile(&self, images: &[PathBuf], date: NaiveDate) -> MediaResult<PathBuf> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(MediaError::render_error("encoder exploded"));
            }
            assert!(!images.is_empty());
            Ok(PathBuf::from(format!(
                "/tmp/daily_reel_{}.mp4",
                date.format("%Y%m%d")
            )))
        }
    }

    fn long_tale() -> TextFragment {
        TextFragment::new(
            "A sufficiently long and dramatic paragraph about a notorious, \
             scandalous controversy that runs well past one hundred characters \
             in length.",
            "test",
        )
    }

    fn orchestrator(
        source: StaticSource,
        renderer: CountingRenderer,
        compiler: FakeCompiler,
    ) -> Orchestrator {
        Orchestrator::new(
            Arc::new(source),
            Arc::new(renderer),
            Arc::new(compiler),
            TextTransformer::from_seed(1),
            PipelineConfig::default(),
        )
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    #[tokio::test]
    async fn test_post_cycle_appends_on_success() {
        let orch = orchestrator(
            StaticSource(vec![long_tale()]),
            CountingRenderer::ok(),
            FakeCompiler::ok(),
        );
        orch.create_post().await.unwrap();
        orch.create_post().await.unwrap();
        assert_eq!(orch.batch_len().await, 2);
    }

    #[tokio::test]
    async fn test_post_cycle_failure_leaves_batch_unchanged() {
        let orch = orchestrator(
            StaticSource(vec![long_tale()]),
            CountingRenderer::failing(),
            FakeCompiler::ok(),
        );
        let result = orch.create_post().await;
        assert!(matches!(result, Err(PipelineError::Render(_))));
        assert_eq!(orch.batch_len().await, 0);
    }

    #[tokio::test]
    async fn test_no_fragments_is_not_fatal() {
        let orch = orchestrator(
            StaticSource(Vec::new()),
            CountingRenderer::ok(),
            FakeCompiler::ok(),
        );
        assert!(matches!(
            orch.create_post().await,
            Err(PipelineError::NoFragments)
        ));
        assert_eq!(orch.batch_len().await, 0);
    }

    #[tokio::test]
    async fn test_compile_with_empty_batch_fails_with_no_images() {
        let compiler = FakeCompiler::ok();
        let orch = orchestrator(
            StaticSource(vec![long_tale()]),
            CountingRenderer::ok(),
            compiler,
        );
        let result = orch.compile_daily(date()).await;
        assert!(matches!(result, Err(PipelineError::NoImages)));
    }

    #[tokio::test]
    async fn test_successful_compile_clears_batch() {
        let orch = orchestrator(
            StaticSource(vec![long_tale()]),
            CountingRenderer::ok(),
            FakeCompiler::ok(),
        );
        orch.create_post().await.unwrap();
        orch.create_post().await.unwrap();

        let video = orch.compile_daily(date()).await.unwrap();
        assert!(video.to_string_lossy().contains("20260823"));
        assert_eq!(orch.batch_len().await, 0);
    }

    #[tokio::test]
    async fn test_failed_compile_leaves_batch_intact() {
        let orch = orchestrator(
            StaticSource(vec![long_tale()]),
            CountingRenderer::ok(),
            FakeCompiler::failing(),
        );
        orch.create_post().await.unwrap();
        orch.create_post().await.unwrap();
        let before = orch.batch_images().await;

        let result = orch.compile_daily(date()).await;
        assert!(result.is_err());

        let after = orch.batch_images().await;
        assert_eq!(before, after, "failed compile must not touch the batch");

        // A retry can reuse the same images.
        assert_eq!(orch.batch_len().await, 2);
    }

    #[tokio::test]
    async fn test_compile_consumes_images_in_batch_order() {
        struct OrderCheckingCompiler;

        #[async_trait]
        impl VideoCompiler for OrderCheckingCompiler {
            async fn compile(&self, images: &[PathBuf], _date: NaiveDate) -> MediaResult<PathBuf> {
                let names: Vec<String> = images
                    .iter()
                    .map(|p| p.to_string_lossy().to_string())
                    .collect();
                assert_eq!(names, vec!["/tmp/img_0.png", "/tmp/img_1.png", "/tmp/img_2.png"]);
                Ok(PathBuf::from("/tmp/out.mp4"))
            }
        }

        let orch = Orchestrator::new(
            Arc::new(StaticSource(vec![long_tale()])),
            Arc::new(CountingRenderer::ok()),
            Arc::new(OrderCheckingCompiler),
            TextTransformer::from_seed(1),
            PipelineConfig::default(),
        );
        for _ in 0..3 {
            orch.create_post().await.unwrap();
        }
        orch.compile_daily(date()).await.unwrap();
    }
}
