//! Daily reel compilation.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tokio::fs;
use tracing::{info, warn};

use reel_models::{EncodingConfig, ReelSettings};

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::{MediaError, MediaResult};
use crate::graph::ReelGraph;

const CONCAT_OUT_LABEL: &str = "vout";

/// Compiles ordered still images into a single dated reel.
#[derive(Debug, Clone)]
pub struct ReelCompiler {
    out_dir: PathBuf,
    settings: ReelSettings,
    encoding: EncodingConfig,
    /// Background audio track; muxed when present on disk, skipped
    /// otherwise.
    audio_track: Option<PathBuf>,
}

impl ReelCompiler {
    /// Create a compiler writing to `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>, settings: ReelSettings, encoding: EncodingConfig) -> Self {
        Self {
            out_dir: out_dir.into(),
            settings,
            encoding,
            audio_track: None,
        }
    }

    /// Configure a background audio track.
    pub fn with_audio_track(mut self, track: impl Into<PathBuf>) -> Self {
        self.audio_track = Some(track.into());
        self
    }

    /// Deterministic output path for a compilation date.
    pub fn output_path(&self, date: NaiveDate) -> PathBuf {
        self.out_dir
            .join(format!("daily_reel_{}.mp4", date.format("%Y%m%d")))
    }

    /// Compile ordered images into one video file.
    ///
    /// Builds the clip/transition graph, then muxes the concatenated
    /// video against the background track when it exists; a missing
    /// track degrades to a video-only output and never fails the
    /// compile.
    ///
    /// # Errors
    /// - [`MediaError::NoImages`] for an empty image list
    /// - [`MediaError::RenderError`] when graph construction yields no
    ///   usable segments (checked before any encoder invocation)
    /// - [`MediaError::FfmpegFailed`] when encoding fails
    pub async fn compile(&self, images: &[PathBuf], date: NaiveDate) -> MediaResult<PathBuf> {
        let graph = ReelGraph::build(images, &self.settings)?;
        if graph.segments().is_empty() {
            return Err(MediaError::render_error(
                "graph construction produced no usable segments",
            ));
        }

        let output = self.output_path(date);
        fs::create_dir_all(&self.out_dir).await?;

        info!(
            clips = graph.clip_count(),
            transitions = graph.transition_count(),
            duration_secs = graph.total_duration_secs(),
            output = %output.display(),
            "compiling daily reel"
        );

        let mut cmd = FfmpegCommand::new(&output)
            .inputs(graph.inputs())
            .filter_complex(graph.filter_complex(CONCAT_OUT_LABEL))
            .map(format!("[{}]", CONCAT_OUT_LABEL));

        match self.available_audio_track().await {
            Some(track) => {
                // The audio input lands after every graph input, so its
                // stream index is the segment count.
                let audio_index = cmd.input_count();
                cmd = cmd
                    .input(crate::command::FfmpegInput::file(&track))
                    .map(format!("{}:a", audio_index))
                    .output_args(self.encoding.audio_args())
                    .shortest();
                info!(track = %track.display(), "muxing background audio");
            }
            None => {
                info!("no background audio track available, muxing video-only");
            }
        }

        let cmd = cmd.output_args(self.encoding.video_args());

        FfmpegRunner::new().run(&cmd).await?;

        info!(output = %output.display(), "daily reel compiled");
        Ok(output)
    }

    async fn available_audio_track(&self) -> Option<PathBuf> {
        let track = self.audio_track.as_ref()?;
        if path_exists(track).await {
            Some(track.clone())
        } else {
            warn!(track = %track.display(), "background audio track missing");
            None
        }
    }
}

async fn path_exists(path: &Path) -> bool {
    fs::metadata(path).await.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiler() -> ReelCompiler {
        ReelCompiler::new(
            "/tmp/reels",
            ReelSettings::default(),
            EncodingConfig::default(),
        )
    }

    #[test]
    fn test_output_path_is_dated() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let path = compiler().output_path(date);
        assert_eq!(
            path,
            PathBuf::from("/tmp/reels/daily_reel_20260823.mp4")
        );
    }

    #[tokio::test]
    async fn test_compile_with_no_images_fails_before_encoder() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        // Fails with NoImages even when ffmpeg is absent: the graph is
        // validated before any encoder invocation.
        let result = compiler().compile(&[], date).await;
        assert!(matches!(result, Err(MediaError::NoImages)));
    }

    #[tokio::test]
    async fn test_missing_audio_track_is_skipped() {
        let compiler = compiler().with_audio_track("/nonexistent/music.mp3");
        assert!(compiler.available_audio_track().await.is_none());
    }
}
