//! Text-card image renderer.
//!
//! Renders the excerpt as white text centered on a solid background via
//! FFmpeg's `drawtext` filter. This is the degraded-placeholder path of
//! the render-service boundary; a generative image backend can replace
//! it behind the same trait.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;
use tracing::info;

use reel_media::{FfmpegCommand, FfmpegInput, FfmpegRunner};
use reel_models::{ReelSettings, TransformedText};

use crate::services::ImageRenderer;

const FONT_SIZE: u32 = 48;
const BACKGROUND_COLOR: &str = "black";
const FONT_COLOR: &str = "white";

/// Renders excerpts to centered-text image cards.
#[derive(Debug, Clone)]
pub struct TextCardRenderer {
    image_dir: PathBuf,
    width: u32,
    height: u32,
}

impl TextCardRenderer {
    /// Create a renderer writing into `image_dir` at the reel's target
    /// resolution.
    pub fn new(image_dir: impl Into<PathBuf>, settings: &ReelSettings) -> Self {
        Self {
            image_dir: image_dir.into(),
            width: settings.width,
            height: settings.height,
        }
    }
}

#[async_trait]
impl ImageRenderer for TextCardRenderer {
    async fn render(&self, excerpt: &TransformedText) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(&self.image_dir).await?;

        let stamp = Utc::now().format("%Y%m%d_%H%M%S%3f");
        let output = self.image_dir.join(format!("post_{}.png", stamp));

        // drawtext reads the excerpt from a file, which sidesteps filter
        // escaping of arbitrary text.
        let text_file = self.image_dir.join(format!("post_{}.txt", stamp));
        fs::write(&text_file, wrap_text(excerpt.as_str(), 40)).await?;

        let filter = format!(
            "drawtext=textfile='{}':fontcolor={}:fontsize={}:x=(w-text_w)/2:y=(h-text_h)/2",
            text_file.display(),
            FONT_COLOR,
            FONT_SIZE,
        );

        let cmd = FfmpegCommand::new(&output)
            .input(FfmpegInput::lavfi(format!(
                "color=c={}:s={}x{}",
                BACKGROUND_COLOR, self.width, self.height
            )))
            .output_args(["-vf".to_string(), filter])
            .output_args(["-frames:v".to_string(), "1".to_string()]);

        let result = FfmpegRunner::new().run(&cmd).await;

        // The text file is only needed during the render.
        let _ = fs::remove_file(&text_file).await;
        result?;

        info!(image = %output.display(), "rendered text card");
        Ok(output)
    }
}

/// Greedy word wrap to at most `max_chars` characters per line.
fn wrap_text(text: &str, max_chars: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}
