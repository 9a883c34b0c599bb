//! Video encoding configuration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default video codec (H.264)
pub const DEFAULT_VIDEO_CODEC: &str = "libx264";
/// Default audio codec
pub const DEFAULT_AUDIO_CODEC: &str = "aac";
/// Default encoding preset
pub const DEFAULT_PRESET: &str = "medium";
/// Default pixel format (broad player compatibility)
pub const DEFAULT_PIX_FMT: &str = "yuv420p";
/// Default mov flags (streaming-friendly moov placement)
pub const DEFAULT_MOVFLAGS: &str = "faststart";

/// Video encoding configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EncodingConfig {
    /// Video codec (e.g., "libx264", "h264_nvenc")
    #[serde(default = "default_video_codec")]
    pub codec: String,

    /// Encoding preset (e.g., "fast", "medium", "slow")
    #[serde(default = "default_preset")]
    pub preset: String,

    /// Audio codec
    #[serde(default = "default_audio_codec")]
    pub audio_codec: String,

    /// Pixel format
    #[serde(default = "default_pix_fmt")]
    pub pix_fmt: String,

    /// MP4 mov flags
    #[serde(default = "default_movflags")]
    pub movflags: String,

    /// Additional FFmpeg output arguments
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_video_codec() -> String {
    DEFAULT_VIDEO_CODEC.to_string()
}
fn default_preset() -> String {
    DEFAULT_PRESET.to_string()
}
fn default_audio_codec() -> String {
    DEFAULT_AUDIO_CODEC.to_string()
}
fn default_pix_fmt() -> String {
    DEFAULT_PIX_FMT.to_string()
}
fn default_movflags() -> String {
    DEFAULT_MOVFLAGS.to_string()
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            codec: DEFAULT_VIDEO_CODEC.to_string(),
            preset: DEFAULT_PRESET.to_string(),
            audio_codec: DEFAULT_AUDIO_CODEC.to_string(),
            pix_fmt: DEFAULT_PIX_FMT.to_string(),
            movflags: DEFAULT_MOVFLAGS.to_string(),
            extra_args: Vec::new(),
        }
    }
}

impl EncodingConfig {
    /// Video-only FFmpeg output arguments.
    pub fn video_args(&self) -> Vec<String> {
        let mut args = vec![
            "-c:v".to_string(),
            self.codec.clone(),
            "-preset".to_string(),
            self.preset.clone(),
            "-pix_fmt".to_string(),
            self.pix_fmt.clone(),
            "-movflags".to_string(),
            self.movflags.clone(),
        ];
        args.extend(self.extra_args.clone());
        args
    }

    /// Audio codec arguments, appended when a background track is muxed.
    pub fn audio_args(&self) -> Vec<String> {
        vec!["-c:a".to_string(), self.audio_codec.clone()]
    }
}
