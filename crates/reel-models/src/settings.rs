//! Reel rendering settings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default duration each still image is held on screen, in seconds.
pub const DEFAULT_CLIP_DURATION_SECS: f64 = 5.0;
/// Default duration of the filler transition between clips, in seconds.
pub const DEFAULT_TRANSITION_DURATION_SECS: f64 = 1.0;
/// Default fade-in/fade-out duration at each clip boundary, in seconds.
pub const DEFAULT_FADE_DURATION_SECS: f64 = 0.5;
/// Default output width (portrait short-form format).
pub const DEFAULT_WIDTH: u32 = 1080;
/// Default output height (portrait short-form format).
pub const DEFAULT_HEIGHT: u32 = 1920;
/// Default frame rate.
pub const DEFAULT_FPS: u32 = 30;
/// Default transition fill color.
pub const DEFAULT_TRANSITION_COLOR: &str = "black";

/// Rendering settings for the daily reel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReelSettings {
    /// Seconds each image is held on screen.
    #[serde(default = "default_clip_duration")]
    pub clip_duration_secs: f64,

    /// Seconds of filler transition between consecutive clips.
    #[serde(default = "default_transition_duration")]
    pub transition_duration_secs: f64,

    /// Seconds of fade-in and fade-out at each clip boundary.
    #[serde(default = "default_fade_duration")]
    pub fade_duration_secs: f64,

    /// Output width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Output height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Output frame rate.
    #[serde(default = "default_fps")]
    pub fps: u32,

    /// Solid fill color for transition segments.
    #[serde(default = "default_transition_color")]
    pub transition_color: String,
}

fn default_clip_duration() -> f64 {
    DEFAULT_CLIP_DURATION_SECS
}
fn default_transition_duration() -> f64 {
    DEFAULT_TRANSITION_DURATION_SECS
}
fn default_fade_duration() -> f64 {
    DEFAULT_FADE_DURATION_SECS
}
fn default_width() -> u32 {
    DEFAULT_WIDTH
}
fn default_height() -> u32 {
    DEFAULT_HEIGHT
}
fn default_fps() -> u32 {
    DEFAULT_FPS
}
fn default_transition_color() -> String {
    DEFAULT_TRANSITION_COLOR.to_string()
}

impl Default for ReelSettings {
    fn default() -> Self {
        Self {
            clip_duration_secs: DEFAULT_CLIP_DURATION_SECS,
            transition_duration_secs: DEFAULT_TRANSITION_DURATION_SECS,
            fade_duration_secs: DEFAULT_FADE_DURATION_SECS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps: DEFAULT_FPS,
            transition_color: DEFAULT_TRANSITION_COLOR.to_string(),
        }
    }
}

impl ReelSettings {
    /// Target resolution as a `WxH` string for FFmpeg filter arguments.
    pub fn size_arg(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ReelSettings::default();
        assert_eq!(settings.clip_duration_secs, 5.0);
        assert_eq!(settings.transition_duration_secs, 1.0);
        assert_eq!(settings.size_arg(), "1080x1920");
        assert_eq!(settings.fps, 30);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: ReelSettings = serde_json::from_str("{\"fps\": 24}").unwrap();
        assert_eq!(settings.fps, 24);
        assert_eq!(settings.width, 1080);
        assert_eq!(settings.transition_color, "black");
    }
}
