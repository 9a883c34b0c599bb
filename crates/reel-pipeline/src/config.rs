//! Pipeline configuration.

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveTime;

use reel_models::{EncodingConfig, ReelSettings};

/// Default post slot times.
pub const DEFAULT_POST_TIMES: &[(u32, u32)] = &[(10, 0), (14, 0), (18, 0)];
/// Default compile slot time.
pub const DEFAULT_COMPILE_TIME: (u32, u32) = (23, 50);
/// Default scheduler polling interval in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;
/// Default retention window in days for staged images and reels.
pub const DEFAULT_RETENTION_DAYS: u32 = 7;

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Time-of-day slots at which a post is created.
    pub post_times: Vec<NaiveTime>,
    /// Time of day at which the daily reel is compiled.
    pub compile_time: NaiveTime,
    /// Scheduler polling interval.
    pub poll_interval: Duration,
    /// Directory where fragment text files are picked up.
    pub inbox_dir: PathBuf,
    /// Staging directory for rendered post images.
    pub image_dir: PathBuf,
    /// Output directory for compiled reels.
    pub output_dir: PathBuf,
    /// Background audio track muxed into the reel when present.
    pub audio_track: PathBuf,
    /// Days to keep staged images and compiled reels.
    pub retention_days: u32,
    /// Reel rendering settings.
    pub settings: ReelSettings,
    /// Encoder settings.
    pub encoding: EncodingConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            post_times: DEFAULT_POST_TIMES
                .iter()
                .filter_map(|&(h, m)| NaiveTime::from_hms_opt(h, m, 0))
                .collect(),
            compile_time: NaiveTime::from_hms_opt(DEFAULT_COMPILE_TIME.0, DEFAULT_COMPILE_TIME.1, 0)
                .unwrap_or(NaiveTime::MIN),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            inbox_dir: PathBuf::from("./data/inbox"),
            image_dir: PathBuf::from("./data/images"),
            output_dir: PathBuf::from("./data/reels"),
            audio_track: PathBuf::from("./assets/background_music.mp3"),
            retention_days: DEFAULT_RETENTION_DAYS,
            settings: ReelSettings::default(),
            encoding: EncodingConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            post_times: std::env::var("REEL_POST_TIMES")
                .ok()
                .and_then(|s| parse_times(&s))
                .unwrap_or(defaults.post_times),
            compile_time: std::env::var("REEL_COMPILE_TIME")
                .ok()
                .and_then(|s| parse_time(&s))
                .unwrap_or(defaults.compile_time),
            poll_interval: Duration::from_secs(
                std::env::var("REEL_POLL_INTERVAL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_POLL_INTERVAL_SECS),
            ),
            inbox_dir: std::env::var("REEL_INBOX_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.inbox_dir),
            image_dir: std::env::var("REEL_IMAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.image_dir),
            output_dir: std::env::var("REEL_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            audio_track: std::env::var("REEL_AUDIO_TRACK")
                .map(PathBuf::from)
                .unwrap_or(defaults.audio_track),
            retention_days: std::env::var("REEL_RETENTION_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_RETENTION_DAYS),
            settings: defaults.settings,
            encoding: defaults.encoding,
        }
    }
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}

/// Parse a comma-separated list of `HH:MM` times; any unparsable entry
/// invalidates the whole list.
fn parse_times(s: &str) -> Option<Vec<NaiveTime>> {
    let times: Vec<NaiveTime> = s.split(',').filter_map(parse_time).collect();
    let expected = s.split(',').filter(|p| !p.trim().is_empty()).count();
    (!times.is_empty() && times.len() == expected).then_some(times)
}
