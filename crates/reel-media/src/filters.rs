//! FFmpeg filter construction for reel segments.

use reel_models::ReelSettings;

/// Filter chain turning a looped still image into a fade-bracketed clip.
///
/// Scales to exactly fill the target resolution with a 1:1 sample aspect
/// ratio, normalizes the frame rate, and fades in over the first
/// `fade_duration_secs` and out over the last.
pub fn clip_filter(settings: &ReelSettings) -> String {
    let fade_out_start = settings.clip_duration_secs - settings.fade_duration_secs;
    format!(
        "scale={w}:{h},setsar=1,fps={fps},fade=t=in:st=0:d={fade},fade=t=out:st={out_st}:d={fade}",
        w = settings.width,
        h = settings.height,
        fps = settings.fps,
        fade = settings.fade_duration_secs,
        out_st = fade_out_start,
    )
}

/// `lavfi` source spec for a solid-color transition segment.
pub fn transition_source(settings: &ReelSettings) -> String {
    format!(
        "color=c={color}:s={size}:d={d}:r={fps}",
        color = settings.transition_color,
        size = settings.size_arg(),
        d = settings.transition_duration_secs,
        fps = settings.fps,
    )
}

/// Filter chain normalizing a transition source for concatenation.
pub fn transition_filter(settings: &ReelSettings) -> String {
    format!("fps={},setsar=1", settings.fps)
}

/// Concat filter over `count` labelled video streams.
///
/// Labels must be bare (without brackets), e.g. `v0`, `v1`.
pub fn concat_filter<'a>(labels: impl Iterator<Item = &'a str>, out_label: &str) -> String {
    let mut filter = String::new();
    let mut count = 0;
    for label in labels {
        filter.push_str(&format!("[{}]", label));
        count += 1;
    }
    filter.push_str(&format!("concat=n={}:v=1:a=0[{}]", count, out_label));
    filter
}
