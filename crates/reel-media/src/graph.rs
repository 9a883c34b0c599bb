//! The ordered clip/transition media graph for a daily reel.
//!
//! Graph nodes exist only for the duration of compilation; the graph
//! renders to an ordered FFmpeg input list plus a filter complex that
//! concatenates every segment in input order.

use std::path::{Path, PathBuf};

use reel_models::ReelSettings;

use crate::command::FfmpegInput;
use crate::error::{MediaError, MediaResult};
use crate::filters::{clip_filter, concat_filter, transition_filter, transition_source};

/// One still image turned into a fixed-duration, fade-bracketed segment.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaClip {
    /// Source image path.
    pub image: PathBuf,
    /// Segment duration in seconds.
    pub duration_secs: f64,
}

/// A solid-color filler segment between two clips.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionSegment {
    /// Segment duration in seconds.
    pub duration_secs: f64,
    /// Fill color.
    pub color: String,
}

/// A node in the reel graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Clip(MediaClip),
    Transition(TransitionSegment),
}

impl Segment {
    /// Segment duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        match self {
            Segment::Clip(clip) => clip.duration_secs,
            Segment::Transition(transition) => transition.duration_secs,
        }
    }

    /// Whether this segment is a clip.
    pub fn is_clip(&self) -> bool {
        matches!(self, Segment::Clip(_))
    }
}

/// An ordered media graph: n clips interleaved with n-1 transitions.
#[derive(Debug, Clone)]
pub struct ReelGraph {
    segments: Vec<Segment>,
    settings: ReelSettings,
}

impl ReelGraph {
    /// Build a graph from ordered image paths.
    ///
    /// Image order is preserved exactly; a transition is inserted
    /// between every pair of consecutive clips and never after the
    /// last.
    ///
    /// # Errors
    /// Returns [`MediaError::NoImages`] for an empty image list.
    pub fn build(images: &[PathBuf], settings: &ReelSettings) -> MediaResult<Self> {
        if images.is_empty() {
            return Err(MediaError::NoImages);
        }

        let mut segments = Vec::with_capacity(images.len() * 2 - 1);
        for (index, image) in images.iter().enumerate() {
            if index > 0 {
                segments.push(Segment::Transition(TransitionSegment {
                    duration_secs: settings.transition_duration_secs,
                    color: settings.transition_color.clone(),
                }));
            }
            segments.push(Segment::Clip(MediaClip {
                image: image.clone(),
                duration_secs: settings.clip_duration_secs,
            }));
        }

        Ok(Self {
            segments,
            settings: settings.clone(),
        })
    }

    /// The ordered segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of clips in the graph.
    pub fn clip_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_clip()).count()
    }

    /// Number of transitions in the graph.
    pub fn transition_count(&self) -> usize {
        self.segments.len() - self.clip_count()
    }

    /// Total pre-mux duration in seconds.
    pub fn total_duration_secs(&self) -> f64 {
        self.segments.iter().map(Segment::duration_secs).sum()
    }

    /// Source image paths in graph order.
    pub fn image_paths(&self) -> Vec<&Path> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Clip(clip) => Some(clip.image.as_path()),
                Segment::Transition(_) => None,
            })
            .collect()
    }

    /// Ordered FFmpeg inputs, one per segment.
    pub fn inputs(&self) -> Vec<FfmpegInput> {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Clip(clip) => FfmpegInput::file(&clip.image)
                    .looped()
                    .duration(clip.duration_secs),
                Segment::Transition(_) => FfmpegInput::lavfi(transition_source(&self.settings)),
            })
            .collect()
    }

    /// Filter complex: per-segment normalization chains followed by a
    /// concat of every labelled stream in order.
    pub fn filter_complex(&self, out_label: &str) -> String {
        let mut chains = Vec::with_capacity(self.segments.len() + 1);
        let mut labels = Vec::with_capacity(self.segments.len());

        for (index, segment) in self.segments.iter().enumerate() {
            let chain = match segment {
                Segment::Clip(_) => clip_filter(&self.settings),
                Segment::Transition(_) => transition_filter(&self.settings),
            };
            let label = format!("v{}", index);
            chains.push(format!("[{}:v]{}[{}]", index, chain, label));
            labels.push(label);
        }

        chains.push(concat_filter(
            labels.iter().map(String::as_str),
            out_label,
        ));
        chains.join(";")
    }
}
