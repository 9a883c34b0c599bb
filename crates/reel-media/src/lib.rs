//! FFmpeg CLI wrapper for daily reel assembly.
//!
//! This crate provides:
//! - Type-safe multi-input FFmpeg command building
//! - Per-image clip and transition filter construction
//! - An ordered clip/transition/concat media graph
//! - Reel compilation with an audio-optional mux path
//! - Retention sweeps for staging and output directories

pub mod command;
pub mod compiler;
pub mod error;
pub mod filters;
pub mod graph;
pub mod sweep;

pub use command::{check_ffmpeg, FfmpegCommand, FfmpegInput, FfmpegRunner};
pub use compiler::ReelCompiler;
pub use error::{MediaError, MediaResult};
pub use graph::{MediaClip, ReelGraph, Segment, TransitionSegment};
pub use sweep::prune_older_than;
