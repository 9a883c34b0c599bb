//! Daily content pipeline orchestrator.
//!
//! This crate provides:
//! - The post cycle (fetch -> transform -> render -> batch append)
//! - The compile cycle (batch -> daily reel, clear on success)
//! - A coarse time-of-day scheduler
//! - Service seams for the external fetch and render collaborators

pub mod config;
pub mod error;
pub mod fragments;
pub mod orchestrator;
pub mod render;
pub mod schedule;
pub mod services;

pub use config::PipelineConfig;
pub use error::{PipelineError, PipelineResult};
pub use fragments::FileFragmentSource;
pub use orchestrator::Orchestrator;
pub use render::TextCardRenderer;
pub use schedule::{Schedule, Scheduler, Trigger};
pub use services::{FragmentSource, ImageRenderer, VideoCompiler};
