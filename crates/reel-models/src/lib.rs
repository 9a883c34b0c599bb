//! Shared data models for the Reelforge backend.
//!
//! This crate provides Serde-serializable types for:
//! - Text fragments and transformed excerpts
//! - Daily post batches
//! - Reel rendering settings
//! - Encoding configuration

pub mod encoding;
pub mod fragment;
pub mod post;
pub mod settings;

// Re-export common types
pub use encoding::EncodingConfig;
pub use fragment::{TextFragment, TransformedText};
pub use post::DailyPost;
pub use settings::ReelSettings;
