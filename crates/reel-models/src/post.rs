//! Daily post batch entries.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::TransformedText;

/// One successfully rendered post, queued for the daily compilation.
///
/// Created only after image rendering succeeds; lives in the in-memory
/// daily batch until the batch is cleared by a successful compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DailyPost {
    /// The excerpt the image was rendered from.
    pub excerpt: TransformedText,
    /// Path to the rendered image on disk.
    pub image_path: PathBuf,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl DailyPost {
    /// Create a post entry stamped with the current time.
    pub fn new(excerpt: TransformedText, image_path: impl Into<PathBuf>) -> Self {
        Self {
            excerpt,
            image_path: image_path.into(),
            created_at: Utc::now(),
        }
    }
}
