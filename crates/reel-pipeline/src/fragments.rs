//! File-backed fragment source.
//!
//! Reads `.txt` files dropped into an inbox directory and splits each
//! into blank-line-delimited paragraphs, one fragment per paragraph.
//! This is the local stand-in at the fetch-service boundary; a scraper
//! or feed client can replace it behind the same trait.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use reel_models::TextFragment;

use crate::services::FragmentSource;

/// Fragment source reading text files from a directory.
#[derive(Debug, Clone)]
pub struct FileFragmentSource {
    inbox: PathBuf,
}

impl FileFragmentSource {
    /// Create a source over the given inbox directory.
    pub fn new(inbox: impl Into<PathBuf>) -> Self {
        Self {
            inbox: inbox.into(),
        }
    }
}

#[async_trait]
impl FragmentSource for FileFragmentSource {
    async fn fetch_fragments(&self) -> anyhow::Result<Vec<TextFragment>> {
        if fs::metadata(&self.inbox).await.is_err() {
            debug!(inbox = %self.inbox.display(), "inbox directory missing");
            return Ok(Vec::new());
        }

        // Collect and sort file names so discovery order is stable
        // across runs.
        let mut files = Vec::new();
        let mut entries = fs::read_dir(&self.inbox).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("txt") {
                files.push(path);
            }
        }
        files.sort();

        let mut fragments = Vec::new();
        for path in files {
            let text = match fs::read_to_string(&path).await {
                Ok(text) => text,
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "could not read fragment file");
                    continue;
                }
            };
            let source = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());

            for paragraph in text.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
                fragments.push(TextFragment::new(paragraph, &source));
            }
        }

        debug!(count = fragments.len(), "fetched fragments from inbox");
        Ok(fragments)
    }
}
