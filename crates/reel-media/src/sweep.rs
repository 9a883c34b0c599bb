//! Retention sweeps for staging and output directories.

use std::path::Path;
use std::time::{Duration, SystemTime};

use tokio::fs;
use tracing::{debug, warn};

use crate::error::MediaResult;

/// Delete files in `dir` with the given extension whose modification
/// time is older than `retention_days`.
///
/// A missing directory is treated as already clean. Per-file failures
/// are logged and skipped; the sweep itself only fails on directory
/// enumeration errors. Returns the number of files removed.
pub async fn prune_older_than(
    dir: impl AsRef<Path>,
    extension: &str,
    retention_days: u32,
) -> MediaResult<usize> {
    let dir = dir.as_ref();
    if fs::metadata(dir).await.is_err() {
        return Ok(0);
    }

    let cutoff = Duration::from_secs(u64::from(retention_days) * 86400);
    let now = SystemTime::now();
    let mut removed = 0;

    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }

        let modified = match entry.metadata().await.and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "could not stat file, skipping");
                continue;
            }
        };

        let age = match now.duration_since(modified) {
            Ok(age) => age,
            Err(_) => continue, // modified in the future, leave it alone
        };

        if age > cutoff {
            match fs::remove_file(&path).await {
                Ok(()) => {
                    debug!(file = %path.display(), "pruned expired file");
                    removed += 1;
                }
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "could not remove file");
                }
            }
        }
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    async fn write_aged(dir: &Path, name: &str, age: Duration) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"x").await.unwrap();
        let mtime = SystemTime::now() - age;
        let file = std::fs::File::options().write(true).open(&path).unwrap();
        file.set_modified(mtime).unwrap();
        path
    }

    #[tokio::test]
    async fn test_prunes_only_expired_matching_files() {
        let dir = TempDir::new().unwrap();
        let old_png = write_aged(dir.path(), "old.png", Duration::from_secs(8 * 86400)).await;
        let new_png = write_aged(dir.path(), "new.png", Duration::from_secs(86400)).await;
        let old_mp4 = write_aged(dir.path(), "old.mp4", Duration::from_secs(8 * 86400)).await;

        let removed = prune_older_than(dir.path(), "png", 7).await.unwrap();

        assert_eq!(removed, 1);
        assert!(!old_png.exists());
        assert!(new_png.exists());
        assert!(old_mp4.exists(), "other extensions must be untouched");
    }

    #[tokio::test]
    async fn test_missing_directory_is_clean() {
        let removed = prune_older_than("/nonexistent/reel-sweep", "png", 7)
            .await
            .unwrap();
        assert_eq!(removed, 0);
    }
}
