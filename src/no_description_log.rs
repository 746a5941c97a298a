//! Append-only log of hotels with no usable description in any active locale.
//!
//! Many workers append concurrently; each append is one whole line written
//! under a lock so lines never interleave.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

#[derive(Debug)]
pub struct NoDescriptionLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl NoDescriptionLog {
    /// Open (or create) the log for appending
    pub async fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .with_context(|| format!("Failed to open no-description log {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    /// Append one hotel id as a single line
    pub async fn record(&self, hotel_id: &str) -> Result<()> {
        let line = format!("{}\n", hotel_id);
        let mut file = self.file.lock().await;
        file.write_all(line.as_bytes())
            .await
            .with_context(|| format!("Failed to append to {}", self.path.display()))?;
        file.flush()
            .await
            .with_context(|| format!("Failed to flush {}", self.path.display()))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
