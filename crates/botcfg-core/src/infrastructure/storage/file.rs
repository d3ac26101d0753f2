//! File-backed configuration store.
//!
//! The document is a single JSON file.  It does not exist until the first
//! successful write; a missing file reads back as "nothing persisted".
//!
//! Writes truncate and rewrite the file in place.  There is no temp-file
//! rename, so a reader racing a writer can see a partial document.  The
//! resolver parses such a document as malformed and falls back to the
//! environment snapshot.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::store::{ConfigStore, StoreError};

/// Default file name for the persisted configuration.
pub const DEFAULT_CONFIG_FILE: &str = "bot-config.json";

/// A [`ConfigStore`] backed by one file on disk.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConfigStore for FileConfigStore {
    async fn read(&self) -> Result<Option<Vec<u8>>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    async fn write(&self, bytes: &[u8]) -> Result<(), StoreError> {
        // Ensure directory exists before writing.
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| StoreError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
