//! Storage abstraction for the persisted configuration document.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a [`ConfigStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing store refused the operation for a non-I/O reason.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// A single document that is read whole and replaced whole.
///
/// Implementations do no locking across calls: concurrent writers race and
/// the last one to finish wins.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Returns the stored bytes, or `Ok(None)` if nothing has been written
    /// yet.
    async fn read(&self) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replaces the stored document with `bytes`.
    async fn write(&self, bytes: &[u8]) -> Result<(), StoreError>;

    /// Short human-readable location, used in log messages.
    fn describe(&self) -> String;
}
