//! In-memory configuration store.
//!
//! Lets tests (and embedders without a writable disk) drive the resolver
//! without touching the filesystem.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::store::{ConfigStore, StoreError};

/// A [`ConfigStore`] that keeps the document in a byte buffer.
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    contents: Mutex<Option<Vec<u8>>>,
}

impl InMemoryConfigStore {
    /// Creates an empty store (nothing persisted yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `bytes`.
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Mutex::new(Some(bytes.into())),
        }
    }

    /// Returns a copy of the stored bytes.
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Vec<u8>>> {
        // The buffer is only ever replaced whole; poisoning is ignored.
        self.contents
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn read(&self) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.lock().clone())
    }

    async fn write(&self, bytes: &[u8]) -> Result<(), StoreError> {
        *self.lock() = Some(bytes.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory store".to_string()
    }
}
