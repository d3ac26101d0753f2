//! ConfigResolver: the read and write use cases for the bot configuration.
//!
//! # Reading
//!
//! [`ConfigResolver::resolve`] loads the persisted document fresh on every
//! call and lays it over the environment snapshot.  It cannot fail:
//!
//! ```text
//! store.read()  ──► Ok(None)            ──► snapshot            (debug log)
//!               ──► Err(_)              ──► snapshot            (warn log)
//!               ──► Ok(Some(bytes))
//!                     parse ──► Err(_)  ──► snapshot            (warn log)
//!                           ──► Ok(doc) ──► merge(snapshot, doc)
//! ```
//!
//! There is no cache.  Each call does exactly one store read, so a result is
//! always computed from one consistent copy of the document.
//!
//! # Writing
//!
//! [`ConfigResolver::persist`] serializes the given document and replaces the
//! stored one.  Nothing is merged on write: keys the new document omits are
//! gone from the store, and the next read falls back to the snapshot for
//! them.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::application::store::{ConfigStore, StoreError};
use crate::domain::configuration::Configuration;
use crate::domain::merge::Precedence;
use crate::domain::snapshot::EnvironmentSnapshot;

/// Failures while loading or saving the persisted document.
///
/// `Read` and `Malformed` never escape [`ConfigResolver::resolve`]; they are
/// only visible through [`ConfigResolver::load_persisted`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The store could not be read.
    #[error("failed to read persisted configuration: {0}")]
    Read(#[source] StoreError),

    /// The stored bytes are not a JSON object.
    #[error("persisted configuration is not a valid JSON object: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The document could not be rendered as JSON.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The store rejected the write.
    #[error("failed to write configuration: {0}")]
    Write(#[source] StoreError),
}

/// Owns the environment snapshot and the store for the life of the process.
pub struct ConfigResolver {
    snapshot: EnvironmentSnapshot,
    store: Arc<dyn ConfigStore>,
    precedence: Precedence,
}

impl ConfigResolver {
    /// Creates a resolver where persisted values override the environment.
    pub fn new(snapshot: EnvironmentSnapshot, store: Arc<dyn ConfigStore>) -> Self {
        Self {
            snapshot,
            store,
            precedence: Precedence::default(),
        }
    }

    pub fn with_precedence(mut self, precedence: Precedence) -> Self {
        self.precedence = precedence;
        self
    }

    pub fn snapshot(&self) -> &EnvironmentSnapshot {
        &self.snapshot
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    /// Returns the effective configuration.  Never fails.
    pub async fn resolve(&self) -> Configuration {
        match self.load_persisted().await {
            Ok(Some(persisted)) => {
                debug!(
                    "merging {} persisted key(s) from {} over environment defaults",
                    persisted.len(),
                    self.store.describe()
                );
                self.precedence.apply(self.snapshot.as_config(), &persisted)
            }
            Ok(None) => {
                debug!(
                    "no persisted configuration at {}; using environment defaults",
                    self.store.describe()
                );
                self.snapshot.as_config().clone()
            }
            Err(e) => {
                warn!("{e}; using environment defaults");
                self.snapshot.as_config().clone()
            }
        }
    }

    /// Reads and parses the persisted document.
    ///
    /// Returns `Ok(None)` if nothing has been persisted yet.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Read`] if the store read fails, and
    /// [`ConfigError::Malformed`] if the bytes are not a JSON object.
    pub async fn load_persisted(&self) -> Result<Option<Configuration>, ConfigError> {
        let Some(bytes) = self.store.read().await.map_err(ConfigError::Read)? else {
            return Ok(None);
        };
        Configuration::from_json_slice(&bytes)
            .map(Some)
            .map_err(ConfigError::Malformed)
    }

    /// Replaces the persisted document with `config`.
    ///
    /// The document is stored verbatim, unknown keys included.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Write`] if the store cannot complete the write.  What
    /// the store holds after a failed write depends on the store.
    pub async fn persist(&self, config: &Configuration) -> Result<(), ConfigError> {
        let bytes = config.to_json_pretty().map_err(ConfigError::Serialize)?;

        if let Err(e) = self.store.write(&bytes).await {
            error!("failed to save configuration to {}: {e}", self.store.describe());
            return Err(ConfigError::Write(e));
        }

        info!(
            "configuration saved to {} ({} key(s))",
            self.store.describe(),
            config.len()
        );
        debug!("saved configuration: {}", String::from_utf8_lossy(&bytes));
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
