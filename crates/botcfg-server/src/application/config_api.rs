//! The configuration read and write use cases behind `/api/config`.
//!
//! ```text
//! GET  /api/config  →  ConfigApi::current()  →  effective configuration
//! POST /api/config  →  ConfigApi::save(doc)  →  SaveConfigResponse | ApiError
//! ```
//!
//! Reads cannot fail.  A failed write is reported with a fixed message; the
//! underlying cause is logged by the resolver, not sent to the client.

use std::sync::Arc;

use botcfg_core::{ConfigError, ConfigResolver, Configuration};
use thiserror::Error;

use crate::domain::messages::{ErrorResponse, SaveConfigResponse, SAVE_FAILED_MESSAGE};

/// Failures the API reports to clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configuration could not be persisted.
    #[error("failed to save configuration: {0}")]
    SaveFailed(#[source] ConfigError),
}

impl ApiError {
    /// The JSON body sent to the client for this error.
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            ApiError::SaveFailed(_) => ErrorResponse::new(SAVE_FAILED_MESSAGE),
        }
    }
}

/// Shared handle to the resolver, cloned into every request.
#[derive(Clone)]
pub struct ConfigApi {
    resolver: Arc<ConfigResolver>,
}

impl ConfigApi {
    pub fn new(resolver: ConfigResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    pub fn resolver(&self) -> &ConfigResolver {
        &self.resolver
    }

    /// The effective configuration for this request.
    pub async fn current(&self) -> Configuration {
        self.resolver.resolve().await
    }

    /// Persists `config` as the new document, verbatim.
    ///
    /// # Errors
    ///
    /// [`ApiError::SaveFailed`] if the store write did not complete.
    pub async fn save(&self, config: Configuration) -> Result<SaveConfigResponse, ApiError> {
        self.resolver
            .persist(&config)
            .await
            .map(|()| SaveConfigResponse::saved())
            .map_err(ApiError::SaveFailed)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use botcfg_core::{ConfigField, EnvironmentSnapshot, FileConfigStore, InMemoryConfigStore};
    use serde_json::json;

    fn api_with_memory_store() -> ConfigApi {
        let snapshot = EnvironmentSnapshot::from_lookup(|name| {
            (name == "BOT_NAME").then(|| "Bot".to_string())
        });
        ConfigApi::new(ConfigResolver::new(
            snapshot,
            Arc::new(InMemoryConfigStore::new()),
        ))
    }

    #[tokio::test]
    async fn test_current_without_document_is_snapshot() {
        let api = api_with_memory_store();
        assert_eq!(api.current().await.text(ConfigField::BotName), Some("Bot"));
    }

    #[tokio::test]
    async fn test_save_then_current_reflects_document() {
        // Arrange
        let api = api_with_memory_store();
        let doc: Configuration = serde_json::from_value(json!({"prefix": "!"})).unwrap();

        // Act
        let reply = api.save(doc).await.expect("save");
        let current = api.current().await;

        // Assert
        assert_eq!(reply, SaveConfigResponse::saved());
        assert_eq!(current.text(ConfigField::Prefix), Some("!"));
        assert_eq!(current.text(ConfigField::BotName), Some("Bot"));
    }

    #[tokio::test]
    async fn test_save_failure_maps_to_fixed_error_body() {
        // Arrange: the store path is a directory, so the write fails.
        let dir = tempfile::tempdir().unwrap();
        let api = ConfigApi::new(ConfigResolver::new(
            EnvironmentSnapshot::empty(),
            Arc::new(FileConfigStore::new(dir.path())),
        ));

        // Act
        let err = api.save(Configuration::new()).await.unwrap_err();

        // Assert
        assert!(matches!(err, ApiError::SaveFailed(ConfigError::Write(_))));
        assert_eq!(err.to_response(), ErrorResponse::new("Failed to save configuration"));
    }

    #[tokio::test]
    async fn test_clones_share_one_resolver() {
        let api = api_with_memory_store();
        let clone = api.clone();

        api.save(serde_json::from_value(json!({"ownerId": "7"})).unwrap())
            .await
            .unwrap();

        assert_eq!(clone.current().await.text(ConfigField::OwnerId), Some("7"));
    }
}
