//! JSON reply bodies for the HTTP API.
//!
//! ```json
//! {"success":true,"message":"Configuration saved successfully"}
//! {"error":"Failed to save configuration"}
//! ```
//!
//! `GET /api/config` returns the effective configuration object itself and
//! has no wrapper type.

use serde::{Deserialize, Serialize};

/// Confirmation text returned after a successful save.
pub const SAVED_MESSAGE: &str = "Configuration saved successfully";

/// Error text returned when the configuration could not be persisted.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save configuration";

/// Error text for `/api` paths that match no route.
pub const API_NOT_FOUND_MESSAGE: &str = "API endpoint not found";

/// Error text for non-GET requests outside the API.
pub const NOT_FOUND_MESSAGE: &str = "Not found";

/// Plain-text body served when the frontend build is missing.
pub const FRONTEND_MISSING_MESSAGE: &str = "Server is running, but the frontend build (dist) is missing. Please run \"npm run build\" first.";

/// Body of a successful `POST /api/config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveConfigResponse {
    pub success: bool,
    pub message: String,
}

impl SaveConfigResponse {
    pub fn saved() -> Self {
        Self {
            success: true,
            message: SAVED_MESSAGE.to_string(),
        }
    }
}

/// Body of every JSON error reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
