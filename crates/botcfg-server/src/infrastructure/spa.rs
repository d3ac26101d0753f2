//! Single-page-application fallback.
//!
//! Every request that matches no API route ends up here:
//!
//! 1. `/api…` paths get a 404 JSON error; the frontend shell is never
//!    served in place of an API response.
//! 2. Methods other than GET/HEAD get a 404 JSON error.
//! 3. A path naming a file inside the dist directory is served with a
//!    `Content-Type` guessed from its extension.
//! 4. Everything else gets `index.html`, so client-side routes work on a
//!    hard refresh.
//! 5. If `index.html` is missing (frontend not built), a 500 plain-text
//!    reply tells the operator to build it.
//!
//! Request paths are only ever joined onto the dist directory after every
//! component has been checked to be a plain name; `..`, root and prefix
//! components skip straight to the `index.html` branch.

use std::path::{Component, Path, PathBuf};

use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, error};

use crate::domain::messages::{
    ErrorResponse, API_NOT_FOUND_MESSAGE, FRONTEND_MISSING_MESSAGE, NOT_FOUND_MESSAGE,
};
use crate::infrastructure::http_server::AppState;

const API_PREFIX: &str = "/api";
const INDEX_FILE: &str = "index.html";

/// Fallback handler for every route the router does not know.
pub async fn spa_fallback(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let path = uri.path();

    if path.starts_with(API_PREFIX) {
        debug!("no API route for {method} {path}");
        return (StatusCode::NOT_FOUND, Json(ErrorResponse::new(API_NOT_FOUND_MESSAGE)))
            .into_response();
    }

    if method != Method::GET && method != Method::HEAD {
        return (StatusCode::NOT_FOUND, Json(ErrorResponse::new(NOT_FOUND_MESSAGE))).into_response();
    }

    if let Some(relative) = asset_relative_path(path) {
        let candidate = state.dist_dir.join(relative);
        if is_file(&candidate).await {
            if let Ok(bytes) = tokio::fs::read(&candidate).await {
                return file_response(&candidate, bytes);
            }
        }
    }

    let index = state.dist_dir.join(INDEX_FILE);
    match tokio::fs::read(&index).await {
        Ok(bytes) => file_response(&index, bytes),
        Err(e) => {
            error!("cannot serve {}: {e}", index.display());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                FRONTEND_MISSING_MESSAGE,
            )
                .into_response()
        }
    }
}

/// Turns a URI path into a relative filesystem path, or `None` if it is
/// empty or contains anything other than plain path segments.
pub fn asset_relative_path(uri_path: &str) -> Option<PathBuf> {
    let trimmed = uri_path.trim_start_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    let mut relative = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            _ => return None,
        }
    }
    Some(relative)
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

fn file_response(path: &Path, bytes: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime.essence_str().to_string())],
        bytes,
    )
        .into_response()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
