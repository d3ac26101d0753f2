//! HTTP server: router, `/api/config` handlers and the serve loop.
//!
//! ```text
//! /
//! ├── GET  /api/config   effective configuration
//! ├── POST /api/config   replace the persisted document
//! └── *                  SPA fallback (see `spa`)
//! ```
//!
//! Each request runs on its own Tokio task (axum does the spawning).  The
//! handlers share one [`ConfigApi`] and do no locking of their own; two
//! concurrent saves race and the later one wins.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use botcfg_core::Configuration;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::application::ConfigApi;
use crate::domain::messages::ErrorResponse;
use crate::domain::settings::ServerSettings;
use crate::infrastructure::spa::spa_fallback;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub api: ConfigApi,
    pub dist_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(api: ConfigApi, dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            api,
            dist_dir: Arc::new(dist_dir.into()),
        }
    }
}

/// Builds the complete router: the config API plus the SPA fallback.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/config", get(get_config).post(post_config))
        .fallback(spa_fallback)
        .with_state(state)
}

/// Binds `settings.bind_addr` and serves until `shutdown` completes.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound (port in use, missing
/// permission) or the server loop fails.
pub async fn run_server<F>(settings: &ServerSettings, api: ConfigApi, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", settings.bind_addr))?;

    info!("Server is running on {}", settings.bind_addr);

    let router = build_router(AppState::new(api, settings.dist_dir.clone()));
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /api/config`: always 200 with the effective configuration.
async fn get_config(State(state): State<AppState>) -> Json<Configuration> {
    Json(state.api.current().await)
}

/// `POST /api/config`: persists the body as the new document.
///
/// Any JSON object is accepted.  A body that is not a JSON object never
/// reaches the store; the extractor's status is returned with an error body.
async fn post_config(
    State(state): State<AppState>,
    payload: Result<Json<Configuration>, JsonRejection>,
) -> Response {
    let Json(config) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("rejected configuration body: {}", rejection.body_text());
            return (rejection.status(), Json(ErrorResponse::new(rejection.body_text())))
                .into_response();
        }
    };

    match state.api.save(config).await {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(e) => {
            warn!("{e}");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(e.to_response())).into_response()
        }
    }
}
