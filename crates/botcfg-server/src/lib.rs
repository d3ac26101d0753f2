//! botcfg-server library crate.
//!
//! Serves the bot configuration over HTTP and hosts the built frontend.
//!
//! # Architecture
//!
//! ```text
//! Browser / frontend  (JSON over HTTP)
//!         ↕
//! [botcfg-server]
//!   ├── domain/          ServerSettings, JSON reply bodies
//!   ├── application/     ConfigApi: resolver outcomes → replies
//!   └── infrastructure/
//!         ├── http_server/  axum router, handlers, serve loop
//!         └── spa/          fallback: static assets + index.html
//!         ↕
//! [botcfg-core]  ConfigResolver → FileConfigStore (bot-config.json)
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O and no framework types.
//! - `application` depends on `domain` and `botcfg-core` only.
//! - `infrastructure` owns axum, sockets and the filesystem.

/// Domain layer: settings and reply types (no I/O).
pub mod domain;

/// Application layer: the read/write configuration use cases.
pub mod application;

/// Infrastructure layer: HTTP server and SPA fallback.
pub mod infrastructure;
