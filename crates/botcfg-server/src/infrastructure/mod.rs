//! Infrastructure layer for botcfg-server.
//!
//! Handles all I/O: binding the listener, routing HTTP requests with axum,
//! and reading the frontend build from disk.
//!
//! # What does NOT belong here?
//!
//! - Deciding what a read or write means (that is `application`)
//! - Reply body definitions (that is `domain`)
//! - Command-line parsing (that is done in `main.rs`)

pub mod http_server;
pub mod spa;

pub use http_server::{build_router, run_server, AppState};
