//! Application layer for botcfg-server.
//!
//! Knows *what* the API does with a request (resolve, persist, pick the
//! reply) but not *how* the request arrived.  The axum handlers in
//! `infrastructure::http_server` are thin wrappers around [`ConfigApi`].

pub mod config_api;

pub use config_api::{ApiError, ConfigApi};
