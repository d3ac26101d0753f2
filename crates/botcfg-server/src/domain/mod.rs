//! Domain layer for botcfg-server.
//!
//! Plain types only: the server settings and the JSON bodies the HTTP API
//! returns.  Reading the command line or the environment happens in
//! `main.rs`; sockets and files belong to the infrastructure layer.

pub mod messages;
pub mod settings;

pub use messages::{ErrorResponse, SaveConfigResponse};
pub use settings::ServerSettings;
