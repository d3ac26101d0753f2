//! # botcfg-core
//!
//! Configuration resolution and persistence for the bot configuration
//! service.  The service combines two sources into one *effective
//! configuration*:
//!
//! - an **environment snapshot**, captured once at process start from the
//!   `BOT_*` environment variables, and
//! - a **persisted document**, a flat JSON object stored in a single file
//!   that is replaced wholesale on every save.
//!
//! On every read the persisted document is loaded fresh and merged field by
//! field over the snapshot.  A missing, unreadable or malformed document is
//! not an error from the caller's point of view: the snapshot is returned
//! unchanged.
//!
//! # Layout
//!
//! ```text
//! domain/          Configuration, ConfigField, merge rule, EnvironmentSnapshot
//! application/     ConfigStore trait, ConfigResolver (resolve + persist)
//! infrastructure/  process environment reader, file and in-memory stores
//! ```
//!
//! `domain` does no I/O.  `application` depends only on `domain` and the
//! `ConfigStore` abstraction, so the resolver can be tested against
//! [`InMemoryConfigStore`] without touching the filesystem.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::resolve_config::{ConfigError, ConfigResolver};
pub use application::store::{ConfigStore, StoreError};
pub use domain::configuration::{ConfigField, Configuration, FieldKind};
pub use domain::merge::{merge, Precedence};
pub use domain::snapshot::EnvironmentSnapshot;
pub use infrastructure::env::load_environment_snapshot;
pub use infrastructure::storage::{FileConfigStore, InMemoryConfigStore};
