//! Application layer: resolving and persisting the effective configuration.
//!
//! - **`store`** – the [`ConfigStore`] abstraction over "one document that can
//!   be read whole and replaced whole".
//! - **`resolve_config`** – [`ConfigResolver`], which owns the environment
//!   snapshot and a store and implements the read and write use cases.
//!
//! Nothing here knows whether the store is a file, memory, or something
//! else; implementations live in `infrastructure::storage`.

pub mod resolve_config;
pub mod store;

pub use resolve_config::{ConfigError, ConfigResolver};
pub use store::{ConfigStore, StoreError};
