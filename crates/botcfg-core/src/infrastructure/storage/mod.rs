//! Storage infrastructure: where the persisted configuration document lives.
//!
//! Both stores implement [`ConfigStore`](crate::application::store::ConfigStore):
//!
//! - `file` – one JSON file at a fixed path.  Used by the server.
//! - `memory` – a byte buffer behind a mutex.  Used by tests and by callers
//!   that embed the resolver without a filesystem.

pub mod file;
pub mod memory;

pub use file::FileConfigStore;
pub use memory::InMemoryConfigStore;
