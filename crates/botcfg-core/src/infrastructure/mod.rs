//! Infrastructure layer: the process environment and concrete stores.
//!
//! - **`env`** – reads the `BOT_*` variables into an [`EnvironmentSnapshot`].
//! - **`storage`** – [`FileConfigStore`] (production) and
//!   [`InMemoryConfigStore`] (tests and embedding).
//!
//! [`EnvironmentSnapshot`]: crate::domain::EnvironmentSnapshot
//! [`FileConfigStore`]: storage::FileConfigStore
//! [`InMemoryConfigStore`]: storage::InMemoryConfigStore

pub mod env;
pub mod storage;
