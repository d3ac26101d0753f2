//! Domain layer: the configuration model and the rules that combine sources.
//!
//! Nothing in here reads the environment, touches the filesystem or knows
//! about HTTP.  The environment snapshot is built from a lookup function so
//! the coercion rules can be exercised without mutating process state.

pub mod configuration;
pub mod merge;
pub mod snapshot;

pub use configuration::{ConfigField, Configuration, FieldKind};
pub use merge::{merge, Precedence};
pub use snapshot::EnvironmentSnapshot;
