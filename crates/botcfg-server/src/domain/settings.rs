//! Server settings.
//!
//! [`ServerSettings`] is built once at startup from CLI arguments (see
//! `main.rs`) or from defaults in tests.  It is not the bot configuration
//! itself; it only says where to listen and where the files live.

use std::net::SocketAddr;
use std::path::PathBuf;

use botcfg_core::infrastructure::storage::file::DEFAULT_CONFIG_FILE;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3001;

/// Default directory of the built frontend.
pub const DEFAULT_DIST_DIR: &str = "dist";

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    /// Address and port the HTTP listener binds to.
    pub bind_addr: SocketAddr,

    /// The persisted configuration document.  Relative paths resolve against
    /// the working directory.
    pub config_file: PathBuf,

    /// Directory holding the built frontend (`index.html` and assets).
    pub dist_dir: PathBuf,
}

impl Default for ServerSettings {
    /// | Field       | Default           |
    /// |-------------|-------------------|
    /// | bind_addr   | `0.0.0.0:3001`    |
    /// | config_file | `bot-config.json` |
    /// | dist_dir    | `dist`            |
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
