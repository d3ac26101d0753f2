//! Bot configuration server: entry point.
//!
//! Serves the bot's effective configuration over HTTP and hosts the built
//! frontend that edits it.
//!
//! # Usage
//!
//! ```text
//! botcfg-server [OPTIONS]
//!
//! Options:
//!   --port        <PORT>  HTTP listener port [default: 3001]
//!   --bind        <ADDR>  IP address to bind [default: 0.0.0.0]
//!   --config-file <PATH>  Persisted configuration document [default: bot-config.json]
//!   --dist-dir    <PATH>  Built frontend directory [default: dist]
//! ```
//!
//! # Environment variables
//!
//! Server options fall back to these when the flag is not given:
//!
//! | Variable          | Default           | Description                    |
//! |-------------------|-------------------|--------------------------------|
//! | `PORT`            | `3001`            | HTTP listener port             |
//! | `BOT_CONFIG_BIND` | `0.0.0.0`         | Bind address                   |
//! | `BOT_CONFIG_FILE` | `bot-config.json` | Persisted configuration file   |
//! | `BOT_CONFIG_DIST` | `dist`            | Built frontend directory       |
//!
//! The bot configuration defaults come from `BOT_NAME`, `BOT_PREFIX`,
//! `BOT_OWNER_ID`, `BOT_ACTIVITY_TYPE`, `BOT_STATUS_TEXT`,
//! `BOT_ONLINE_STATUS`, `BOT_DEBUG_MODE`, `BOT_DEVELOPER_MODE` and
//! `BOT_SYNC_COMMANDS`, read once at startup.  A `.env` file in the working
//! directory is loaded first; variables already set in the process win.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use botcfg_core::{load_environment_snapshot, ConfigResolver, FileConfigStore};
use botcfg_server::application::ConfigApi;
use botcfg_server::domain::ServerSettings;
use botcfg_server::infrastructure::run_server;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Bot configuration server.
#[derive(Debug, Parser)]
#[command(
    name = "botcfg-server",
    about = "Serves and persists bot configuration over HTTP",
    version
)]
struct Cli {
    /// TCP port for the HTTP server.
    #[arg(long, default_value_t = 3001, env = "PORT")]
    port: u16,

    /// IP address to bind the HTTP server to.
    #[arg(long, default_value = "0.0.0.0", env = "BOT_CONFIG_BIND")]
    bind: String,

    /// Path of the persisted configuration document.
    #[arg(long, default_value = "bot-config.json", env = "BOT_CONFIG_FILE")]
    config_file: PathBuf,

    /// Directory holding the built frontend.
    #[arg(long, default_value = "dist", env = "BOT_CONFIG_DIST")]
    dist_dir: PathBuf,
}

impl Cli {
    /// Converts the parsed CLI arguments into [`ServerSettings`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--bind` is not a valid IP address.
    fn into_server_settings(self) -> anyhow::Result<ServerSettings> {
        let bind_addr: SocketAddr = format!("{}:{}", self.bind, self.port)
            .parse()
            .with_context(|| format!("invalid bind address: '{}:{}'", self.bind, self.port))?;

        Ok(ServerSettings {
            bind_addr,
            config_file: self.config_file,
            dist_dir: self.dist_dir,
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `.env` has to be applied before anything reads the environment,
    // including RUST_LOG below.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match dotenv {
        Ok(path) => info!("loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("ignoring unreadable .env file: {e}"),
    }

    let settings = Cli::parse().into_server_settings()?;

    // The only read of the BOT_* variables for the life of the process.
    let snapshot = load_environment_snapshot();
    let store = FileConfigStore::new(settings.config_file.clone());
    let api = ConfigApi::new(ConfigResolver::new(snapshot, Arc::new(store)));

    info!(
        "bot config server starting: http={}, config={}, dist={}",
        settings.bind_addr,
        settings.config_file.display(),
        settings.dist_dir.display()
    );

    run_server(&settings, api, shutdown_signal()).await?;

    info!("bot config server stopped");
    Ok(())
}

/// Resolves on Ctrl+C (SIGINT on Unix).
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl+C; shutting down"),
        Err(e) => {
            tracing::error!("failed to listen for Ctrl+C signal: {e}");
            // Without a signal handler, run until killed.
            std::future::pending::<()>().await;
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        // Arrange / Act
        let cli = Cli::parse_from(["botcfg-server"]);

        // Assert
        assert_eq!(cli.port, 3001);
        assert_eq!(cli.bind, "0.0.0.0");
        assert_eq!(cli.config_file, PathBuf::from("bot-config.json"));
        assert_eq!(cli.dist_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_cli_port_override() {
        let cli = Cli::parse_from(["botcfg-server", "--port", "8080"]);
        assert_eq!(cli.port, 8080);
    }

    #[test]
    fn test_cli_path_overrides() {
        let cli = Cli::parse_from([
            "botcfg-server",
            "--config-file",
            "/var/lib/bot/config.json",
            "--dist-dir",
            "/srv/bot/dist",
        ]);
        assert_eq!(cli.config_file, PathBuf::from("/var/lib/bot/config.json"));
        assert_eq!(cli.dist_dir, PathBuf::from("/srv/bot/dist"));
    }

    #[test]
    fn test_default_cli_matches_default_settings() {
        let settings = Cli::parse_from(["botcfg-server"])
            .into_server_settings()
            .unwrap();
        assert_eq!(settings, ServerSettings::default());
    }

    #[test]
    fn test_into_server_settings_custom_bind() {
        let cli = Cli::parse_from(["botcfg-server", "--bind", "127.0.0.1", "--port", "9000"]);
        let settings = cli.into_server_settings().unwrap();
        assert_eq!(settings.bind_addr.to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn test_into_server_settings_invalid_bind_returns_error() {
        // Arrange
        let cli = Cli {
            port: 3001,
            bind: "not.an.ip".to_string(),
            config_file: PathBuf::from("bot-config.json"),
            dist_dir: PathBuf::from("dist"),
        };

        // Act
        let result = cli.into_server_settings();

        // Assert
        assert!(result.is_err());
    }
}
