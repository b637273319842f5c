//! Application configuration

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Largest import accepted by default (1 MiB)
pub const DEFAULT_IMPORT_MAX_BYTES: usize = 1024 * 1024;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: IpAddr,
    /// HTTP server port
    pub server_port: u16,
    /// Directory exported activity files are written into
    pub export_dir: PathBuf,
    /// Largest accepted import payload in bytes
    pub import_max_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::from([127, 0, 0, 1]),
            server_port: 3000,
            export_dir: PathBuf::from("./exports"),
            import_max_bytes: DEFAULT_IMPORT_MAX_BYTES,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            bind_addr: env::var("EDITOR_BIND_ADDR")
                .unwrap_or_else(|_| defaults.bind_addr.to_string())
                .parse()
                .context("EDITOR_BIND_ADDR must be a valid IP address")?,

            server_port: env::var("EDITOR_SERVER_PORT")
                .unwrap_or_else(|_| defaults.server_port.to_string())
                .parse()
                .context("EDITOR_SERVER_PORT must be a valid port number")?,

            export_dir: env::var("EDITOR_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),

            import_max_bytes: env::var("EDITOR_IMPORT_MAX_BYTES")
                .unwrap_or_else(|_| defaults.import_max_bytes.to_string())
                .parse()
                .context("EDITOR_IMPORT_MAX_BYTES must be a byte count")?,
        })
    }
}
