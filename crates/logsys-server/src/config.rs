//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use logsys_store::LogStoreConfig;

/// Configuration for the log server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP server to.
    pub bind_addr: SocketAddr,
    /// Backing file for the log store.
    pub log_file: PathBuf,
    /// Fsync the backing file after each append.
    pub sync_on_append: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_file: PathBuf::from("logs/logs.txt"),
            sync_on_append: true,
        }
    }
}

impl ServerConfig {
    /// Create a new configuration with the specified bind address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            ..Self::default()
        }
    }

    /// Set the backing file path.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Set whether appends are synced to disk.
    #[must_use]
    pub const fn with_sync_on_append(mut self, sync: bool) -> Self {
        self.sync_on_append = sync;
        self
    }

    /// Store configuration derived from this server configuration.
    #[must_use]
    pub fn store_config(&self) -> LogStoreConfig {
        LogStoreConfig::new(&self.log_file).with_sync_on_append(self.sync_on_append)
    }
}
