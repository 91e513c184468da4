//! Command-line arguments for the `logsys` binary.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::config::ServerConfig;

/// Append-only log server.
#[derive(Debug, Parser)]
#[command(name = "logsys", version, about)]
pub struct Cli {
    /// Address to listen on.
    #[arg(long, env = "LOGSYS_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Backing file for stored entries.
    #[arg(long, env = "LOGSYS_FILE", default_value = "logs/logs.txt")]
    pub log_file: PathBuf,

    /// Skip the fsync after each append.
    #[arg(long)]
    pub no_sync: bool,
}

impl Cli {
    /// Build the server configuration from the parsed arguments.
    #[must_use]
    pub fn config(&self) -> ServerConfig {
        ServerConfig::new(self.bind)
            .with_log_file(&self.log_file)
            .with_sync_on_append(!self.no_sync)
    }
}
