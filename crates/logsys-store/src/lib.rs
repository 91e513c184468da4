//! # logsys-store
//!
//! Append-only log storage backed by a plain text file.
//!
//! This crate provides:
//!
//! - [`LogEntry`] — Immutable (timestamp, level, message) records
//! - [`LogLevel`] — The accepted severities (`INFO`, `WARN`, `ERROR`)
//! - [`LogStore`] — In-memory mirror of the backing file with durable append
//! - [`LogStoreConfig`] — Backing file location and sync policy
//! - [`LogStoreTrait`] — Abstract store surface for request handlers
//! - [`record`] — The `timestamp|LEVEL|message` line codec
//!
//! ## Example
//!
//! ```rust,no_run
//! use logsys_store::{LogStore, LogStoreConfig};
//!
//! # fn main() -> logsys_store::Result<()> {
//! // Replays logs/logs.txt, creating it if needed
//! let store = LogStore::open(LogStoreConfig::default())?;
//!
//! store.append("INFO", "server started")?;
//! store.append("ERROR", "disk full")?;
//!
//! let errors = store.query(Some("ERROR"))?;
//! assert_eq!(errors.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod record;
pub mod store;
pub mod traits;
pub mod types;

// Re-export main types
pub use config::LogStoreConfig;
pub use error::{ErrorKind, LogError, RecordError, Result};
pub use store::LogStore;
pub use traits::LogStoreTrait;
pub use types::{LogEntry, LogLevel};
