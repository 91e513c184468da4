//! Configuration for the log store.

use std::path::PathBuf;

/// Configuration for [`LogStore`](crate::LogStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogStoreConfig {
    /// Path of the backing file.
    pub path: PathBuf,
    /// Whether to fsync file data after every append.
    ///
    /// With this disabled an acknowledged entry can be lost on power failure,
    /// though not on a process crash.
    pub sync_on_append: bool,
}

impl Default for LogStoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("logs/logs.txt"),
            sync_on_append: true,
        }
    }
}

impl LogStoreConfig {
    /// Creates a new config for the given backing file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Sets whether appends are synced to disk.
    #[must_use]
    pub const fn with_sync_on_append(mut self, sync: bool) -> Self {
        self.sync_on_append = sync;
        self
    }
}
