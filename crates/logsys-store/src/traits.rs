//! Traits for log storage backends.
//!
//! [`LogStoreTrait`] is the surface request handlers program against, so
//! they can be exercised without a real backing file.

use crate::error::Result;
use crate::store::LogStore;
use crate::types::LogEntry;

/// Trait for log storage backends.
pub trait LogStoreTrait: Send + Sync {
    /// Validates and appends a new entry.
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad input, or a persistence error if
    /// the entry could not be stored.
    fn append(&self, level: &str, message: &str) -> Result<LogEntry>;

    /// Returns entries in append order, optionally filtered by level.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the filter is not a known level.
    fn query(&self, level: Option<&str>) -> Result<Vec<LogEntry>>;

    /// Returns the number of stored entries.
    fn len(&self) -> usize;

    /// Returns true if the store is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogStoreTrait for LogStore {
    fn append(&self, level: &str, message: &str) -> Result<LogEntry> {
        LogStore::append(self, level, message)
    }

    fn query(&self, level: Option<&str>) -> Result<Vec<LogEntry>> {
        LogStore::query(self, level)
    }

    fn len(&self) -> usize {
        LogStore::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogStoreConfig;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn trait_object_delegates_to_store() {
        let dir = TempDir::new().expect("create temp dir");
        let store = LogStore::open(LogStoreConfig::new(dir.path().join("logs.txt")))
            .expect("open store");
        let backend: Arc<dyn LogStoreTrait> = Arc::new(store);

        assert!(backend.is_empty());
        backend.append("INFO", "server started").expect("append");
        backend.append("ERROR", "disk full").expect("append");

        assert_eq!(backend.len(), 2);
        let errors = backend.query(Some("ERROR")).expect("query");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message(), "disk full");
        assert!(backend.query(Some("DEBUG")).is_err());
        assert!(backend.append("INFO", "two\nlines").is_err());
    }
}
