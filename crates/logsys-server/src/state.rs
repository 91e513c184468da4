//! Shared state for request handlers.

use std::sync::Arc;
use std::time::Instant;

use logsys_store::LogStoreTrait;

/// State shared by every handler.
pub struct AppState {
    store: Arc<dyn LogStoreTrait>,
    start_time: Instant,
}

impl AppState {
    /// Create the state around an initialized store.
    pub fn new(store: Arc<dyn LogStoreTrait>) -> Self {
        Self {
            store,
            start_time: Instant::now(),
        }
    }

    /// Get a handle to the log store.
    #[must_use]
    pub fn store(&self) -> Arc<dyn LogStoreTrait> {
        Arc::clone(&self.store)
    }

    /// Seconds since the state was created.
    #[must_use]
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("entries", &self.store.len())
            .field("start_time", &self.start_time)
            .finish()
    }
}
