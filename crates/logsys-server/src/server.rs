//! Log server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use logsys_store::{LogStore, LogStoreTrait};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::routes::create_router;
use crate::state::AppState;

/// HTTP server over a [`LogStore`].
///
/// Construction replays the backing file, so a `LogServer` never serves
/// requests against a store in an unknown state.
#[derive(Debug, Clone)]
pub struct LogServer {
    state: Arc<AppState>,
}

impl LogServer {
    /// Initialize the store described by `config` and wrap it in a server.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file cannot be created or replayed.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let store = LogStore::open(config.store_config())?;
        Ok(Self::with_store(Arc::new(store)))
    }

    /// Create a server around an already-initialized store.
    #[must_use]
    pub fn with_store(store: Arc<dyn LogStoreTrait>) -> Self {
        let state = Arc::new(AppState::new(store));
        Self { state }
    }

    /// Get the shared state.
    #[must_use]
    pub fn state(&self) -> Arc<AppState> {
        self.state.clone()
    }

    /// Get a handle to the log store.
    #[must_use]
    pub fn store(&self) -> Arc<dyn LogStoreTrait> {
        self.state.store()
    }

    /// Start the server and listen for connections.
    ///
    /// This method runs until the server encounters a fatal error.
    ///
    /// # Errors
    ///
    /// Returns an error if binding to the address fails.
    pub async fn serve(&self, addr: SocketAddr) -> ServerResult<()> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindFailed(addr, e))?;

        info!(addr = %addr, "Log server listening");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;

        Ok(())
    }

    /// Start the server with graceful shutdown support.
    ///
    /// The server will shut down when the provided future completes.
    ///
    /// # Errors
    ///
    /// Returns an error if binding to the address fails.
    pub async fn serve_with_shutdown<F>(&self, addr: SocketAddr, shutdown: F) -> ServerResult<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindFailed(addr, e))?;

        info!(addr = %addr, "Log server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;

        info!("Log server shut down");
        Ok(())
    }

    /// Create the router without starting the server.
    pub fn router(&self) -> axum::Router {
        create_router(self.state.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_test_server() -> (LogServer, TempDir) {
        let dir = TempDir::new().unwrap();
        let config = ServerConfig::default().with_log_file(dir.path().join("logs/logs.txt"));
        (LogServer::new(config).unwrap(), dir)
    }

    #[test]
    fn test_server_creation_initializes_store() {
        let (server, dir) = make_test_server();

        assert!(server.store().is_empty());
        assert!(dir.path().join("logs/logs.txt").exists());
    }

    #[test]
    fn test_server_replays_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs.txt");
        fs::write(&path, "2024-01-01T10:15:30|INFO|server started\n").unwrap();

        let server = LogServer::new(ServerConfig::default().with_log_file(&path)).unwrap();

        assert_eq!(server.store().len(), 1);
    }

    #[test]
    fn test_server_refuses_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs.txt");
        fs::write(&path, "garbage\n").unwrap();

        let result = LogServer::new(ServerConfig::default().with_log_file(&path));

        assert!(matches!(result, Err(ServerError::Store(_))));
    }

    #[test]
    fn test_server_clone_shares_store() {
        let (server, _dir) = make_test_server();
        let cloned = server.clone();

        server.store().append("INFO", "shared").unwrap();
        assert_eq!(server.state().store().len(), 1);
        assert_eq!(cloned.store().len(), 1);
    }

    #[tokio::test]
    async fn test_serve_with_shutdown() {
        let (server, _dir) = make_test_server();

        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let server_handle = tokio::spawn(async move {
            server
                .serve_with_shutdown(addr, async move {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        let _ = shutdown_tx.send(());

        let result = tokio::time::timeout(std::time::Duration::from_secs(1), server_handle).await;

        assert!(result.is_ok());
    }
}
