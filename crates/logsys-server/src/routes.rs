//! Route configuration for the log API.

use std::sync::Arc;

use axum::routing::{get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{add_log, health_check, list_logs};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/logs", get(list_logs).post(add_log))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
