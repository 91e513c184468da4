//! HTTP request handlers for the log API.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use logsys_store::{LogEntry, LogStoreTrait};
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Body of `POST /logs`.
#[derive(Debug, Deserialize)]
pub struct AddLogRequest {
    /// Severity; missing is treated as invalid.
    #[serde(default)]
    pub level: Option<String>,
    /// Message text.
    #[serde(default)]
    pub message: String,
}

/// Query parameters for `GET /logs`.
#[derive(Debug, Deserialize)]
pub struct LogQuery {
    /// Exact level to filter by.
    pub level: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status message.
    pub status: String,
    /// Number of stored entries.
    pub entries: usize,
    /// Server uptime in seconds.
    pub uptime_secs: u64,
}

/// Handle POST /logs - append an entry.
pub async fn add_log(
    State(state): State<Arc<AppState>>,
    request: Result<Json<AddLogRequest>, JsonRejection>,
) -> ServerResult<&'static str> {
    let Json(request) = request?;
    let store = state.store();
    let level = request.level.unwrap_or_default();

    // File I/O blocks, keep it off the async workers.
    tokio::task::spawn_blocking(move || store.append(&level, &request.message))
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))??;

    Ok("Log added successfully")
}

/// Handle GET /logs - list entries, optionally filtered by level.
pub async fn list_logs(
    State(state): State<Arc<AppState>>,
    query: Result<Query<LogQuery>, QueryRejection>,
) -> ServerResult<Json<Vec<LogEntry>>> {
    let Query(query) = query?;
    let entries = state.store().query(query.level.as_deref())?;
    Ok(Json(entries))
}

/// Handle GET /health - health check endpoint.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        entries: state.store().len(),
        uptime_secs: state.uptime_secs(),
    })
}
