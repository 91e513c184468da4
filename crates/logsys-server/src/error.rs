//! Error types for the HTTP server.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use logsys_store::LogError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Body returned for every 5xx response. Internal detail is logged, not sent.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Errors that can occur in the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to the specified address.
    #[error("failed to bind to {0}: {1}")]
    BindFailed(std::net::SocketAddr, std::io::Error),

    /// The request could not be decoded.
    #[error("invalid request: {message}")]
    InvalidRequest {
        /// Status chosen by the extractor (400, 415 or 422).
        status: StatusCode,
        /// Why the request was rejected.
        message: String,
    },

    /// The log store rejected or failed the operation.
    #[error(transparent)]
    Store(#[from] LogError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::InvalidRequest { status, message } => (
                *status,
                ErrorResponse {
                    error: "invalid_request",
                    message: message.clone(),
                },
            ),
            Self::Store(err) if err.is_validation() => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "invalid_request",
                    message: err.to_string(),
                },
            ),
            Self::Store(_) | Self::BindFailed(_, _) | Self::Internal(_) => {
                error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "internal_error",
                        message: INTERNAL_ERROR_MESSAGE.to_string(),
                    },
                )
            }
        };

        let json = serde_json::to_string(&body).unwrap_or_else(|_| {
            r#"{"error":"internal_error","message":"Internal server error"}"#.to_string()
        });

        (status, [("content-type", "application/json")], json).into_response()
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}
