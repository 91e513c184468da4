//! # logsys-server
//!
//! HTTP front end for [`logsys_store`].
//!
//! ## API Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/logs` | POST | Append `{ "level": ..., "message": ... }` |
//! | `/logs?level=LEVEL` | GET | List entries in append order, optionally filtered |
//! | `/health` | GET | Liveness and entry count |
//!
//! Invalid levels answer `400` with the validation message. Storage
//! failures answer `500` with a generic body; the detail is only logged.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

// Re-export main types
pub use cli::Cli;
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::LogServer;
pub use state::AppState;
