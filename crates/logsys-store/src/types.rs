//! Core types for the log store.
//!
//! This module provides:
//! - [`LogLevel`] — The closed set of accepted severities
//! - [`LogEntry`] — An immutable (timestamp, level, message) record

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Log severity levels accepted by the store.
///
/// The set is closed: anything other than `INFO`, `WARN` or `ERROR` is
/// rejected before an entry is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// General information
    Info,
    /// Warning conditions
    Warn,
    /// Error conditions
    Error,
}

impl LogLevel {
    /// Every accepted level, in severity order.
    pub const ALL: [Self; 3] = [Self::Info, Self::Warn, Self::Error];

    /// Returns the canonical (upper-case) representation of this level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the canonical names.
impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INFO" => Ok(Self::Info),
            "WARN" => Ok(Self::Warn),
            "ERROR" => Ok(Self::Error),
            other => Err(LogError::InvalidLevel(other.to_string())),
        }
    }
}

/// A single log record.
///
/// Entries are never mutated after construction; the fields are only
/// reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    level: LogLevel,
    message: String,
    timestamp: NaiveDateTime,
}

impl LogEntry {
    /// Creates an entry stamped with the current local wall-clock time.
    #[must_use]
    pub fn now(level: LogLevel, message: impl Into<String>) -> Self {
        Self::with_timestamp(Local::now().naive_local(), level, message)
    }

    /// Creates an entry with an explicit timestamp (used by replay).
    #[must_use]
    pub fn with_timestamp(
        timestamp: NaiveDateTime,
        level: LogLevel,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp,
        }
    }

    /// Severity of this entry.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// The log message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// When the entry was created.
    #[must_use]
    pub const fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}
