//! Error types for the log store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the log store.
#[derive(Debug, Error)]
pub enum LogError {
    /// The supplied level is not one of `INFO`, `WARN`, `ERROR`.
    ///
    /// The display text is safe to show to end users verbatim.
    #[error("Invalid log level. Allowed values: INFO, WARN, ERROR")]
    InvalidLevel(String),

    /// The message contains `\n` or `\r`, which the line format cannot hold.
    #[error("Invalid log message. Line breaks are not allowed")]
    InvalidMessage,

    /// A file system operation on the backing file failed.
    #[error("failed to {op} {}: {source}", path.display())]
    Io {
        /// What was being attempted.
        op: &'static str,
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A persisted line could not be decoded during replay.
    #[error("corrupt record at {}:{line}: {source}", path.display())]
    Corrupt {
        /// The backing file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Why the line was rejected.
        #[source]
        source: RecordError,
    },
}

/// Errors decoding a single persisted line.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The line has fewer than three `|`-separated fields.
    #[error("missing {0} field")]
    MissingField(&'static str),

    /// The timestamp field is not an ISO-8601 local date-time.
    #[error("invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        /// The offending field.
        value: String,
        /// The parse failure.
        #[source]
        source: chrono::ParseError,
    },

    /// The level field is outside the accepted set.
    #[error("invalid level {0:?}")]
    InvalidLevel(String),
}

/// Coarse classification of a [`LogError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller input was rejected; recoverable by the caller.
    Validation,
    /// The backing storage failed.
    Persistence,
}

impl LogError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLevel(_) | Self::InvalidMessage => ErrorKind::Validation,
            Self::Io { .. } | Self::Corrupt { .. } => ErrorKind::Persistence,
        }
    }

    /// Returns true if the caller's input was at fault.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation)
    }

    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for log store operations.
pub type Result<T> = std::result::Result<T, LogError>;
