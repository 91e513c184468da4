//! Line codec for the backing file.
//!
//! Each entry is one line of the form
//!
//! ```text
//! <ISO-8601 local date-time>|<LEVEL>|<message>
//! ```
//!
//! Fields are not escaped. Decoding splits on the first two separators only,
//! so a message may itself contain `|`. Messages containing line breaks
//! cannot be represented; the store rejects them on append.

use chrono::NaiveDateTime;

use crate::error::RecordError;
use crate::types::{LogEntry, LogLevel};

/// Field separator.
pub const SEPARATOR: char = '|';

/// Format written for timestamps. `%.f` emits only as many fractional digits
/// as needed, so the text form is lossless.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Minute-precision form, accepted on read only.
const TIMESTAMP_FORMAT_MINUTES: &str = "%Y-%m-%dT%H:%M";

/// Serializes an entry to a single line, without the trailing newline.
#[must_use]
pub fn encode(entry: &LogEntry) -> String {
    format!(
        "{}{SEPARATOR}{}{SEPARATOR}{}",
        entry.timestamp().format(TIMESTAMP_FORMAT),
        entry.level(),
        entry.message()
    )
}

/// Parses a line previously produced by [`encode`].
pub fn decode(line: &str) -> Result<LogEntry, RecordError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut parts = line.splitn(3, SEPARATOR);

    let timestamp = parts.next().ok_or(RecordError::MissingField("timestamp"))?;
    let level = parts.next().ok_or(RecordError::MissingField("level"))?;
    let message = parts.next().ok_or(RecordError::MissingField("message"))?;

    let timestamp = parse_timestamp(timestamp)?;
    let level = level
        .parse::<LogLevel>()
        .map_err(|_| RecordError::InvalidLevel(level.to_string()))?;

    Ok(LogEntry::with_timestamp(timestamp, level, message))
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, RecordError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .or_else(|err| {
            NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT_MINUTES).map_err(|_| err)
        })
        .map_err(|source| RecordError::InvalidTimestamp {
            value: value.to_string(),
            source,
        })
}
