//! The file-backed log store.
//!
//! This module provides:
//! - [`LogStore`] — Append-only log storage mirrored in memory and on disk

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::config::LogStoreConfig;
use crate::error::{LogError, Result};
use crate::record;
use crate::types::{LogEntry, LogLevel};

/// Operations the appender needs from the backing file.
trait BackingFile: Write + Send {
    fn sync_data(&self) -> io::Result<()>;
    fn set_len(&self, len: u64) -> io::Result<()>;
}

impl BackingFile for File {
    fn sync_data(&self) -> io::Result<()> {
        File::sync_data(self)
    }

    fn set_len(&self, len: u64) -> io::Result<()> {
        File::set_len(self, len)
    }
}

/// Append handle to the backing file.
struct Appender {
    path: PathBuf,
    file: Box<dyn BackingFile>,
    /// Length of the file after the last acknowledged append.
    len: u64,
}

impl Appender {
    fn write_line(&mut self, line: &str, sync: bool) -> Result<()> {
        if let Err(source) = self.file.write_all(line.as_bytes()) {
            self.rollback();
            return Err(LogError::io("write", &self.path, source));
        }
        if sync {
            if let Err(source) = self.file.sync_data() {
                self.rollback();
                return Err(LogError::io("sync", &self.path, source));
            }
        }
        self.len += line.len() as u64;
        Ok(())
    }

    /// Drops any bytes of a failed append so the next line starts clean.
    fn rollback(&self) {
        if let Err(err) = self.file.set_len(self.len) {
            warn!(
                path = %self.path.display(),
                len = self.len,
                error = %err,
                "failed to truncate partial append"
            );
        }
    }
}

/// Append-only log store.
///
/// Entries are kept in memory in append order and every accepted entry is
/// written to the backing file before it becomes visible to readers. A store
/// only exists once [`LogStore::open`] has replayed the backing file.
pub struct LogStore {
    config: LogStoreConfig,
    /// All entries, in file order.
    entries: RwLock<Vec<LogEntry>>,
    /// Serializes writers across the file write and the memory push.
    appender: Mutex<Appender>,
}

impl LogStore {
    /// Opens the store, replaying the backing file into memory.
    ///
    /// Missing parent directories and a missing backing file are created.
    /// Any read or decode failure aborts with an error; the caller should not
    /// serve requests in that case.
    pub fn open(config: LogStoreConfig) -> Result<Self> {
        Self::open_with(config, |file| -> Box<dyn BackingFile> { Box::new(file) })
    }

    fn open_with(
        config: LogStoreConfig,
        wrap: impl FnOnce(File) -> Box<dyn BackingFile>,
    ) -> Result<Self> {
        let path = config.path.clone();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| LogError::io("create directory", parent, e))?;
        }

        let (entries, terminated) = match File::open(&path) {
            Ok(file) => replay(&path, file)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "creating empty log file");
                (Vec::new(), true)
            }
            Err(e) => return Err(LogError::io("open", &path, e)),
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::io("open", &path, e))?;
        let mut appender = Appender {
            len: file
                .metadata()
                .map_err(|e| LogError::io("stat", &path, e))?
                .len(),
            path: path.clone(),
            file: wrap(file),
        };

        if !terminated {
            warn!(path = %path.display(), "terminating unfinished last line");
            appender.write_line("\n", config.sync_on_append)?;
        }

        info!(path = %path.display(), entries = entries.len(), "log store ready");

        Ok(Self {
            config,
            entries: RwLock::new(entries),
            appender: Mutex::new(appender),
        })
    }

    /// Validates `level` and appends a new entry stamped with the current time.
    ///
    /// An unknown level or a message containing a line break is rejected
    /// before anything is touched.
    pub fn append(&self, level: &str, message: impl Into<String>) -> Result<LogEntry> {
        let level = level.parse::<LogLevel>()?;
        self.append_level(level, message)
    }

    /// Appends a new entry at an already-validated level.
    ///
    /// The line is written (and synced, if configured) before the entry is
    /// pushed to memory. If the write fails the in-memory sequence is left
    /// unchanged.
    pub fn append_level(&self, level: LogLevel, message: impl Into<String>) -> Result<LogEntry> {
        let message = message.into();
        // One record per line; a line break would split the entry on replay.
        if message.contains(['\n', '\r']) {
            return Err(LogError::InvalidMessage);
        }

        let mut appender = self.appender.lock();

        // Stamped under the writer lock so file order is timestamp order.
        let entry = LogEntry::now(level, message);
        let mut line = record::encode(&entry);
        line.push('\n');

        if let Err(err) = appender.write_line(&line, self.config.sync_on_append) {
            warn!(level = %level, error = %err, "append failed");
            return Err(err);
        }
        self.entries.write().push(entry.clone());
        drop(appender);

        debug!(level = %level, "appended log entry");
        Ok(entry)
    }

    /// Returns entries, optionally restricted to one level.
    ///
    /// `None` or a blank filter returns everything. Any other value must be
    /// an exact level name.
    pub fn query(&self, level: Option<&str>) -> Result<Vec<LogEntry>> {
        let level = match level {
            Some(l) if !l.trim().is_empty() => Some(l.parse::<LogLevel>()?),
            _ => None,
        };
        Ok(self.entries(level))
    }

    /// Returns a snapshot of the entries, in append order.
    #[must_use]
    pub fn entries(&self, level: Option<LogLevel>) -> Vec<LogEntry> {
        let entries = self.entries.read();
        match level {
            Some(level) => entries
                .iter()
                .filter(|e| e.level() == level)
                .cloned()
                .collect(),
            None => entries.clone(),
        }
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.config.path
    }
}

impl std::fmt::Debug for LogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogStore")
            .field("config", &self.config)
            .field("entries", &self.len())
            .finish_non_exhaustive()
    }
}

/// Reads every line of the backing file. A blank line is corrupt like any
/// other line that does not hold three fields.
///
/// Also reports whether the file ends in a newline, so a torn final line is
/// not glued onto the next append.
fn replay(path: &Path, file: File) -> Result<(Vec<LogEntry>, bool)> {
    let mut reader = BufReader::new(file);
    let mut entries = Vec::new();
    let mut buf = String::new();
    let mut line_no = 0;
    let mut terminated = true;

    loop {
        buf.clear();
        let read = reader
            .read_line(&mut buf)
            .map_err(|e| LogError::io("read", path, e))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let line = match buf.strip_suffix('\n') {
            Some(line) => line,
            None => {
                terminated = false;
                &buf
            }
        };
        let entry = record::decode(line).map_err(|source| LogError::Corrupt {
            path: path.to_path_buf(),
            line: line_no,
            source,
        })?;
        entries.push(entry);
    }

    Ok((entries, terminated))
}
