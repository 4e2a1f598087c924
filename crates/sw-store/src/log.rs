//! Timestamped append-only activity log.
//!
//! One entry per line, `[YYYY-MM-DD HH:MM:SS] message`. Messages are
//! escaped before writing so an embedded newline cannot split an entry
//! across lines.

use std::fmt::Write as _;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::StoreResult;

/// An append-only activity log backed by a text file.
#[derive(Debug, Clone)]
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    /// A log backed by the given file. The file is created on first
    /// append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file the log writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry stamped with the current local time.
    pub fn append(&self, message: &str) -> StoreResult<()> {
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "[{stamp}] {}", escape_message(message))?;
        Ok(())
    }

    /// Every entry, oldest first. A missing file reads as an empty log.
    pub fn entries(&self) -> StoreResult<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// The last `count` entries, oldest first.
    pub fn tail(&self, count: usize) -> StoreResult<Vec<String>> {
        let mut entries = self.entries()?;
        let skip = entries.len().saturating_sub(count);
        Ok(entries.split_off(skip))
    }
}

/// Escape a message for single-line logging: line breaks and tabs become
/// `\n`, `\r`, `\t`, backslashes are doubled, and other control
/// characters are written as `\xNN`.
fn escape_message(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    for ch in message.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
