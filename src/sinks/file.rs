//! File sink implementation

use crate::core::{LogEntry, LogFilter, LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Appends accepted entries to a file as
/// `<category-label>:<numeric-priority>:<origin>:<line>:<message>` lines.
///
/// The line format is a stable artifact parsed by external tooling. The
/// target is opened in truncate mode at construction; an open failure is
/// surfaced from [`FileSink::new`] so a silently dead log file cannot go
/// unnoticed.
pub struct FileSink {
    path: PathBuf,
    filter: LogFilter,
    writer: BufWriter<File>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>, filter: LogFilter) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| LoggerError::file_sink(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            path,
            filter,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn submit(&mut self, entry: &LogEntry) -> Result<()> {
        if !self.filter.should_log(entry.category, entry.priority) {
            return Ok(());
        }

        writeln!(
            self.writer,
            "{}:{}:{}:{}:{}",
            entry.category.label(),
            entry.priority.as_num(),
            entry.origin,
            entry.line,
            entry.message
        )?;
        self.writer.flush()?;
        Ok(())
    }

    fn filter(&self) -> LogFilter {
        self.filter
    }

    fn set_filter(&mut self, filter: LogFilter) {
        self.filter = filter;
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.writer.flush();
    }
}
