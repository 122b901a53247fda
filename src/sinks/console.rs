//! Console sink implementation

use crate::core::{LogEntry, LogFilter, Result, Sink};
use std::io::Write;

/// Writes accepted entries to the process's standard error stream, one
/// message per line, flushed immediately.
///
/// The output is the raw message text so piped diagnostics stay parseable;
/// priority-based coloring is opt-in via [`ConsoleSink::with_colors`].
pub struct ConsoleSink {
    filter: LogFilter,
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            filter: LogFilter::default(),
            use_colors: false,
        }
    }

    /// Set this sink's private filter
    #[must_use]
    pub fn with_filter(mut self, filter: LogFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Enable ANSI coloring of the message by entry priority
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn render(&self, entry: &LogEntry) -> String {
        if self.use_colors {
            use colored::Colorize;
            entry
                .message
                .color(entry.priority.color_code())
                .to_string()
        } else {
            entry.message.clone()
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn submit(&mut self, entry: &LogEntry) -> Result<()> {
        if !self.filter.should_log(entry.category, entry.priority) {
            return Ok(());
        }

        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "{}", self.render(entry))?;
        stderr.flush()?;
        Ok(())
    }

    fn filter(&self) -> LogFilter {
        self.filter
    }

    fn set_filter(&mut self, filter: LogFilter) {
        self.filter = filter;
    }

    fn is_console_like(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "console"
    }
}
