//! Platform debug channel sink

use crate::core::{LogEntry, LogFilter, Result, Sink};
use chrono::Utc;

#[cfg(windows)]
#[link(name = "kernel32")]
extern "system" {
    fn OutputDebugStringW(lp_output_string: *const u16);
}

/// Forwards accepted entries, prefixed with a UTC timestamp, to the
/// platform debug channel (`OutputDebugStringW` on Windows).
///
/// On platforms without a debug channel the sink accepts entries and emits
/// nothing; keeping it registered is harmless.
pub struct DebugSink {
    filter: LogFilter,
}

impl DebugSink {
    pub fn new() -> Self {
        Self {
            filter: LogFilter::default(),
        }
    }

    /// Set this sink's private filter
    #[must_use]
    pub fn with_filter(mut self, filter: LogFilter) -> Self {
        self.filter = filter;
        self
    }

    fn render(entry: &LogEntry) -> String {
        format!(
            "[{}] {}\r\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            entry.message
        )
    }

    #[cfg(windows)]
    fn emit(rendered: &str) {
        let wide: Vec<u16> = rendered.encode_utf16().chain(std::iter::once(0)).collect();
        unsafe {
            OutputDebugStringW(wide.as_ptr());
        }
    }

    #[cfg(not(windows))]
    fn emit(_rendered: &str) {}
}

impl Default for DebugSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for DebugSink {
    fn submit(&mut self, entry: &LogEntry) -> Result<()> {
        if !self.filter.should_log(entry.category, entry.priority) {
            return Ok(());
        }

        Self::emit(&Self::render(entry));
        Ok(())
    }

    fn filter(&self) -> LogFilter {
        self.filter
    }

    fn set_filter(&mut self, filter: LogFilter) {
        self.filter = filter;
    }

    fn name(&self) -> &str {
        "debug"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Priority};

    #[test]
    fn test_render_has_timestamp_prefix() {
        let entry = LogEntry::new(Category::RENDER, Priority::Info, "gfx.rs", 3, "frame drop");
        let rendered = DebugSink::render(&entry);
        assert!(rendered.starts_with('['));
        assert!(rendered.ends_with("frame drop\r\n"));
    }

    #[test]
    fn test_submit_accepts_entries() {
        let mut sink = DebugSink::new();
        let entry = LogEntry::new(Category::RENDER, Priority::Alert, "gfx.rs", 9, "lost device");
        assert!(sink.submit(&entry).is_ok());
    }
}
