//! Sink trait for log output destinations

use super::entry::LogEntry;
use super::error::Result;
use super::filter::LogFilter;

/// A destination that renders and emits accepted log entries.
///
/// Each sink owns a private [`LogFilter`], adjustable independently of the
/// global filter. `submit` evaluates that filter itself and silently
/// discards entries that do not pass; accepted entries must be rendered
/// and made visible (flushed) before `submit` returns. Only the dispatch
/// worker thread invokes `submit`, so implementations need no internal
/// locking.
pub trait Sink: Send + Sync {
    /// Offer one entry to the sink. A transient write failure is reported
    /// as an error and absorbed by the dispatch loop; it must never block
    /// indefinitely.
    fn submit(&mut self, entry: &LogEntry) -> Result<()>;

    fn filter(&self) -> LogFilter;

    fn set_filter(&mut self, filter: LogFilter);

    /// Marks sinks that track the global filter when it changes, such as
    /// the console sink.
    fn is_console_like(&self) -> bool {
        false
    }

    fn name(&self) -> &str;
}
