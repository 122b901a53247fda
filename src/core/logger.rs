//! Logging facade owning the dispatch worker and sink registry

use super::category::Category;
use super::entry::LogEntry;
use super::filter::LogFilter;
use super::metrics::LoggerMetrics;
use super::priority::Priority;
use super::queue::EntryQueue;
use super::sink::Sink;
use super::worker::{DispatchWorker, RegisteredSink, SinkId};
use std::collections::VecDeque;
use std::sync::Arc;

#[cfg(feature = "file")]
use super::error::Result;
#[cfg(feature = "file")]
use crate::sinks::FileSink;
#[cfg(feature = "file")]
use std::path::Path;

/// The logging facade: global filter, entry queue, dispatch worker, sink
/// registry, and the popup message list.
///
/// `log` is fire-and-forget: it always constructs and enqueues the entry,
/// and filtering happens downstream at each sink. Operations that mutate
/// the registry or the filters stop the worker first and restart it after,
/// so a dispatch pass never races a mutation.
pub struct Logger {
    filter: LogFilter,
    queue: EntryQueue,
    worker: DispatchWorker,
    popups: VecDeque<String>,
    metrics: Arc<LoggerMetrics>,
    next_sink_id: u64,
}

impl Logger {
    /// Create a facade with a running dispatch worker and no sinks.
    #[must_use]
    pub fn new() -> Self {
        let queue = EntryQueue::new();
        let metrics = Arc::new(LoggerMetrics::new());
        let mut worker = DispatchWorker::new(queue.clone(), Arc::clone(&metrics));
        worker.start();

        Self {
            filter: LogFilter::default(),
            queue,
            worker,
            popups: VecDeque::new(),
            metrics,
            next_sink_id: 0,
        }
    }

    /// Construct an entry and enqueue it. Never fails and never blocks
    /// beyond the queue's internal insertion synchronization.
    pub fn log(
        &self,
        category: Category,
        priority: Priority,
        origin: &str,
        line: u32,
        message: impl Into<String>,
    ) {
        self.enqueue(LogEntry::new(category, priority, origin, line, message));
    }

    pub(crate) fn enqueue(&self, entry: LogEntry) {
        self.queue.push(entry);
    }

    pub(crate) fn queue(&self) -> &EntryQueue {
        &self.queue
    }

    /// Whether an entry classified as `(category, priority)` would pass the
    /// global filter. Lets producers skip building expensive messages.
    #[must_use]
    pub fn would_log(&self, category: Category, priority: Priority) -> bool {
        self.filter.should_log(category, priority)
    }

    /// Replace the global filter pair and propagate it to console-like
    /// sinks. Pauses the worker for the duration of the mutation.
    pub fn set_filter(&mut self, categories: Category, threshold: Priority) {
        let filter = LogFilter::new(categories, threshold);
        let guard = self.worker.pause();
        self.filter = filter;
        for registered in guard.sinks().write().iter_mut() {
            if registered.sink.is_console_like() {
                registered.sink.set_filter(filter);
            }
        }
    }

    /// Change the category mask, keeping the current threshold.
    pub fn set_category(&mut self, categories: Category) {
        self.set_filter(categories, self.filter.threshold);
    }

    /// Change the priority threshold, keeping the current category mask.
    pub fn set_priority(&mut self, threshold: Priority) {
        self.set_filter(self.filter.categories, threshold);
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.filter.categories
    }

    #[must_use]
    pub fn priority(&self) -> Priority {
        self.filter.threshold
    }

    #[must_use]
    pub fn filter(&self) -> LogFilter {
        self.filter
    }

    /// Register a sink at the end of the dispatch order. Pauses the worker
    /// around the registry mutation; returns the token `remove_sink` takes.
    pub fn add_sink(&mut self, sink: Box<dyn Sink>) -> SinkId {
        let id = SinkId(self.next_sink_id);
        self.next_sink_id += 1;

        let guard = self.worker.pause();
        guard.sinks().write().push(RegisteredSink { id, sink });
        id
    }

    /// Unregister and drop the sink registered under `id`. No-op if it is
    /// not currently registered.
    pub fn remove_sink(&mut self, id: SinkId) {
        let guard = self.worker.pause();
        guard.sinks().write().retain(|registered| registered.id != id);
    }

    pub fn sink_count(&self) -> usize {
        self.worker.sinks().read().len()
    }

    /// Open a file sink on `path` with the given filter and register it.
    /// A failed open is surfaced here, before registration.
    #[cfg(feature = "file")]
    pub fn log_to_file(
        &mut self,
        path: impl AsRef<Path>,
        categories: Category,
        threshold: Priority,
    ) -> Result<SinkId> {
        let sink = FileSink::new(path.as_ref(), LogFilter::new(categories, threshold))?;
        Ok(self.add_sink(Box::new(sink)))
    }

    /// Queue a UI-facing popup message. Popups bypass the sink pipeline.
    pub fn push_popup(&mut self, message: impl Into<String>) {
        self.popups.push_back(message.into());
    }

    /// Take the oldest popup message, if any.
    pub fn pop_popup(&mut self) -> Option<String> {
        self.popups.pop_front()
    }

    #[must_use]
    pub fn has_popup(&self) -> bool {
        !self.popups.is_empty()
    }

    /// Dispatch counters maintained by the worker.
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_running()
    }

    /// Stop the worker after draining every queued entry, release all
    /// sinks, and reset filter and popup state.
    pub fn shutdown(&mut self) {
        self.worker.stop();
        self.worker.sinks().write().clear();
        self.filter = LogFilter::default();
        self.popups.clear();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use multi_sink_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .filter(Category::NETWORK | Category::RESOURCE, Priority::Debug)
///     .sink(ConsoleSink::new())
///     .build();
/// ```
pub struct LoggerBuilder {
    filter: LogFilter,
    sinks: Vec<Box<dyn Sink>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            filter: LogFilter::default(),
            sinks: Vec::new(),
        }
    }

    /// Set the global filter pair
    #[must_use = "builder methods return a new value"]
    pub fn filter(mut self, categories: Category, threshold: Priority) -> Self {
        self.filter = LogFilter::new(categories, threshold);
        self
    }

    /// Add a sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let mut logger = Logger::new();
        // Sinks first, so console-like ones pick up the builder's filter
        // exactly as they would from a later set_filter call.
        for sink in self.sinks {
            logger.add_sink(sink);
        }
        logger.set_filter(self.filter.categories, self.filter.threshold);
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
