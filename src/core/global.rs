//! Process-wide logging facade
//!
//! One [`Logger`] instance shared by every producer in the process, built
//! lazily on first use behind a single mutex. [`shutdown`] tears it down
//! completely; a later call to any logging function transparently
//! reinitializes it, so the facade is safe to use at any point in the
//! process lifetime.

use super::category::Category;
use super::entry::LogEntry;
use super::logger::Logger;
use super::priority::Priority;
use super::queue::EntryQueue;
use super::sink::Sink;
use super::worker::SinkId;
use parking_lot::Mutex;

#[cfg(feature = "file")]
use super::error::Result;
#[cfg(feature = "file")]
use std::path::Path;

static GLOBAL: Mutex<Option<Logger>> = Mutex::new(None);

/// Queue handle for the fast logging path, refreshed whenever the facade
/// is created or torn down. Administrative calls hold `GLOBAL` while they
/// stop and restart the worker; they never hold this lock, so producers
/// only ever wait for another push. Lock order is `GLOBAL` then `QUEUE`.
static QUEUE: Mutex<Option<EntryQueue>> = Mutex::new(None);

/// Run `f` against the process-wide logger, constructing it first if the
/// slot is empty.
fn with<R>(f: impl FnOnce(&mut Logger) -> R) -> R {
    let mut slot = GLOBAL.lock();
    let logger = slot.get_or_insert_with(|| {
        let logger = Logger::new();
        *QUEUE.lock() = Some(logger.queue().clone());
        logger
    });
    f(logger)
}

/// Construct and enqueue one entry. Fire-and-forget from any thread; the
/// caller pays only for construction and the queue insertion, even while
/// another thread's filter or registry mutation is draining the worker.
pub fn log(
    category: Category,
    priority: Priority,
    origin: &str,
    line: u32,
    message: impl Into<String>,
) {
    let entry = LogEntry::new(category, priority, origin, line, message);

    {
        let queue = QUEUE.lock();
        if let Some(queue) = queue.as_ref() {
            queue.push(entry);
            return;
        }
    }

    // Facade not built yet (or torn down): take the slow path through the
    // slot lock, which also repopulates the queue handle.
    with(|logger| logger.enqueue(entry));
}

/// Query the global filter without pausing the worker.
pub fn would_log(category: Category, priority: Priority) -> bool {
    with(|logger| logger.would_log(category, priority))
}

pub fn set_filter(categories: Category, threshold: Priority) {
    with(|logger| logger.set_filter(categories, threshold));
}

pub fn set_category(categories: Category) {
    with(|logger| logger.set_category(categories));
}

pub fn set_priority(threshold: Priority) {
    with(|logger| logger.set_priority(threshold));
}

pub fn category() -> Category {
    with(|logger| logger.category())
}

pub fn priority() -> Priority {
    with(|logger| logger.priority())
}

pub fn add_sink(sink: Box<dyn Sink>) -> SinkId {
    with(|logger| logger.add_sink(sink))
}

pub fn remove_sink(id: SinkId) {
    with(|logger| logger.remove_sink(id));
}

/// Register a file sink bound to `path`; a failed open is returned to the
/// caller instead of being swallowed.
#[cfg(feature = "file")]
pub fn log_to_file(
    path: impl AsRef<Path>,
    categories: Category,
    threshold: Priority,
) -> Result<SinkId> {
    with(|logger| logger.log_to_file(path, categories, threshold))
}

pub fn push_popup(message: impl Into<String>) {
    with(|logger| logger.push_popup(message));
}

pub fn pop_popup() -> Option<String> {
    with(|logger| logger.pop_popup())
}

pub fn has_popup() -> bool {
    with(|logger| logger.has_popup())
}

/// Drain queued entries, release every sink, and empty the global slot.
/// The next logging call recreates the facade from scratch.
pub fn shutdown() {
    let mut slot = GLOBAL.lock();
    // Invalidate the fast path first: pushes that won the race are FIFO
    // ahead of the drain sentinel, later producers block on the slot and
    // reinitialize.
    *QUEUE.lock() = None;
    if let Some(mut logger) = slot.take() {
        logger.shutdown();
    }
}
