//! Background dispatch worker and pause/resume machinery

use super::entry::LogEntry;
use super::metrics::LoggerMetrics;
use super::queue::EntryQueue;
use super::sink::Sink;
use parking_lot::RwLock;
use std::sync::Arc;
use std::thread;

/// Opaque registration token returned by `add_sink`, used to remove a
/// specific sink later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SinkId(pub(crate) u64);

pub(crate) struct RegisteredSink {
    pub(crate) id: SinkId,
    pub(crate) sink: Box<dyn Sink>,
}

/// Owns the single consumer thread that drains the entry queue and fans
/// each entry out to every registered sink in registration order.
///
/// The loop terminates when it pops the sentinel entry, so `stop` drains
/// everything queued before it. Registry and filter mutations never race
/// the fan-out loop: callers bracket them with [`DispatchWorker::pause`],
/// which stops the thread and restarts it when the guard drops.
pub struct DispatchWorker {
    queue: EntryQueue,
    sinks: Arc<RwLock<Vec<RegisteredSink>>>,
    metrics: Arc<LoggerMetrics>,
    handle: Option<thread::JoinHandle<()>>,
}

impl DispatchWorker {
    pub(crate) fn new(queue: EntryQueue, metrics: Arc<LoggerMetrics>) -> Self {
        Self {
            queue,
            sinks: Arc::new(RwLock::new(Vec::new())),
            metrics,
            handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub(crate) fn sinks(&self) -> &Arc<RwLock<Vec<RegisteredSink>>> {
        &self.sinks
    }

    /// Launch the worker thread. No-op if it is already running.
    pub fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }

        let queue = self.queue.clone();
        let sinks = Arc::clone(&self.sinks);
        let metrics = Arc::clone(&self.metrics);

        self.handle = Some(thread::spawn(move || loop {
            let entry = queue.pop();
            if entry.is_sentinel() {
                break;
            }
            Self::dispatch(&sinks, &entry, &metrics);
        }));
    }

    /// Push the sentinel and join the worker thread, draining every entry
    /// queued before the call. Returns whether the worker had been running.
    pub fn stop(&mut self) -> bool {
        let Some(handle) = self.handle.take() else {
            return false;
        };

        self.queue.push(LogEntry::sentinel());
        if let Err(e) = handle.join() {
            eprintln!("[LOGGER ERROR] Dispatch worker panicked during stop: {:?}", e);
        }
        true
    }

    /// Stop the worker for a registry or filter mutation; the returned
    /// guard restarts it on drop if it had been running.
    pub(crate) fn pause(&mut self) -> PauseGuard<'_> {
        let was_running = self.stop();
        PauseGuard {
            worker: self,
            was_running,
        }
    }

    /// Fan one entry out to every registered sink.
    ///
    /// **Per-Sink Panic Isolation**: each sink invocation is wrapped in
    /// catch_unwind so one failing sink cannot disrupt delivery to the
    /// others or kill the worker thread.
    fn dispatch(
        sinks: &RwLock<Vec<RegisteredSink>>,
        entry: &LogEntry,
        metrics: &LoggerMetrics,
    ) {
        let mut sinks_guard = sinks.write();
        let mut has_error = false;

        for registered in sinks_guard.iter_mut() {
            let submit_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                registered.sink.submit(entry)
            }));

            match submit_result {
                Ok(Ok(())) => {
                    // Sink accepted or silently filtered the entry.
                }
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Sink '{}' failed: {}",
                        registered.sink.name(),
                        e
                    );
                    metrics.record_sink_failure();
                    has_error = true;
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Sink '{}' panicked: {}. \
                         Other sinks continue to function.",
                        registered.sink.name(),
                        panic_msg
                    );
                    metrics.record_sink_failure();
                    has_error = true;
                }
            }
        }

        if !has_error {
            metrics.record_dispatched();
        }
    }
}

impl Drop for DispatchWorker {
    fn drop(&mut self) {
        // Final drain: everything queued up to this point still reaches
        // the sinks before the thread exits.
        self.stop();
    }
}

/// Scoped pause/mutate/resume bracket.
///
/// Construction (via [`DispatchWorker::pause`]) captures whether the
/// worker was running and stops it; drop restarts it on every exit path
/// if it had been running.
pub(crate) struct PauseGuard<'a> {
    worker: &'a mut DispatchWorker,
    was_running: bool,
}

impl PauseGuard<'_> {
    pub(crate) fn sinks(&self) -> &Arc<RwLock<Vec<RegisteredSink>>> {
        self.worker.sinks()
    }
}

impl Drop for PauseGuard<'_> {
    fn drop(&mut self) {
        if self.was_running {
            self.worker.start();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, LogFilter, Priority};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSink {
        filter: LogFilter,
        count: Arc<AtomicUsize>,
    }

    impl Sink for CountingSink {
        fn submit(&mut self, entry: &LogEntry) -> crate::core::Result<()> {
            if self.filter.should_log(entry.category, entry.priority) {
                self.count.fetch_add(1, Ordering::SeqCst);
            }
            Ok(())
        }

        fn filter(&self) -> LogFilter {
            self.filter
        }

        fn set_filter(&mut self, filter: LogFilter) {
            self.filter = filter;
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    fn worker_with_counter() -> (DispatchWorker, EntryQueue, Arc<AtomicUsize>) {
        let queue = EntryQueue::new();
        let worker = DispatchWorker::new(queue.clone(), Arc::new(LoggerMetrics::new()));
        let count = Arc::new(AtomicUsize::new(0));
        worker.sinks().write().push(RegisteredSink {
            id: SinkId(0),
            sink: Box::new(CountingSink {
                filter: LogFilter::new(Category::ALL, Priority::Debug),
                count: Arc::clone(&count),
            }),
        });
        (worker, queue, count)
    }

    #[test]
    fn test_stop_reports_running_state() {
        let queue = EntryQueue::new();
        let mut worker = DispatchWorker::new(queue, Arc::new(LoggerMetrics::new()));

        assert!(!worker.stop(), "stop on a stopped worker reports false");
        worker.start();
        assert!(worker.is_running());
        assert!(worker.stop());
        assert!(!worker.is_running());
    }

    #[test]
    fn test_start_is_idempotent() {
        let queue = EntryQueue::new();
        let mut worker = DispatchWorker::new(queue, Arc::new(LoggerMetrics::new()));
        worker.start();
        worker.start();
        assert!(worker.stop());
        assert!(!worker.stop());
    }

    #[test]
    fn test_stop_drains_queued_entries() {
        let (mut worker, queue, count) = worker_with_counter();
        worker.start();
        for n in 0..25 {
            queue.push(LogEntry::new(Category::SOUND, Priority::Info, "w.rs", n, "x"));
        }
        worker.stop();
        assert_eq!(count.load(Ordering::SeqCst), 25);
    }

    #[test]
    fn test_sentinel_never_reaches_sinks() {
        let (mut worker, queue, count) = worker_with_counter();
        worker.start();
        queue.push(LogEntry::new(Category::SOUND, Priority::Info, "w.rs", 1, "x"));
        worker.stop();
        // One ordinary entry plus the stop sentinel: only the former counts.
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_pause_guard_restarts_running_worker() {
        let (mut worker, queue, count) = worker_with_counter();
        worker.start();
        {
            let guard = worker.pause();
            assert_eq!(guard.sinks().read().len(), 1);
        }
        assert!(worker.is_running());
        queue.push(LogEntry::new(Category::SOUND, Priority::Info, "w.rs", 2, "x"));
        worker.stop();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_pause_guard_leaves_stopped_worker_stopped() {
        let (mut worker, _queue, _count) = worker_with_counter();
        {
            let _guard = worker.pause();
        }
        assert!(!worker.is_running());
    }

    #[test]
    fn test_panicking_sink_does_not_kill_worker() {
        struct PanickingSink;

        impl Sink for PanickingSink {
            fn submit(&mut self, _entry: &LogEntry) -> crate::core::Result<()> {
                panic!("sink blew up");
            }
            fn filter(&self) -> LogFilter {
                LogFilter::default()
            }
            fn set_filter(&mut self, _filter: LogFilter) {}
            fn name(&self) -> &str {
                "panicking"
            }
        }

        let (mut worker, queue, count) = worker_with_counter();
        // Panicking sink registered first; the counting sink must still
        // receive every entry.
        worker
            .sinks()
            .write()
            .insert(0, RegisteredSink {
                id: SinkId(99),
                sink: Box::new(PanickingSink),
            });
        worker.start();
        for n in 0..3 {
            queue.push(LogEntry::new(Category::SOUND, Priority::Info, "w.rs", n, "x"));
        }
        worker.stop();
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }
}
