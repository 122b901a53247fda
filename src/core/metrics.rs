//! Dispatch counters for observing the logger itself

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters maintained by the dispatch worker.
///
/// `dispatched` counts entries that completed fan-out to every sink
/// without a failure; `sink_failures` counts individual sink errors and
/// panics (one per failing sink invocation, so a single entry can add
/// more than one).
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    dispatched: AtomicU64,
    sink_failures: AtomicU64,
}

impl LoggerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_dispatched(&self) {
        self.dispatched.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_sink_failure(&self) {
        self.sink_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn dispatched_count(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    pub fn sink_failure_count(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.dispatched_count(), 0);
        assert_eq!(metrics.sink_failure_count(), 0);
    }

    #[test]
    fn test_counters_accumulate() {
        let metrics = LoggerMetrics::new();
        for _ in 0..5 {
            metrics.record_dispatched();
        }
        metrics.record_sink_failure();
        assert_eq!(metrics.dispatched_count(), 5);
        assert_eq!(metrics.sink_failure_count(), 1);
    }
}
