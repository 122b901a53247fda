//! Thread-safe FIFO between log producers and the dispatch worker

use super::entry::LogEntry;
use crossbeam_channel::{unbounded, Receiver, Sender};

/// Unbounded MPSC queue of log entries.
///
/// `push` is safe from any thread and never blocks; `pop` blocks until an
/// entry arrives and is called only by the dispatch worker. Delivery order
/// is the global arrival order observed by the channel.
#[derive(Clone)]
pub struct EntryQueue {
    tx: Sender<LogEntry>,
    rx: Receiver<LogEntry>,
}

impl EntryQueue {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// Append an entry at the tail. Amortized O(1); never blocks.
    pub fn push(&self, entry: LogEntry) {
        // Cannot disconnect while this queue holds the receiver.
        let _ = self.tx.send(entry);
    }

    /// Remove and return the head, blocking while the queue is empty.
    ///
    /// A disconnected channel maps to the sentinel so the worker loop
    /// terminates instead of panicking.
    pub fn pop(&self) -> LogEntry {
        self.rx.recv().unwrap_or_else(|_| LogEntry::sentinel())
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

impl Default for EntryQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Priority};
    use std::thread;

    fn entry(n: u32) -> LogEntry {
        LogEntry::new(Category::NETWORK, Priority::Info, "queue.rs", n, format!("m{}", n))
    }

    #[test]
    fn test_fifo_order_single_producer() {
        let queue = EntryQueue::new();
        for n in 0..100 {
            queue.push(entry(n));
        }
        for n in 0..100 {
            assert_eq!(queue.pop().line, n);
        }
    }

    #[test]
    fn test_pop_blocks_until_push() {
        let queue = EntryQueue::new();
        let producer = {
            let queue = queue.clone();
            thread::spawn(move || {
                thread::sleep(std::time::Duration::from_millis(20));
                queue.push(entry(7));
            })
        };
        assert_eq!(queue.pop().line, 7);
        producer.join().unwrap();
    }

    #[test]
    fn test_per_producer_subsequence_preserved() {
        let queue = EntryQueue::new();
        let mut handles = Vec::new();
        for producer in 0..4u32 {
            let queue = queue.clone();
            handles.push(thread::spawn(move || {
                for n in 0..50 {
                    queue.push(entry(producer * 1000 + n));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let mut last_seen = [None::<u32>; 4];
        for _ in 0..200 {
            let line = queue.pop().line;
            let producer = (line / 1000) as usize;
            let n = line % 1000;
            if let Some(prev) = last_seen[producer] {
                assert!(n > prev, "producer {} reordered: {} after {}", producer, n, prev);
            }
            last_seen[producer] = Some(n);
        }
    }
}
