//! Log entry structure

use super::category::Category;
use super::priority::Priority;
use serde::{Deserialize, Serialize};

/// Origin tag reserved for the worker termination sentinel.
pub(crate) const SENTINEL_ORIGIN: &str = "done";

/// One classified log record. Immutable after construction; owned by the
/// entry queue until the dispatch worker consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub category: Category,
    pub priority: Priority,
    /// Source location label, usually a file name from `file!()`.
    pub origin: String,
    pub line: u32,
    pub message: String,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks.
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so one entry always renders as exactly one output line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(
        category: Category,
        priority: Priority,
        origin: impl Into<String>,
        line: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            priority,
            origin: origin.into(),
            line,
            message: Self::sanitize_message(&message.into()),
        }
    }

    /// The distinguished entry that tells the dispatch worker to exit its
    /// loop. Never dispatched to sinks.
    pub(crate) fn sentinel() -> Self {
        Self {
            category: Category::NONE,
            priority: Priority::Debug,
            origin: SENTINEL_ORIGIN.to_string(),
            line: 0,
            message: String::new(),
        }
    }

    pub(crate) fn is_sentinel(&self) -> bool {
        self.category.is_none() && self.origin == SENTINEL_ORIGIN
    }
}
