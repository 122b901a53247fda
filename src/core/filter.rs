//! Category/priority filtering predicate

use super::category::Category;
use super::priority::Priority;
use serde::{Deserialize, Serialize};

/// A (category mask, priority threshold) pair.
///
/// The global filter and every sink's private filter are both values of
/// this type, evaluated with the same rule: entries at `Info` or above are
/// always loggable, anything below must match the mask and reach the
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFilter {
    pub categories: Category,
    pub threshold: Priority,
}

impl LogFilter {
    pub fn new(categories: Category, threshold: Priority) -> Self {
        Self {
            categories,
            threshold,
        }
    }

    /// Whether an entry classified as `(category, priority)` passes.
    ///
    /// `Info` and above bypass both the mask and the threshold. Downstream
    /// consumers rely on always seeing high-severity entries, so this holds
    /// even for filters scoped to a single category.
    #[inline]
    #[must_use]
    pub fn should_log(&self, category: Category, priority: Priority) -> bool {
        priority >= Priority::Info
            || (category.intersects(self.categories) && priority >= self.threshold)
    }
}

impl Default for LogFilter {
    fn default() -> Self {
        Self {
            categories: Category::ALL,
            threshold: Priority::Info,
        }
    }
}
