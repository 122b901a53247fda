//! Core pipeline types and traits

pub mod category;
pub mod entry;
pub mod error;
pub mod filter;
pub mod global;
pub mod logger;
pub mod metrics;
pub mod priority;
pub mod queue;
pub mod sink;
pub mod worker;

pub use category::Category;
pub use entry::LogEntry;
pub use error::{LoggerError, Result};
pub use filter::LogFilter;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use priority::Priority;
pub use queue::EntryQueue;
pub use sink::Sink;
pub use worker::SinkId;
