//! # Multi-Sink Logger
//!
//! An asynchronous logging core that decouples producers from output
//! targets via a thread-safe queue and a background dispatch worker.
//!
//! ## Features
//!
//! - **Fire-and-Forget**: `log` only constructs and enqueues; rendering
//!   happens on the dispatch thread
//! - **Multiple Sinks**: console, file, and platform-debug sinks, each
//!   with an independent category/priority filter
//! - **Thread Safe**: any number of producer threads, one consumer
//! - **Process-Wide Facade**: lazily initialized, safely restartable
//!   after shutdown

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
    pub use crate::sinks::DebugSink;
    pub use crate::core::{
        Category, EntryQueue, LogEntry, LogFilter, Logger, LoggerBuilder, LoggerError,
        LoggerMetrics, Priority, Result, Sink, SinkId,
    };
}

pub use crate::core::global;
#[cfg(feature = "console")]
pub use crate::sinks::ConsoleSink;
#[cfg(feature = "file")]
pub use crate::sinks::FileSink;
pub use crate::sinks::DebugSink;
pub use crate::core::{
    Category, EntryQueue, LogEntry, LogFilter, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
    Priority, Result, Sink, SinkId,
};
