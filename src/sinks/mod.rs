//! Sink implementations

#[cfg(feature = "console")]
pub mod console;
pub mod debug;
#[cfg(feature = "file")]
pub mod file;

#[cfg(feature = "console")]
pub use console::ConsoleSink;
pub use debug::DebugSink;
#[cfg(feature = "file")]
pub use file::FileSink;

// Re-export the trait so custom sinks only need this module
pub use crate::core::Sink;
