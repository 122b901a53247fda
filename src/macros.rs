//! Logging macros for ergonomic log message formatting.
//!
//! These macros call the process-wide facade and capture the call site's
//! `file!()` and `line!()` as the entry's origin tag and line number, so
//! log output points back at the code that produced it.
//!
//! # Examples
//!
//! ```
//! use multi_sink_logger::{info, Category};
//!
//! // Basic logging
//! info!(Category::NETWORK, "Connection established");
//!
//! // With format arguments
//! let port = 8080;
//! info!(Category::NETWORK, "Listening on port {}", port);
//! # multi_sink_logger::global::shutdown();
//! ```

/// Log a message with an explicit priority.
///
/// # Examples
///
/// ```
/// use multi_sink_logger::{log, Category, Priority};
/// log!(Category::SOUND, Priority::Debug, "Mixer buffer underrun: {}", 3);
/// # multi_sink_logger::global::shutdown();
/// ```
#[macro_export]
macro_rules! log {
    ($category:expr, $priority:expr, $($arg:tt)+) => {
        $crate::global::log($category, $priority, file!(), line!(), format!($($arg)+))
    };
}

/// Log a debug-priority message.
///
/// # Examples
///
/// ```
/// use multi_sink_logger::{debug, Category};
/// debug!(Category::TERRAIN, "Tile cache miss at {},{}", 4, 9);
/// # multi_sink_logger::global::shutdown();
/// ```
#[macro_export]
macro_rules! debug {
    ($category:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::Priority::Debug, $($arg)+)
    };
}

/// Log an info-priority message.
///
/// # Examples
///
/// ```
/// use multi_sink_logger::{info, Category};
/// info!(Category::RESOURCE, "Loaded {} textures", 128);
/// # multi_sink_logger::global::shutdown();
/// ```
#[macro_export]
macro_rules! info {
    ($category:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::Priority::Info, $($arg)+)
    };
}

/// Log a warning-priority message.
///
/// # Examples
///
/// ```
/// use multi_sink_logger::{warning, Category};
/// warning!(Category::NETWORK, "Retry attempt {} of {}", 3, 5);
/// # multi_sink_logger::global::shutdown();
/// ```
#[macro_export]
macro_rules! warning {
    ($category:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::Priority::Warning, $($arg)+)
    };
}

/// Log an alert-priority message.
///
/// # Examples
///
/// ```
/// use multi_sink_logger::{alert, Category};
/// alert!(Category::NETWORK, "Connection lost: {}", "timeout");
/// # multi_sink_logger::global::shutdown();
/// ```
#[macro_export]
macro_rules! alert {
    ($category:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::Priority::Alert, $($arg)+)
    };
}
