//! Basic logging usage example
//!
//! Demonstrates the process-wide facade, the logging macros, and how the
//! per-sink filters interact with the info escape valve.
//!
//! Run with: cargo run --example basic_usage

use multi_sink_logger::prelude::*;
use multi_sink_logger::{alert, debug, global, info, warning};

fn main() {
    println!("=== Multi-Sink Logger - Basic Usage Example ===\n");

    // Register a console sink that only cares about network chatter
    println!("1. Console sink filtered to Category::NETWORK:");
    let console = ConsoleSink::new()
        .with_filter(LogFilter::new(Category::NETWORK, Priority::Debug))
        .with_colors(true);
    let console_id = global::add_sink(Box::new(console));

    debug!(Category::NETWORK, "handshake started (visible)");
    debug!(Category::SOUND, "mixer warmed up (filtered out)");
    // The escape valve delivers info and above regardless of category
    alert!(Category::SOUND, "audio device lost (visible despite category)");

    // Cheap producer-side check before building an expensive message
    println!("\n2. would_log gates expensive message construction:");
    global::set_filter(Category::NETWORK, Priority::Debug);
    if global::would_log(Category::TERRAIN, Priority::Debug) {
        debug!(Category::TERRAIN, "this never renders: {}", expensive_dump());
    } else {
        println!("   skipped building the terrain dump");
    }

    // Popups travel outside the sink pipeline
    println!("\n3. Popup messages:");
    global::push_popup("Update available");
    while let Some(popup) = global::pop_popup() {
        println!("   popup: {}", popup);
    }

    info!(Category::NETWORK, "shutting down");
    global::remove_sink(console_id);
    global::shutdown();

    // The facade reinitializes transparently after shutdown
    warning!(Category::NETWORK, "logged into a fresh facade");
    global::shutdown();

    println!("\n=== Example completed successfully! ===");
}

fn expensive_dump() -> String {
    (0..1000).map(|n| n.to_string()).collect::<Vec<_>>().join(",")
}
