//! File logging example
//!
//! Demonstrates the file sink's stable line format and the shutdown drain
//! guarantee.
//!
//! Run with: cargo run --example file_logging

use multi_sink_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Multi-Sink Logger - File Logging Example ===\n");

    let log_path = std::env::temp_dir().join("multi_sink_logger_demo.log");

    let mut logger = Logger::new();
    logger.log_to_file(&log_path, Category::NETWORK | Category::RESOURCE, Priority::Debug)?;
    println!("1. Logging to {}", log_path.display());

    logger.log(Category::NETWORK, Priority::Info, "conn.c", 42, "connected");
    logger.log(Category::RESOURCE, Priority::Debug, "loader.rs", 7, "cache warm");
    logger.log(Category::SOUND, Priority::Debug, "mix.rs", 3, "filtered out");
    logger.log(Category::NETWORK, Priority::Alert, "conn.c", 99, "timeout");

    // Everything queued above is on disk once shutdown returns
    logger.shutdown();

    println!("\n2. File contents (<category>:<priority>:<origin>:<line>:<message>):");
    for line in std::fs::read_to_string(&log_path)?.lines() {
        println!("   {}", line);
    }

    std::fs::remove_file(&log_path)?;
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
