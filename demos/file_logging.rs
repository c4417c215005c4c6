//! File logging example
//!
//! Demonstrates the file handler: append mode, flush-per-write, and
//! deterministic release of the file on drop.
//!
//! Run with: cargo run --example file_logging

use sinklog::prelude::*;

fn main() -> Result<()> {
    let path = std::env::temp_dir().join("sinklog_demo.log");

    {
        let logger = Logger::builder("demo")
            .handler(FileHandler::new(&path)?)
            .build();

        logger.info("application started")?;
        logger.warning("cache size near limit")?;
        logger.error("worker crashed, restarting")?;
        // The handler flushes per write and closes the file when the
        // logger drops here.
    }

    let contents = std::fs::read_to_string(&path)?;
    println!("--- {} ---", path.display());
    print!("{}", contents);

    std::fs::remove_file(&path)?;
    Ok(())
}
