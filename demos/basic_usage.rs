//! Basic logger usage example
//!
//! Demonstrates leveled logging, handler thresholds, and per-call context.
//!
//! Run with: cargo run --example basic_usage

use sinklog::prelude::*;

fn main() -> Result<()> {
    // A logger with one stdout handler that lets everything through.
    let logger = Logger::builder("demo")
        .handler(StreamHandler::stdout().with_min_verbosity(Verbosity::Debug))
        .build();

    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.warning("This is a warning message")?;
    logger.error("This is an error message")?;

    // Handlers filter independently; stderr defaults to Warning.
    let split = Logger::builder("demo")
        .handler(StreamHandler::stdout())
        .handler(StreamHandler::stderr())
        .build();
    split.info("stdout only")?;
    split.error("stdout and stderr")?;

    // Caller-supplied context can override any standard key or add new
    // placeholders, including lazily computed ones.
    let custom = Logger::builder("demo")
        .template("{time} {verbosity} {request_id}: {message}")
        .handler(StreamHandler::stdout())
        .build();
    custom.info_with_context(
        "handled request",
        Context::new()
            .with("request_id", "req-42")
            .with_lazy("time", || "frozen-for-demo".to_string()),
    )?;

    Ok(())
}
