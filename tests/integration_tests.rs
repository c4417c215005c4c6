//! Integration tests for the logging library
//!
//! These tests verify:
//! - Default and custom template output
//! - Independent handler thresholds
//! - Context merging and lazy value resolution
//! - File handler byte fidelity
//! - Thread safety of a shared logger

use parking_lot::Mutex;
use sinklog::prelude::*;
use std::fs;
use std::io;
use std::sync::Arc;
use tempfile::TempDir;

/// io::Write over a shared buffer so tests can inspect handler output.
#[derive(Clone)]
struct SharedStream(Arc<Mutex<Vec<u8>>>);

impl SharedStream {
    fn new() -> Self {
        Self(Arc::new(Mutex::new(Vec::new())))
    }

    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("handler output is UTF-8")
    }

    fn byte_len(&self) -> usize {
        self.0.lock().len()
    }
}

impl io::Write for SharedStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logger(min_verbosity: Verbosity) -> (Logger, SharedStream) {
    let stream = SharedStream::new();
    let logger = Logger::builder("test")
        .handler(StreamHandler::new(stream.clone()).with_min_verbosity(min_verbosity))
        .build();
    (logger, stream)
}

/// Default template output: `{time} {verbosity} {name}: {message}\n` with
/// an ISO-8601 microsecond timestamp.
#[test]
fn test_default_template_output() {
    let (logger, stream) = capture_logger(Verbosity::Debug);
    logger.info("hello").expect("log call failed");

    let output = stream.contents();
    assert!(output.ends_with('\n'), "entry must end with newline");

    let line = output.trim_end_matches('\n');
    let parts: Vec<&str> = line.splitn(4, ' ').collect();
    assert_eq!(parts.len(), 4, "unexpected entry shape: {:?}", line);

    let time = parts[0];
    assert_eq!(&time[4..5], "-");
    assert_eq!(&time[10..11], "T");
    assert!(time.contains('.'), "timestamp lacks sub-second precision");
    assert!(
        time.ends_with("+00:00"),
        "default timezone is UTC: {}",
        time
    );

    assert_eq!(parts[1], "INFO");
    assert_eq!(parts[2], "test:");
    assert_eq!(parts[3], "hello");
}

#[test]
fn test_every_level_formats() {
    let (logger, stream) = capture_logger(Verbosity::Debug);
    logger.debug("a").unwrap();
    logger.info("b").unwrap();
    logger.warning("c").unwrap();
    logger.error("d").unwrap();

    let output = stream.contents();
    let levels: Vec<&str> = output
        .lines()
        .map(|l| l.splitn(4, ' ').nth(1).unwrap())
        .collect();
    assert_eq!(levels, ["DEBUG", "INFO", "WARNING", "ERROR"]);
}

#[test]
fn test_handler_thresholds_are_independent() {
    let verbose = SharedStream::new();
    let quiet = SharedStream::new();
    let logger = Logger::builder("test")
        .template("{message}")
        .handler(StreamHandler::new(verbose.clone()).with_min_verbosity(Verbosity::Debug))
        .handler(StreamHandler::new(quiet.clone()).with_min_verbosity(Verbosity::Error))
        .build();

    logger.info("routine").unwrap();

    assert_eq!(verbose.contents(), "routine\n");
    assert_eq!(quiet.byte_len(), 0, "thresholded handler observed a write");

    logger.error("broken").unwrap();
    assert_eq!(verbose.contents(), "routine\nbroken\n");
    assert_eq!(quiet.contents(), "broken\n");
}

#[test]
fn test_custom_context_key() {
    let stream = SharedStream::new();
    let logger = Logger::builder("test")
        .template("{derp}: {message}")
        .ensure_newline(false)
        .handler(StreamHandler::new(stream.clone()).with_min_verbosity(Verbosity::Debug))
        .build();

    logger
        .debug_with_context("hello", Context::new().with("derp", "ohai"))
        .unwrap();
    assert_eq!(stream.contents(), "ohai: hello");
}

#[test]
fn test_lazy_context_value_resolved_once() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let calls = Arc::new(AtomicUsize::new(0));
    let calls_in_closure = Arc::clone(&calls);

    let stream = SharedStream::new();
    let logger = Logger::builder("test")
        .template("{time}: {message}")
        .handler(StreamHandler::new(stream.clone()).with_min_verbosity(Verbosity::Debug))
        .build();

    logger
        .debug_with_context(
            "hello",
            Context::new().with_lazy("time", move || {
                calls_in_closure.fetch_add(1, Ordering::SeqCst);
                "now".to_string()
            }),
        )
        .unwrap();

    assert_eq!(stream.contents(), "now: hello\n");
    assert_eq!(calls.load(Ordering::SeqCst), 1, "lazy value re-evaluated");
}

#[test]
fn test_missing_template_key_fails_without_output() {
    let stream = SharedStream::new();
    let logger = Logger::builder("test")
        .template("{nope} {message}")
        .handler(StreamHandler::new(stream.clone()))
        .build();

    let err = logger.info("hello").unwrap_err();
    assert!(matches!(err, LoggerError::UnknownPlaceholder { .. }));
    assert_eq!(stream.byte_len(), 0, "partial output leaked to handler");
}

#[test]
fn test_timezone_offset_in_output() {
    let offset = chrono::FixedOffset::west_opt(6 * 3600).unwrap();
    let stream = SharedStream::new();
    let logger = Logger::builder("test")
        .timezone(LogTimezone::Fixed(offset))
        .handler(StreamHandler::new(stream.clone()).with_min_verbosity(Verbosity::Debug))
        .build();

    logger.debug("hello").unwrap();
    let time = stream.contents();
    let time = time.split_whitespace().next().unwrap();
    assert!(time.ends_with("-06:00"), "timestamp was {}", time);
}

#[test]
fn test_reconfiguration_between_calls() {
    let stream = SharedStream::new();
    let mut logger = Logger::builder("test")
        .handler(StreamHandler::new(stream.clone()).with_min_verbosity(Verbosity::Debug))
        .build();

    logger.set_template("{module}: {message}");
    logger.debug("hello").unwrap();
    assert_eq!(stream.contents(), "integration_tests: hello\n");
}

#[test]
fn test_file_handler_bytes_in_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("ordered.log");

    let mut logger = Logger::builder("test")
        .template("{message}")
        .handler(FileHandler::new(&log_file).expect("Failed to open log file"))
        .build();
    logger.set_ensure_newline(true);

    logger.info("one").unwrap();
    logger.info("two").unwrap();
    logger.info("three").unwrap();

    // Flushed per write: visible before the handler is dropped.
    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "one\ntwo\nthree\n");
}

#[test]
fn test_large_entry_arrives_intact() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("large.log");

    let logger = Logger::builder("test")
        .template("{message}")
        .handler(FileHandler::new(&log_file).expect("Failed to open log file"))
        .build();

    let payload = "x".repeat(12_000);
    logger.info(payload.clone()).unwrap();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.len(), payload.len() + 1);
    assert_eq!(content, format!("{}\n", payload));
}

#[test]
fn test_non_ascii_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("unicode.log");

    let logger = Logger::builder("test")
        .template("{message}")
        .handler(FileHandler::new(&log_file).expect("Failed to open log file"))
        .build();

    logger.info("\u{c548}\u{b155}\u{d558}\u{c138}\u{c694}").unwrap();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "\u{c548}\u{b155}\u{d558}\u{c138}\u{c694}\n");
}

#[test]
fn test_shared_logger_across_threads() {
    let stream = SharedStream::new();
    let logger = Arc::new(
        Logger::builder("test")
            .template("{message}")
            .handler(StreamHandler::new(stream.clone()).with_min_verbosity(Verbosity::Debug))
            .build(),
    );

    let mut handles = Vec::new();
    for t in 0..4 {
        let logger = Arc::clone(&logger);
        handles.push(std::thread::spawn(move || {
            for i in 0..50 {
                logger.info(format!("t{}-{}", t, i)).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    // Entries never interleave mid-line; 200 whole lines arrive.
    let output = stream.contents();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 200);
    for line in lines {
        assert!(line.starts_with('t') && line.contains('-'), "torn line: {}", line);
    }
}

#[test]
fn test_capture_exception_with_chain() {
    let stream = SharedStream::new();
    let logger = Logger::builder("test")
        .template("{verbosity} {name}: {message}")
        .handler(StreamHandler::new(stream.clone()).with_min_verbosity(Verbosity::Debug))
        .build();

    let source = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
    let err = LoggerError::io_operation("flushing", "stream went away", source);
    logger.capture_exception(Some(&err), Context::new()).unwrap();

    let output = stream.contents();
    assert!(output.starts_with("EXCEPTION test: error: "));
    assert!(output.contains("caused by: pipe closed"));
}

#[test]
fn test_global_convenience_functions() {
    // The default logger writes to stdout; these only need to succeed.
    sinklog::debug("global debug").unwrap();
    sinklog::info("global info").unwrap();
    sinklog::warning("global warning").unwrap();
    sinklog::error("global error").unwrap();
}
