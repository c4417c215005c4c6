//! # Sinklog
//!
//! A leveled text logging library: messages are formatted through a
//! template and dispatched synchronously to one or more handlers.
//!
//! ## Features
//!
//! - **Ordered Verbosity**: debug through exception, with syslog mapping
//! - **Template Entries**: `{time} {verbosity} {name}: {message}` by
//!   default, with per-call context overrides and lazy values
//! - **Multiple Handlers**: streams, files, TCP/UDP/Unix sockets, syslog
//! - **Fail Fast**: construction and write failures surface to the caller
//!
//! ## Quick start
//!
//! ```
//! use sinklog::prelude::*;
//!
//! let logger = Logger::builder("app")
//!     .handler(StreamHandler::stdout())
//!     .build();
//! logger.info("server started").unwrap();
//! ```

pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        default_logger, CallSite, Context, ContextValue, Encoding, EncodingPolicy, Handler,
        LogTimezone, Logger, LoggerBuilder, LoggerError, Result, Verbosity, DEFAULT_TEMPLATE,
    };
    pub use crate::handlers::{
        Facility, FileHandler, FileMode, SocketFamily, SocketHandler, SocketKind, StderrHandler,
        StdoutHandler, StreamHandler, SyslogHandler,
    };
}

pub use crate::core::{
    default_logger, CallSite, Context, ContextValue, Encoding, EncodingPolicy, Handler,
    LogTimezone, Logger, LoggerBuilder, LoggerError, Result, Verbosity, DEFAULT_TEMPLATE,
};
pub use crate::handlers::{
    Facility, FileHandler, FileMode, SocketFamily, SocketHandler, SocketKind, StderrHandler,
    StdoutHandler, StreamHandler, SyslogHandler,
};

/// Log through the process-wide default logger at `Debug`.
#[track_caller]
pub fn debug(message: impl Into<String>) -> Result<()> {
    default_logger().debug(message)
}

/// Log through the process-wide default logger at `Info`.
#[track_caller]
pub fn info(message: impl Into<String>) -> Result<()> {
    default_logger().info(message)
}

/// Log through the process-wide default logger at `Warning`.
#[track_caller]
pub fn warning(message: impl Into<String>) -> Result<()> {
    default_logger().warning(message)
}

/// Log through the process-wide default logger at `Error`.
#[track_caller]
pub fn error(message: impl Into<String>) -> Result<()> {
    default_logger().error(message)
}
