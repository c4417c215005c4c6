//! Core logger types and traits

pub mod context;
pub mod encoding;
pub mod error;
pub mod handler;
pub mod logger;
pub mod template;
pub mod timestamp;
pub mod verbosity;

pub use context::{CallSite, Context, ContextValue};
pub use encoding::{Encoding, EncodingPolicy};
pub use error::{LoggerError, Result};
pub use handler::Handler;
pub use logger::{default_logger, Logger, LoggerBuilder, DEFAULT_TEMPLATE};
pub use timestamp::LogTimezone;
pub use verbosity::Verbosity;
