//! Main logger implementation

use super::{
    context::{CallSite, Context},
    error::Result,
    handler::Handler,
    template,
    timestamp::LogTimezone,
    verbosity::Verbosity,
};
use crate::handlers::StreamHandler;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::error::Error;
use std::sync::OnceLock;

/// Default entry template.
pub const DEFAULT_TEMPLATE: &str = "{time} {verbosity} {name}: {message}";

/// A named logger that formats entries through a template and fans them
/// out to its handlers.
///
/// Dispatch is synchronous: a log call returns once every handler has
/// written (and flushed) the entry, and the first handler failure aborts
/// the call. The handler list sits behind a mutex so a logger shared
/// across threads never interleaves partial writes on one destination.
///
/// # Example
///
/// ```
/// use sinklog::prelude::*;
///
/// let logger = Logger::builder("app")
///     .handler(StreamHandler::stderr())
///     .build();
/// logger.error("backend unreachable").unwrap();
/// ```
pub struct Logger {
    name: String,
    template: String,
    timezone: LogTimezone,
    ensure_newline: bool,
    handlers: Mutex<Vec<Box<dyn Handler>>>,
}

impl Logger {
    /// Create a logger with a single stdout handler.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::builder(name).build()
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Replace the entry template.
    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
    }

    /// Change the timezone applied to `{time}`.
    pub fn set_timezone(&mut self, timezone: LogTimezone) {
        self.timezone = timezone;
    }

    /// Toggle trailing-newline enforcement.
    pub fn set_ensure_newline(&mut self, ensure: bool) {
        self.ensure_newline = ensure;
    }

    /// Register an additional handler.
    ///
    /// Handlers are owned by the logger, so an instance can be registered
    /// on at most one logger.
    pub fn add_handler(&mut self, handler: Box<dyn Handler>) {
        self.handlers.lock().push(handler);
    }

    /// Log a message at an explicit verbosity.
    #[track_caller]
    pub fn log(&self, verbosity: Verbosity, message: impl Into<String>) -> Result<()> {
        self.log_at(verbosity, message, Context::new(), CallSite::caller())
    }

    /// Log with caller-supplied context values.
    #[track_caller]
    pub fn log_with_context(
        &self,
        verbosity: Verbosity,
        message: impl Into<String>,
        context: Context,
    ) -> Result<()> {
        self.log_at(verbosity, message, context, CallSite::caller())
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log_at(Verbosity::Debug, message, Context::new(), CallSite::caller())
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log_at(Verbosity::Info, message, Context::new(), CallSite::caller())
    }

    #[track_caller]
    pub fn warning(&self, message: impl Into<String>) -> Result<()> {
        self.log_at(
            Verbosity::Warning,
            message,
            Context::new(),
            CallSite::caller(),
        )
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log_at(Verbosity::Error, message, Context::new(), CallSite::caller())
    }

    #[track_caller]
    pub fn debug_with_context(&self, message: impl Into<String>, context: Context) -> Result<()> {
        self.log_at(Verbosity::Debug, message, context, CallSite::caller())
    }

    #[track_caller]
    pub fn info_with_context(&self, message: impl Into<String>, context: Context) -> Result<()> {
        self.log_at(Verbosity::Info, message, context, CallSite::caller())
    }

    #[track_caller]
    pub fn warning_with_context(&self, message: impl Into<String>, context: Context) -> Result<()> {
        self.log_at(Verbosity::Warning, message, context, CallSite::caller())
    }

    #[track_caller]
    pub fn error_with_context(&self, message: impl Into<String>, context: Context) -> Result<()> {
        self.log_at(Verbosity::Error, message, context, CallSite::caller())
    }

    /// Log an error trace at the highest verbosity tier.
    ///
    /// With `Some(error)` the message body is the error followed by each
    /// `source()` cause on its own line. With `None` the sentinel
    /// `"no active exception"` is logged instead.
    #[track_caller]
    pub fn capture_exception(
        &self,
        error: Option<&(dyn Error + 'static)>,
        context: Context,
    ) -> Result<()> {
        let message = match error {
            Some(err) => format_error_trace(err),
            None => "no active exception".to_string(),
        };
        self.log_at(Verbosity::Exception, message, context, CallSite::caller())
    }

    /// Log with an explicit call site.
    ///
    /// The other logging methods capture the call site automatically via
    /// `#[track_caller]`; this variant exists for callers that want to
    /// name the enclosing function or forward a site from elsewhere.
    pub fn log_at(
        &self,
        verbosity: Verbosity,
        message: impl Into<String>,
        context: Context,
        site: CallSite,
    ) -> Result<()> {
        let mut values: HashMap<String, String> = HashMap::with_capacity(9 + context.len());
        values.insert("time".to_string(), self.timezone.format_now());
        values.insert("verbosity".to_string(), verbosity.to_string());
        values.insert("name".to_string(), self.name.clone());
        values.insert("source".to_string(), site.file.to_string());
        values.insert("function".to_string(), site.function.to_string());
        values.insert("line".to_string(), site.line.to_string());
        values.insert("module".to_string(), site.module().to_string());
        values.insert("pid".to_string(), std::process::id().to_string());
        values.insert("message".to_string(), message.into());

        // Caller keys override standard keys; lazy values are evaluated
        // here, once, whether or not the template references them.
        for (key, value) in context {
            values.insert(key, value.resolve());
        }

        let mut entry = template::render(&self.template, |key| values.get(key).cloned())?;
        if self.ensure_newline && !entry.ends_with('\n') {
            entry.push('\n');
        }

        let mut handlers = self.handlers.lock();
        for handler in handlers.iter_mut() {
            handler.write(&entry, verbosity)?;
        }
        Ok(())
    }
}

fn format_error_trace(error: &(dyn Error + 'static)) -> String {
    let mut trace = format!("error: {}", error);
    let mut cause = error.source();
    while let Some(err) = cause {
        trace.push_str("\ncaused by: ");
        trace.push_str(&err.to_string());
        cause = err.source();
    }
    trace
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use sinklog::prelude::*;
///
/// let logger = Logger::builder("app")
///     .template("{time} {verbosity} [{module}:{line}] {message}")
///     .handler(StreamHandler::stdout())
///     .build();
/// ```
pub struct LoggerBuilder {
    name: String,
    template: String,
    timezone: LogTimezone,
    ensure_newline: bool,
    handlers: Vec<Box<dyn Handler>>,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: DEFAULT_TEMPLATE.to_string(),
            timezone: LogTimezone::Utc,
            ensure_newline: true,
            handlers: Vec::new(),
        }
    }

    /// Set the entry template
    #[must_use = "builder methods return a new value"]
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Set the timezone applied to `{time}`
    #[must_use = "builder methods return a new value"]
    pub fn timezone(mut self, timezone: LogTimezone) -> Self {
        self.timezone = timezone;
        self
    }

    /// Control trailing-newline enforcement (default: on)
    #[must_use = "builder methods return a new value"]
    pub fn ensure_newline(mut self, ensure: bool) -> Self {
        self.ensure_newline = ensure;
        self
    }

    /// Add a handler
    #[must_use = "builder methods return a new value"]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Build the Logger.
    ///
    /// A logger built without any handler gets a single stdout handler.
    pub fn build(self) -> Logger {
        let mut handlers = self.handlers;
        if handlers.is_empty() {
            handlers.push(Box::new(StreamHandler::stdout()));
        }
        Logger {
            name: self.name,
            template: self.template,
            timezone: self.timezone,
            ensure_newline: self.ensure_newline,
            handlers: Mutex::new(handlers),
        }
    }
}

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Process-wide convenience logger, lazily constructed on first use.
///
/// Carries a single stdout handler at `Debug` threshold and is never
/// reconfigured afterwards; applications that need their own template,
/// timezone, or handlers construct and pass around their own [`Logger`].
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| {
        Logger::builder("root")
            .handler(StreamHandler::stdout().with_min_verbosity(Verbosity::Debug))
            .build()
    })
}
