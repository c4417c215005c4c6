//! Stream handler implementation

use crate::core::{Handler, Result, Verbosity};
use std::io::{self, Write};

/// Handler over any writable text stream.
///
/// Wraps a pre-opened destination (stdout, stderr, or anything
/// implementing [`io::Write`]) and writes the literal entry text,
/// flushing after every accepted write. The handler does not manage the
/// stream's lifecycle beyond owning the handle it was given.
///
/// # Example
///
/// ```
/// use sinklog::handlers::StreamHandler;
/// use sinklog::core::Verbosity;
///
/// let handler = StreamHandler::stderr().with_min_verbosity(Verbosity::Error);
/// ```
pub struct StreamHandler<W: Write + Send> {
    stream: W,
    min_verbosity: Verbosity,
}

/// Stdout-backed stream handler, threshold `Info` by default.
pub type StdoutHandler = StreamHandler<io::Stdout>;

/// Stderr-backed stream handler, threshold `Warning` by default.
pub type StderrHandler = StreamHandler<io::Stderr>;

impl<W: Write + Send> StreamHandler<W> {
    /// Wrap an injected stream with the default `Info` threshold.
    pub fn new(stream: W) -> Self {
        Self {
            stream,
            min_verbosity: Verbosity::Info,
        }
    }

    #[must_use]
    pub fn with_min_verbosity(mut self, min_verbosity: Verbosity) -> Self {
        self.min_verbosity = min_verbosity;
        self
    }

    pub fn min_verbosity(&self) -> Verbosity {
        self.min_verbosity
    }

    /// Give back the wrapped stream.
    pub fn into_inner(self) -> W {
        self.stream
    }
}

impl StreamHandler<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl StreamHandler<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr()).with_min_verbosity(Verbosity::Warning)
    }
}

impl<W: Write + Send> Handler for StreamHandler<W> {
    fn write(&mut self, entry: &str, verbosity: Verbosity) -> Result<()> {
        if verbosity < self.min_verbosity {
            return Ok(());
        }
        self.stream.write_all(entry.as_bytes())?;
        self.stream.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_literal_entry() {
        let mut handler = StreamHandler::new(Vec::new());
        handler.write("hello\n", Verbosity::Info).unwrap();
        handler.write("world\n", Verbosity::Error).unwrap();
        assert_eq!(handler.into_inner(), b"hello\nworld\n");
    }

    #[test]
    fn test_threshold_filters() {
        let mut handler =
            StreamHandler::new(Vec::new()).with_min_verbosity(Verbosity::Warning);
        handler.write("quiet\n", Verbosity::Debug).unwrap();
        handler.write("quiet\n", Verbosity::Info).unwrap();
        handler.write("loud\n", Verbosity::Warning).unwrap();
        assert_eq!(handler.into_inner(), b"loud\n");
    }

    #[test]
    fn test_default_thresholds() {
        assert_eq!(StreamHandler::stdout().min_verbosity(), Verbosity::Info);
        assert_eq!(StreamHandler::stderr().min_verbosity(), Verbosity::Warning);
    }
}
